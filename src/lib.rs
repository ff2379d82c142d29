//! # dirdigest
//!
//! Packages a directory tree into three plain-text reports that are easy to
//! hand to downstream text-consuming tools.
//!
//! ## Reports
//!
//! - **Structure**: a tree of every matched file and the directories above it
//! - **Content**: every matched file's content behind a numbered header
//! - **Summary**: file count, total and average size, token counts
//!
//! ## Quick Start
//!
//! ```no_run
//! use dirdigest::{Config, Pipeline};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .root_dir("./src")
//!     .include_extensions("rs,toml")
//!     .exclude_extensions("")
//!     .build()?;
//!
//! let stats = Pipeline::new(config)?.run()?;
//! println!("{} tokens", stats.statistics.total_tokens);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Stages run sequentially:
//! 1. **Scanner**: walks the root and filters by extension (exclude wins)
//! 2. **Tree renderer**: sorts the files and draws the directory tree
//! 3. **Content aggregator**: concatenates contents, counting tokens
//! 4. **Summary**: formats the statistics

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod aggregate;
mod config;
mod error;
mod extension;
mod file;
mod pipeline;
mod scanner;
mod stats;
mod token;
mod tree;
mod writer;

pub mod summary;

pub use aggregate::ContentAggregator;
pub use config::{Config, ConfigBuilder, DEFAULT_EXCLUDE, DEFAULT_INCLUDE};
pub use error::{Error, Result};
pub use extension::ExtensionSet;
pub use file::{extension_of, FileRecord};
pub use pipeline::{Pipeline, PipelineStats};
pub use stats::Statistics;
pub use token::{count_tokens, TokenEstimator, WordTokenizer};
pub use tree::TreeRenderer;

/// Runs the complete pipeline with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Root directory doesn't exist or is not a directory
/// - A file cannot be visited or read during the walk
/// - A report cannot be created or written
///
/// # Examples
///
/// ```no_run
/// use dirdigest::{Config, run};
///
/// # fn main() -> anyhow::Result<()> {
/// let config = Config::builder().root_dir(".").build()?;
///
/// let stats = run(config)?;
/// assert_eq!(stats.reports.len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn run(config: Config) -> Result<PipelineStats> {
    Pipeline::new(config)?.run()
}
