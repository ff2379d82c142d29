use crate::{
    file::FileRecord,
    stats::Statistics,
    token::{TokenEstimator, WordTokenizer},
};
use std::io::{self, Write};
use tracing::trace;

const SEPARATOR_WIDTH: usize = 48;

/// Concatenates file contents into one report and gathers statistics.
///
/// Every record is written as a separator line, a `File <n>: <path>` header
/// (1-based), a second separator and the raw content. Consecutive entries are
/// separated by a blank line. Records are written in the order given.
pub struct ContentAggregator {
    tokenizer: Box<dyn TokenEstimator>,
    separator: String,
}

impl ContentAggregator {
    /// Creates an aggregator using [`WordTokenizer`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(WordTokenizer))
    }

    /// Creates an aggregator using a custom token estimator.
    #[must_use]
    pub fn with_tokenizer(tokenizer: Box<dyn TokenEstimator>) -> Self {
        Self {
            tokenizer,
            separator: "=".repeat(SEPARATOR_WIDTH),
        }
    }

    /// Writes the content report to `out` and returns the statistics.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `out`.
    pub fn write<W: Write>(&self, files: &[FileRecord], out: &mut W) -> io::Result<Statistics> {
        let mut stats = Statistics::default();

        for (i, file) in files.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }

            writeln!(out, "{}", self.separator)?;
            writeln!(out, "File {}: {}", i + 1, file.path.display())?;
            writeln!(out, "{}", self.separator)?;
            writeln!(out, "{}", file.content)?;

            let tokens = self.tokenizer.estimate(&file.content);
            trace!("{}: {} bytes, {} tokens", file.path.display(), file.size, tokens);
            stats.record(file.size, tokens);
        }

        Ok(stats.finish())
    }

    /// Computes the statistics without writing any report.
    #[must_use]
    pub fn statistics(&self, files: &[FileRecord]) -> Statistics {
        files
            .iter()
            .fold(Statistics::default(), |mut stats, file| {
                stats.record(file.size, self.tokenizer.estimate(&file.content));
                stats
            })
            .finish()
    }
}

impl Default for ContentAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContentAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentAggregator")
            .field("separator_width", &self.separator.len())
            .finish_non_exhaustive()
    }
}
