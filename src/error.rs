use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the dirdigest library.
///
/// Every variant is fatal: the pipeline stops at the first error and
/// leaves already-written reports in place.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The root directory to analyze does not exist.
    #[error("Directory {} does not exist", .path.display())]
    RootNotFound {
        /// Configured root path
        path: PathBuf,
    },

    /// The root path exists but is not a directory.
    #[error("Root path is not a directory: {}", .path.display())]
    NotADirectory {
        /// Configured root path
        path: PathBuf,
    },

    /// Traversal failed while visiting or reading an entry.
    #[error("Unable to read '{}': {message}", .path.display())]
    Walk {
        /// Entry that could not be visited or read
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// An output report could not be created or written.
    #[error("Unable to write report '{}': {message}", .path.display())]
    Output {
        /// Destination of the report
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },
}

impl Error {
    /// Creates a traversal error for the given entry.
    #[must_use]
    pub fn walk(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Walk {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates an output error for the given report destination.
    #[must_use]
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a missing root error.
    #[must_use]
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    /// Creates a root-is-not-a-directory error.
    #[must_use]
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Returns true if this is a traversal error.
    #[must_use]
    pub const fn is_walk(&self) -> bool {
        matches!(self, Self::Walk { .. })
    }

    /// Returns true if this is an output error.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(self, Self::Output { .. })
    }

    /// Returns true if this is a configuration or pre-flight error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::RootNotFound { .. } | Self::NotADirectory { .. }
        )
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map(PathBuf::from).unwrap_or_default();
        let message = e
            .io_error()
            .map_or_else(|| e.to_string(), ToString::to_string);
        Self::Walk { path, message }
    }
}
