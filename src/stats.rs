use serde::Serialize;

/// Aggregate statistics over the matched files.
///
/// Totals are accumulated one file at a time with [`Statistics::record`];
/// averages are computed once by [`Statistics::finish`] and are `0` when no
/// file was recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of files processed
    pub total_files: usize,

    /// Sum of file sizes in bytes
    pub total_size_bytes: u64,

    /// Mean file size in bytes
    pub average_file_size_bytes: f64,

    /// Sum of per-file token counts
    pub total_tokens: usize,

    /// Mean token count per file
    pub average_tokens_per_file: f64,
}

impl Statistics {
    /// Adds one file's size and token count to the totals.
    pub fn record(&mut self, size_bytes: u64, tokens: usize) {
        self.total_files += 1;
        self.total_size_bytes += size_bytes;
        self.total_tokens += tokens;
    }

    /// Computes the averages from the accumulated totals.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn finish(mut self) -> Self {
        if self.total_files > 0 {
            let files = self.total_files as f64;
            self.average_file_size_bytes = self.total_size_bytes as f64 / files;
            self.average_tokens_per_file = self.total_tokens as f64 / files;
        } else {
            self.average_file_size_bytes = 0.0;
            self.average_tokens_per_file = 0.0;
        }
        self
    }

    /// Total size in kibibytes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_size_kb(&self) -> f64 {
        self.total_size_bytes as f64 / 1024.0
    }

    /// Total size in mebibytes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_size_mb(&self) -> f64 {
        self.total_size_bytes as f64 / (1024.0 * 1024.0)
    }

    /// Average file size in kibibytes.
    #[must_use]
    pub fn average_file_size_kb(&self) -> f64 {
        self.average_file_size_bytes / 1024.0
    }
}
