use std::path::{Path, PathBuf};

/// A matched file with its metadata and content.
///
/// Records are created once during traversal and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path as produced by the walk (root joined with the relative path)
    pub path: PathBuf,

    /// Always false for records produced by the scanner
    pub is_dir: bool,

    /// On-disk size in bytes
    pub size: u64,

    /// File content decoded as text
    pub content: String,
}

impl FileRecord {
    /// Creates a new file record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, size: u64, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            size,
            content: content.into(),
        }
    }

    /// Returns the extension of this record's path, see [`extension_of`].
    #[must_use]
    pub fn extension(&self) -> &str {
        extension_of(&self.path)
    }
}

/// Returns the extension of a path's base name, including the leading dot.
///
/// The extension is everything from the last `.` of the base name, so
/// `.bashrc` yields `.bashrc` and `archive.tar.gz` yields `.gz`. Names
/// without a dot yield an empty string.
#[must_use]
pub fn extension_of(path: &Path) -> &str {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return "";
    };
    name.rfind('.').map_or("", |idx| &name[idx..])
}
