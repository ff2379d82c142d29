use crate::{
    config::Config,
    error::{Error, Result},
    extension::ExtensionSet,
    file::{extension_of, FileRecord},
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Counters collected during scanning.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ScanStats {
    /// Non-directory entries visited
    pub visited_files: usize,

    /// Files kept after filtering
    pub matched_files: usize,

    /// Files dropped because no include entry matched
    pub not_included: usize,

    /// Files dropped because an exclude entry matched
    pub excluded: usize,
}

/// Walks the root directory and collects matching files.
pub(crate) struct Scanner {
    root_dir: PathBuf,
    include: ExtensionSet,
    exclude: ExtensionSet,
}

impl Scanner {
    /// Creates a new scanner from configuration.
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            root_dir: config.root_dir.clone(),
            include: config.include.clone(),
            exclude: config.exclude.clone(),
        }
    }

    /// Scans the root directory depth-first and returns every matched file.
    ///
    /// Directories are traversed but never recorded. Entries in a directory
    /// are visited in file name order.
    ///
    /// # Errors
    ///
    /// Returns the first traversal or read error, naming the offending path.
    /// No partial result is returned.
    pub(crate) fn scan(&self) -> Result<Vec<FileRecord>> {
        let mut files = Vec::new();
        let mut stats = ScanStats::default();

        debug!("Starting scan of {}", self.root_dir.display());

        for entry in WalkDir::new(&self.root_dir).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            stats.visited_files += 1;
            if let Some(record) = self.process_entry(&entry, &mut stats)? {
                files.push(record);
            }
        }

        debug!(
            "Scan complete: {} visited, {} matched, {} not included, {} excluded",
            stats.visited_files, stats.matched_files, stats.not_included, stats.excluded
        );

        Ok(files)
    }

    /// Filters a single entry and reads it when it matches.
    fn process_entry(&self, entry: &DirEntry, stats: &mut ScanStats) -> Result<Option<FileRecord>> {
        let path = entry.path();

        match self.classify(extension_of(path)) {
            Decision::NotIncluded => {
                trace!("Skipping (not included): {}", path.display());
                stats.not_included += 1;
                return Ok(None);
            }
            Decision::Excluded => {
                trace!("Skipping (excluded): {}", path.display());
                stats.excluded += 1;
                return Ok(None);
            }
            Decision::Included => {}
        }

        let record = Self::read_record(entry, path)?;
        trace!("Included {} ({} bytes)", path.display(), record.size);
        stats.matched_files += 1;

        Ok(Some(record))
    }

    /// Applies the include rule, then the exclude rule, which always wins.
    fn classify(&self, extension: &str) -> Decision {
        let included = self.include.is_empty() || self.include.matches(extension);

        if self.exclude.matches(extension) {
            Decision::Excluded
        } else if included {
            Decision::Included
        } else {
            Decision::NotIncluded
        }
    }

    fn read_record(entry: &DirEntry, path: &Path) -> Result<FileRecord> {
        let size = entry.metadata()?.len();
        let bytes = fs::read(path).map_err(|e| Error::walk(path, e))?;
        let content = String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());

        Ok(FileRecord::new(path, size, content))
    }
}

/// Outcome of extension filtering for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Included,
    NotIncluded,
    Excluded,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn create_test_config(root: &Path, include: &str, exclude: &str) -> Config {
        Config::builder()
            .root_dir(root)
            .include_extensions(include)
            .exclude_extensions(exclude)
            .build()
            .unwrap()
    }

    fn names(files: &[FileRecord]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_scanner_filters_by_include() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.go").write_str("package main").unwrap();
        temp.child("b.md").write_str("# Title\ntext").unwrap();
        temp.child("c.rs").write_str("fn main() {}").unwrap();

        let config = create_test_config(temp.path(), "go,md", "");
        let files = Scanner::new(&config).scan().unwrap();

        assert_eq!(names(&files), ["a.go", "b.md"]);
        assert_eq!(files[0].size, 12);
        assert_eq!(files[1].size, 12);
        assert_eq!(files[1].content, "# Title\ntext");
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("keep.md").write_str("x").unwrap();
        temp.child("drop.go").write_str("y").unwrap();

        let config = create_test_config(temp.path(), "go,md", "GO");
        let files = Scanner::new(&config).scan().unwrap();

        assert_eq!(names(&files), ["keep.md"]);
    }

    #[test]
    fn test_empty_include_means_all() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("Makefile").write_str("all:").unwrap();
        temp.child("a.txt").write_str("x").unwrap();
        temp.child("b.css").write_str("y").unwrap();

        let config = create_test_config(temp.path(), "", "css");
        let files = Scanner::new(&config).scan().unwrap();

        assert_eq!(names(&files), ["Makefile", "a.txt"]);
    }

    #[test]
    fn test_extensionless_files_need_empty_include() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("LICENSE").write_str("MIT").unwrap();

        let config = create_test_config(temp.path(), "md", "");
        let files = Scanner::new(&config).scan().unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_only_excluded_files_yield_empty_list() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.go").write_str("package a").unwrap();
        temp.child("pkg/b.go").write_str("package b").unwrap();

        let config = create_test_config(temp.path(), "", "go");
        let files = Scanner::new(&config).scan().unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_scanner_nested_directories_depth_first() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("z.md").write_str("z").unwrap();
        temp.child("docs/intro.md").write_str("intro").unwrap();
        temp.child("docs/guide/setup.md").write_str("setup").unwrap();

        let config = create_test_config(temp.path(), "md", "");
        let files = Scanner::new(&config).scan().unwrap();

        assert_eq!(names(&files), ["setup.md", "intro.md", "z.md"]);
        assert!(files.iter().all(|f| !f.is_dir));
        assert!(files.iter().all(|f| f.path.starts_with(temp.path())));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("bin.md").write_binary(&[b'o', b'k', 0xFF]).unwrap();

        let config = create_test_config(temp.path(), "md", "");
        let files = Scanner::new(&config).scan().unwrap();

        assert_eq!(files[0].size, 3);
        assert!(files[0].content.starts_with("ok"));
    }

    #[test]
    fn test_classify_precedence() {
        let temp = assert_fs::TempDir::new().unwrap();
        let config = create_test_config(temp.path(), "md,go", "go");
        let scanner = Scanner::new(&config);

        assert_eq!(scanner.classify(".md"), Decision::Included);
        assert_eq!(scanner.classify(".go"), Decision::Excluded);
        assert_eq!(scanner.classify(".rs"), Decision::NotIncluded);
        assert_eq!(scanner.classify(""), Decision::NotIncluded);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_aborts_scan() {
        use std::os::unix::fs::PermissionsExt;

        let temp = assert_fs::TempDir::new().unwrap();
        let locked = temp.child("locked.md");
        locked.write_str("secret").unwrap();
        fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can read regardless of mode bits.
        if fs::read(locked.path()).is_ok() {
            return;
        }

        let config = create_test_config(temp.path(), "md", "");
        let err = Scanner::new(&config).scan().unwrap_err();

        assert!(err.is_walk());
        assert!(err.to_string().contains("locked.md"));
    }
}
