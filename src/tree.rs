use crate::{
    error::{Error, Result},
    file::FileRecord,
};
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

const TITLE: &str = "Directory structure:";
const ROOT_GLYPH: &str = "└── ";
const BRANCH_GLYPH: &str = "├── ";
const DEPTH_PREFIX: &str = "│   ";
const MARGIN: &str = "    ";

/// Renders a flat file list as an indented directory tree.
///
/// ```text
/// Directory structure:
/// └── project/
///     ├── docs/
///     │   ├── intro.md
///     ├── main.go
/// ```
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    root: PathBuf,
    root_name: String,
}

impl TreeRenderer {
    /// Creates a renderer for files found under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` has no final component (e.g. `.`) and
    /// cannot be canonicalized to find one.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let root_name = Self::resolve_root_name(&root)?;
        Ok(Self { root, root_name })
    }

    /// Returns the base name shown on the root line.
    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    fn resolve_root_name(root: &Path) -> Result<String> {
        if let Some(name) = root.file_name() {
            return Ok(name.to_string_lossy().into_owned());
        }

        let absolute = root.canonicalize().map_err(|e| Error::walk(root, e))?;
        Ok(absolute.file_name().map_or_else(
            || absolute.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        ))
    }

    /// Sorts `files` by full path and writes the tree to `out`.
    ///
    /// Each directory prefix is written once, the first time a file below it
    /// is reached. Each file is written exactly once.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `out`.
    pub fn render<W: Write>(&self, files: &mut [FileRecord], out: &mut W) -> io::Result<()> {
        files.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));

        writeln!(out, "{TITLE}")?;
        writeln!(out, "{ROOT_GLYPH}{}/", self.root_name)?;

        let mut rendered_dirs: HashSet<String> = HashSet::new();

        for file in &*files {
            let components = self.relative_components(&file.path);
            let last = components.len().saturating_sub(1);

            for (depth, name) in components.iter().enumerate() {
                let indent = DEPTH_PREFIX.repeat(depth);

                if depth == last {
                    writeln!(out, "{MARGIN}{indent}{BRANCH_GLYPH}{name}")?;
                } else if rendered_dirs.insert(components[..=depth].join("/")) {
                    writeln!(out, "{MARGIN}{indent}{BRANCH_GLYPH}{name}/")?;
                }
            }
        }

        Ok(())
    }

    /// Splits a file path into name components relative to the root.
    fn relative_components(&self, path: &Path) -> Vec<String> {
        let relative = path.strip_prefix(&self.root).map_or_else(
            |_| pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf()),
            Path::to_path_buf,
        );

        relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect()
    }
}
