use crate::error::{Error, Result};
use crate::extension::ExtensionSet;
use std::path::{Path, PathBuf};

/// Default extensions to include.
pub const DEFAULT_INCLUDE: &str = "md,go,mbt";
/// Default extensions to exclude.
pub const DEFAULT_EXCLUDE: &str = "html,css";
const DEFAULT_STRUCTURE_FILE: &str = "directory-structure.txt";
const DEFAULT_CONTENT_FILE: &str = "content.txt";
const DEFAULT_SUMMARY_FILE: &str = "summary.txt";

/// Configuration for a dirdigest run.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Root directory to traverse
    pub root_dir: PathBuf,

    /// Extensions a file must have to be included (empty means all)
    pub include: ExtensionSet,

    /// Extensions that exclude a file, even if it is also included
    pub exclude: ExtensionSet,

    /// Destination of the directory structure report
    pub structure_file: PathBuf,

    /// Destination of the concatenated content report
    pub content_file: PathBuf,

    /// Destination of the statistics report
    pub summary_file: PathBuf,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirdigest::Config;
    ///
    /// let config = Config::builder()
    ///     .root_dir(".")
    ///     .include_extensions("rs,toml")
    ///     .exclude_extensions("")
    ///     .build()
    ///     .expect("valid configuration");
    ///
    /// assert!(config.include.matches(".rs"));
    /// assert!(config.exclude.is_empty());
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Root directory doesn't exist or is not a directory
    /// - An output path is empty
    /// - Two reports would be written to the same path
    pub fn validate(&self) -> Result<()> {
        if !self.root_dir.exists() {
            return Err(Error::root_not_found(&self.root_dir));
        }

        if !self.root_dir.is_dir() {
            return Err(Error::not_a_directory(&self.root_dir));
        }

        let outputs = self.output_files();
        for (name, path) in outputs {
            if path.as_os_str().is_empty() {
                return Err(Error::config(format!("{name} output path must not be empty")));
            }
        }

        for (i, (name_a, path_a)) in outputs.iter().enumerate() {
            for (name_b, path_b) in &outputs[i + 1..] {
                if path_a == path_b {
                    return Err(Error::config(format!(
                        "{name_a} and {name_b} reports share the output path {}",
                        path_a.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns the three report destinations, labeled.
    #[must_use]
    pub fn output_files(&self) -> [(&'static str, &Path); 3] {
        [
            ("structure", self.structure_file.as_path()),
            ("content", self.content_file.as_path()),
            ("summary", self.summary_file.as_path()),
        ]
    }

    /// Lines echoing the effective options before a run.
    #[must_use]
    pub fn echo_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Analyzing directory: {}", self.root_dir.display()),
            format!("Included extensions: {}", self.include),
            format!("Excluded extensions: {}", self.exclude),
        ];
        lines.extend(
            self.output_files()
                .iter()
                .map(|(name, path)| format!("{name} file: {}", path.display())),
        );
        lines
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            include: ExtensionSet::parse(DEFAULT_INCLUDE),
            exclude: ExtensionSet::parse(DEFAULT_EXCLUDE),
            structure_file: PathBuf::from(DEFAULT_STRUCTURE_FILE),
            content_file: PathBuf::from(DEFAULT_CONTENT_FILE),
            summary_file: PathBuf::from(DEFAULT_SUMMARY_FILE),
        }
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    root_dir: Option<PathBuf>,
    include: Option<ExtensionSet>,
    exclude: Option<ExtensionSet>,
    structure_file: Option<PathBuf>,
    content_file: Option<PathBuf>,
    summary_file: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Sets the root directory to traverse.
    #[must_use]
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(path.into());
        self
    }

    /// Sets the included extensions from a comma separated list.
    ///
    /// An empty list includes every file.
    #[must_use]
    pub fn include_extensions(mut self, list: &str) -> Self {
        self.include = Some(ExtensionSet::parse(list));
        self
    }

    /// Sets the excluded extensions from a comma separated list.
    #[must_use]
    pub fn exclude_extensions(mut self, list: &str) -> Self {
        self.exclude = Some(ExtensionSet::parse(list));
        self
    }

    /// Sets an already normalized include set.
    #[must_use]
    pub fn include(mut self, set: ExtensionSet) -> Self {
        self.include = Some(set);
        self
    }

    /// Sets an already normalized exclude set.
    #[must_use]
    pub fn exclude(mut self, set: ExtensionSet) -> Self {
        self.exclude = Some(set);
        self
    }

    /// Sets the directory structure report path.
    #[must_use]
    pub fn structure_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.structure_file = Some(path.into());
        self
    }

    /// Sets the content report path.
    #[must_use]
    pub fn content_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_file = Some(path.into());
        self
    }

    /// Sets the statistics report path.
    #[must_use]
    pub fn summary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary_file = Some(path.into());
        self
    }

    /// Sets all three report paths inside `dir`, using the default file names.
    #[must_use]
    pub fn output_dir(self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.structure_file(dir.join(DEFAULT_STRUCTURE_FILE))
            .content_file(dir.join(DEFAULT_CONTENT_FILE))
            .summary_file(dir.join(DEFAULT_SUMMARY_FILE))
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            root_dir: self.root_dir.unwrap_or_else(|| PathBuf::from(".")),
            include: self
                .include
                .unwrap_or_else(|| ExtensionSet::parse(DEFAULT_INCLUDE)),
            exclude: self
                .exclude
                .unwrap_or_else(|| ExtensionSet::parse(DEFAULT_EXCLUDE)),
            structure_file: self
                .structure_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STRUCTURE_FILE)),
            content_file: self
                .content_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_FILE)),
            summary_file: self
                .summary_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SUMMARY_FILE)),
        };

        config.validate()?;
        Ok(config)
    }
}
