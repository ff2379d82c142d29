use crate::{
    aggregate::ContentAggregator,
    config::Config,
    error::Result,
    file::FileRecord,
    scanner::Scanner,
    stats::Statistics,
    summary::write_summary,
    tree::TreeRenderer,
    writer::write_report,
};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Outcome of a pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStats {
    /// Statistics over the matched files
    pub statistics: Statistics,

    /// Total execution time
    pub duration: Duration,

    /// Time spent scanning
    pub scan_duration: Duration,

    /// Time spent writing the three reports
    pub write_duration: Duration,

    /// Paths of the reports that were written
    pub reports: Vec<String>,
}

/// Runs scan, structure, content and summary stages one after another.
pub struct Pipeline {
    config: Config,
    scanner: Scanner,
    aggregator: ContentAggregator,
}

impl Pipeline {
    /// Creates a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails, for example when
    /// the root directory does not exist.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let scanner = Scanner::new(&config);

        Ok(Self {
            config,
            scanner,
            aggregator: ContentAggregator::new(),
        })
    }

    /// Executes the complete pipeline and returns statistics.
    ///
    /// # Process
    ///
    /// 1. **Scan**: walks the root and reads every matched file
    /// 2. **Structure**: sorts the files and writes the tree report
    /// 3. **Content**: writes the concatenated report and gathers statistics
    /// 4. **Summary**: writes the statistics report
    ///
    /// # Errors
    ///
    /// Returns the first error of any stage. Reports written by earlier
    /// stages are left in place.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirdigest::{Config, Pipeline};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::builder().root_dir("./docs").build()?;
    ///
    /// let stats = Pipeline::new(config)?.run()?;
    /// println!("{} files", stats.statistics.total_files);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self), fields(root_dir = %self.config.root_dir.display()))]
    pub fn run(self) -> Result<PipelineStats> {
        let start_time = Instant::now();

        debug!("Include: {}, exclude: {}", self.config.include, self.config.exclude);

        info!("Stage 1/4: Scanning directory...");
        let scan_start = Instant::now();
        let mut files = self.scanner.scan()?;
        let scan_duration = scan_start.elapsed();
        info!(
            "✓ Matched {} files in {:.2}s",
            files.len(),
            scan_duration.as_secs_f64()
        );

        let write_start = Instant::now();

        info!("Stage 2/4: Writing directory structure...");
        self.write_structure(&mut files)?;

        info!("Stage 3/4: Writing file contents...");
        let statistics = self.write_content(&files)?;

        info!("Stage 4/4: Writing statistics summary...");
        write_report(&self.config.summary_file, |out| write_summary(&statistics, out))?;

        let write_duration = write_start.elapsed();
        let duration = start_time.elapsed();

        info!(
            "✓ Processed {} files ({} tokens) in {:.2}s",
            statistics.total_files,
            statistics.total_tokens,
            duration.as_secs_f64()
        );

        Ok(PipelineStats {
            statistics,
            duration,
            scan_duration,
            write_duration,
            reports: self
                .config
                .output_files()
                .iter()
                .map(|(_, path)| path.display().to_string())
                .collect(),
        })
    }

    fn write_structure(&self, files: &mut [FileRecord]) -> Result<()> {
        let renderer = TreeRenderer::new(&self.config.root_dir)?;
        debug!("Tree root name: {}", renderer.root_name());

        write_report(&self.config.structure_file, |out| renderer.render(files, out))
    }

    fn write_content(&self, files: &[FileRecord]) -> Result<Statistics> {
        write_report(&self.config.content_file, |out| {
            self.aggregator.write(files, out)
        })
    }
}
