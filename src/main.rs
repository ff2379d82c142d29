use anyhow::Context;
use clap::Parser;
use dirdigest::{summary::write_console_summary, Config, Pipeline, DEFAULT_EXCLUDE, DEFAULT_INCLUDE};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "dirdigest",
    version,
    author,
    about = "Package a directory into structure, content and summary reports",
    long_about = "Walks a directory, keeps files whose extension is included and not excluded, \
    and writes three reports: a directory tree, the concatenated file contents and a \
    statistics summary. Exclusion always wins over inclusion.\n\n\
    USAGE EXAMPLES:\n  \
      # Analyze the current directory with the defaults\n  \
      dirdigest\n\n  \
      # Every file except Go sources\n  \
      dirdigest --dir ./project --include '' --exclude go\n\n  \
      # Rust sources, reports in ./out\n  \
      dirdigest -i rs,toml --structure out/tree.txt --content out/all.txt --summary out/stats.txt"
)]
struct Cli {
    /// Root directory to analyze
    #[arg(short, long, default_value = ".", value_name = "PATH")]
    dir: PathBuf,

    /// Extensions to include (comma separated, empty means all)
    #[arg(short, long, default_value = DEFAULT_INCLUDE, value_name = "EXTS")]
    include: String,

    /// Extensions to exclude (comma separated, overrides --include)
    #[arg(short, long, default_value = DEFAULT_EXCLUDE, value_name = "EXTS")]
    exclude: String,

    /// Output file for the directory structure
    #[arg(long, default_value = "directory-structure.txt", value_name = "FILE")]
    structure: PathBuf,

    /// Output file for the file contents
    #[arg(long, default_value = "content.txt", value_name = "FILE")]
    content: PathBuf,

    /// Output file for the statistics summary
    #[arg(long, default_value = "summary.txt", value_name = "FILE")]
    summary: PathBuf,

    /// Print the statistics as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = Config::builder()
        .root_dir(cli.dir)
        .include_extensions(&cli.include)
        .exclude_extensions(&cli.exclude)
        .structure_file(cli.structure)
        .content_file(cli.content)
        .summary_file(cli.summary)
        .build()
        .context("Failed to build configuration")?;

    for line in config.echo_lines() {
        info!("{line}");
    }

    let stats = Pipeline::new(config)
        .context("Failed to create pipeline")?
        .run()
        .context("Pipeline execution failed")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Processing completed successfully!")?;
    writeln!(stdout)?;
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &stats.statistics)?;
        writeln!(stdout)?;
    } else {
        write_console_summary(&stats.statistics, &mut stdout)?;
    }

    Ok(())
}

fn setup_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("dirdigest=info"),
        1 => EnvFilter::new("dirdigest=debug"),
        _ => EnvFilter::new("dirdigest=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}
