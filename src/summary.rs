//! Human-readable statistics reports.

use crate::stats::Statistics;
use std::io::{self, Write};

/// Writes the statistics report file layout.
///
/// ```text
/// Statistics Summary
/// =================
/// Total files processed: 2
/// Total file size: 0.02 KB (0.00 MB)
/// Average file size: 0.01 KB
/// Total tokens: 4
/// Average tokens per file: 2.00
/// ```
///
/// # Errors
///
/// Returns any error produced by `out`.
pub fn write_summary<W: Write>(stats: &Statistics, out: &mut W) -> io::Result<()> {
    writeln!(out, "Statistics Summary")?;
    writeln!(out, "=================")?;
    writeln!(out, "Total files processed: {}", stats.total_files)?;
    writeln!(
        out,
        "Total file size: {:.2} KB ({:.2} MB)",
        stats.total_size_kb(),
        stats.total_size_mb()
    )?;
    writeln!(out, "Average file size: {:.2} KB", stats.average_file_size_kb())?;
    writeln!(out, "Total tokens: {}", stats.total_tokens)?;
    writeln!(out, "Average tokens per file: {:.2}", stats.average_tokens_per_file)?;
    Ok(())
}

/// Writes the shorter console echo printed after a successful run.
///
/// # Errors
///
/// Returns any error produced by `out`.
pub fn write_console_summary<W: Write>(stats: &Statistics, out: &mut W) -> io::Result<()> {
    writeln!(out, "Statistics Summary:")?;
    writeln!(out, "Total files processed: {}", stats.total_files)?;
    writeln!(out, "Total file size: {:.2} KB", stats.total_size_kb())?;
    writeln!(out, "Average file size: {:.2} KB", stats.average_file_size_kb())?;
    writeln!(out, "Total tokens: {}", stats.total_tokens)?;
    writeln!(out, "Average tokens per file: {:.2}", stats.average_tokens_per_file)?;
    Ok(())
}
