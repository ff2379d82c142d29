use crate::error::{Error, Result};
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};
use tracing::debug;

/// Writes one report to `path`.
///
/// Missing parent directories are created. The file is opened, filled by
/// `fill`, flushed and closed before returning, on success and on error alike.
/// A failed write leaves whatever was already written in place.
///
/// # Errors
///
/// Returns [`Error::Output`] naming `path` if the destination cannot be
/// created or `fill` fails.
pub(crate) fn write_report<T, F>(path: &Path, fill: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<fs::File>) -> io::Result<T>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::output(path, e))?;
    }

    let file = fs::File::create(path).map_err(|e| Error::output(path, e))?;
    let mut writer = BufWriter::new(file);

    let value = fill(&mut writer).map_err(|e| Error::output(path, e))?;
    writer.flush().map_err(|e| Error::output(path, e))?;

    debug!("Wrote {}", path.display());
    Ok(value)
}
