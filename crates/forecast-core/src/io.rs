use crate::error::{ForecastError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically replace `path` with `data` via a tempfile in the same directory.
/// Any failure is reported against `path`.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    write_via_tempfile(path, data).map_err(|source| ForecastError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_via_tempfile(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
