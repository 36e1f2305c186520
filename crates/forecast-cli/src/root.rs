use std::path::{Path, PathBuf};

/// Resolve the directory reports are written to.
///
/// Priority:
/// 1. `--out-dir` flag / `FORECAST_OUT_DIR` env var (passed in as `explicit`)
/// 2. The invocation directory
pub fn resolve_out_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
