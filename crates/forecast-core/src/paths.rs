use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Output file names
// ---------------------------------------------------------------------------

pub const CSV_FILE: &str = "revenue_forecast.csv";
pub const HTML_FILE: &str = "revenue_dashboard.html";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn csv_path(out_dir: &Path) -> PathBuf {
    out_dir.join(CSV_FILE)
}

pub fn html_path(out_dir: &Path) -> PathBuf {
    out_dir.join(HTML_FILE)
}
