mod csv;
mod html;

pub use csv::{render_csv, CSV_HEADER};
pub use html::render_html;

use crate::error::Result;
use crate::io::atomic_write;
use crate::paths;
use crate::projection::ScenarioForecast;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Files written by [`write_reports`].
#[derive(Debug, Clone, Serialize)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub html: PathBuf,
}

/// Render both reports and overwrite them in `out_dir`.
pub fn write_reports(out_dir: &Path, forecasts: &[ScenarioForecast]) -> Result<ReportPaths> {
    let csv = paths::csv_path(out_dir);
    atomic_write(&csv, render_csv(forecasts).as_bytes())?;
    tracing::info!(path = %csv.display(), "wrote forecast csv");

    let html = paths::html_path(out_dir);
    atomic_write(&html, render_html(forecasts)?.as_bytes())?;
    tracing::info!(path = %html.display(), "wrote forecast dashboard");

    Ok(ReportPaths { csv, html })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::forecast_all;
    use crate::scenario::ScenarioSet;
    use tempfile::TempDir;

    #[test]
    fn writes_both_files() {
        let dir = TempDir::new().unwrap();
        let forecasts = forecast_all(&ScenarioSet::builtin()).unwrap();
        let written = write_reports(dir.path(), &forecasts).unwrap();
        assert_eq!(written.csv, dir.path().join("revenue_forecast.csv"));
        assert_eq!(written.html, dir.path().join("revenue_dashboard.html"));

        let csv = std::fs::read_to_string(&written.csv).unwrap();
        assert_eq!(csv.lines().count(), 1 + 24 * 3);
        let html = std::fs::read_to_string(&written.html).unwrap();
        assert!(html.contains("\"scenario\":\"Aggressive\""));
    }

    #[test]
    fn rerun_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let forecasts = forecast_all(&ScenarioSet::builtin()).unwrap();
        let first = write_reports(dir.path(), &forecasts).unwrap();
        let csv1 = std::fs::read(&first.csv).unwrap();
        let html1 = std::fs::read(&first.html).unwrap();

        let again = forecast_all(&ScenarioSet::builtin()).unwrap();
        let second = write_reports(dir.path(), &again).unwrap();
        assert_eq!(std::fs::read(&second.csv).unwrap(), csv1);
        assert_eq!(std::fs::read(&second.html).unwrap(), html1);
    }

    #[test]
    fn overwrites_stale_output() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("revenue_forecast.csv"), "stale\n".repeat(500)).unwrap();
        let forecasts = forecast_all(&ScenarioSet::builtin()).unwrap();
        let written = write_reports(dir.path(), &forecasts).unwrap();
        let csv = std::fs::read_to_string(written.csv).unwrap();
        assert!(!csv.contains("stale"));
    }
}
