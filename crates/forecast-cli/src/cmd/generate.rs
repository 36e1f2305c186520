use super::load_scenarios;
use crate::output::{print_json, thousands};
use anyhow::Context;
use forecast_core::projection::forecast_all;
use forecast_core::report::write_reports;
use std::path::Path;

pub fn run(
    out_dir: &Path,
    scenarios: Option<&Path>,
    open_browser: bool,
    json: bool,
) -> anyhow::Result<()> {
    let set = load_scenarios(scenarios)?;
    let forecasts = forecast_all(&set).context("failed to project scenarios")?;
    let written = write_reports(out_dir, &forecasts).context("failed to write reports")?;

    if json {
        print_json(&written)?;
    } else {
        println!("Wrote {}", written.csv.display());
        println!("Wrote {}", written.html.display());
        for f in &forecasts {
            if let Some(m12) = f.month(12) {
                println!(
                    "  {:<14} month 12 MRR {:>12}  ARR {:>14}",
                    f.scenario,
                    thousands(m12.total_mrr),
                    thousands(m12.arr)
                );
            }
        }
    }

    if open_browser {
        tracing::info!(path = %written.html.display(), "opening dashboard");
        if let Err(e) = open::that(&written.html) {
            tracing::warn!("could not open browser: {e}");
            eprintln!("Open {} in a browser to view the dashboard.", written.html.display());
        }
    }
    Ok(())
}
