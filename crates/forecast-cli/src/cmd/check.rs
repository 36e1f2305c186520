use super::load_scenarios;
use crate::output::{print_json, print_table};
use anyhow::Context;
use forecast_core::check::{check, Level};
use forecast_core::projection::forecast_all;
use std::path::Path;

pub fn run(scenarios: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let set = load_scenarios(scenarios)?;
    let forecasts = forecast_all(&set).context("failed to project scenarios")?;
    let report = check(&forecasts);

    if json {
        print_json(&report)?;
    } else {
        let rows = report
            .round_trips
            .iter()
            .map(|rt| {
                vec![
                    rt.scenario.clone(),
                    rt.tier.to_string(),
                    rt.target.to_string(),
                    rt.projected.to_string(),
                    format!("{:+}", rt.drift),
                    format!("{:.2}", rt.bound),
                ]
            })
            .collect();
        print_table(
            &["SCENARIO", "TIER", "TARGET", "MONTH 12", "DRIFT", "BOUND"],
            rows,
        );

        if report.findings.is_empty() {
            println!("\nAll checks passed.");
        } else {
            println!();
            for f in &report.findings {
                let tag = match f.level {
                    Level::Error => "error",
                    Level::Warning => "warning",
                };
                println!("{tag}: [{}] {}", f.scenario, f.message);
            }
        }
    }

    if report.has_errors() {
        anyhow::bail!("forecast check failed");
    }
    Ok(())
}
