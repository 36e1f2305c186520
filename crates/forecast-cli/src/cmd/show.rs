use super::load_scenarios;
use crate::output::{print_json, print_table, thousands};
use anyhow::Context;
use forecast_core::projection::{forecast_all, project, ScenarioForecast};
use std::path::Path;

pub fn run(scenarios: Option<&Path>, only: Option<&str>, json: bool) -> anyhow::Result<()> {
    let set = load_scenarios(scenarios)?;
    let forecasts: Vec<ScenarioForecast> = match only {
        Some(name) => {
            let scenario = set.find(name).context("unknown scenario")?;
            vec![project(scenario)?]
        }
        None => forecast_all(&set)?,
    };

    if json {
        return print_json(&forecasts);
    }

    for (i, f) in forecasts.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} ({:.1}% monthly growth)",
            f.scenario,
            f.growth_rate * 100.0
        );
        let rows = f
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.month.to_string(),
                    thousands(r.subscribers.pro),
                    thousands(r.subscribers.ent),
                    thousands(r.subscribers.ultra),
                    thousands(r.total_mrr),
                    thousands(r.arr),
                ]
            })
            .collect();
        print_table(&["MONTH", "PRO", "ENT", "ULTRA", "MRR", "ARR"], rows);
    }
    Ok(())
}
