use super::load_scenarios;
use crate::output::{print_json, print_table};
use forecast_core::backsolve::{backsolve, growth_factor, STEPS_TO_MONTH_12};
use forecast_core::types::TierValues;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ScenarioSummary<'a> {
    name: &'a str,
    monthly_growth_rate: f64,
    growth_factor: f64,
    month12_targets: TierValues<u64>,
    /// `None` when the start count is out of range (steep decline).
    start_counts: Option<TierValues<u64>>,
}

pub fn run(scenarios: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let set = load_scenarios(scenarios)?;
    let summaries: Vec<ScenarioSummary> = set
        .iter()
        .map(|s| ScenarioSummary {
            name: &s.name,
            monthly_growth_rate: s.monthly_growth_rate,
            growth_factor: growth_factor(s.monthly_growth_rate, STEPS_TO_MONTH_12),
            month12_targets: s.month12_targets,
            start_counts: backsolve(&s.month12_targets, s.monthly_growth_rate),
        })
        .collect();

    if json {
        return print_json(&summaries);
    }

    let fmt_tiers = |v: &TierValues<u64>| format!("{}/{}/{}", v.pro, v.ent, v.ultra);
    let fmt_start = |v: &Option<TierValues<u64>>| match v {
        Some(v) => fmt_tiers(v),
        None => "overflow".to_string(),
    };
    let rows = summaries
        .iter()
        .map(|s| {
            vec![
                s.name.to_string(),
                format!("{:.1}%", s.monthly_growth_rate * 100.0),
                format!("{:.4}", s.growth_factor),
                fmt_tiers(&s.month12_targets),
                fmt_start(&s.start_counts),
            ]
        })
        .collect();
    print_table(
        &["SCENARIO", "GROWTH", "FACTOR", "M12 TARGET", "M1 START"],
        rows,
    );
    Ok(())
}
