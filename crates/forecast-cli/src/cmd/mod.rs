pub mod check;
pub mod generate;
pub mod scenarios;
pub mod show;

use anyhow::Context;
use forecast_core::scenario::ScenarioSet;
use std::path::Path;

/// Scenario file if given, otherwise the built-in table.
pub(crate) fn load_scenarios(path: Option<&Path>) -> anyhow::Result<ScenarioSet> {
    ScenarioSet::resolve(path).with_context(|| match path {
        Some(p) => format!("failed to load scenarios from {}", p.display()),
        None => "failed to load built-in scenarios".to_string(),
    })
}
