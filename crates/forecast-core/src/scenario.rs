use crate::error::{ForecastError, Result};
use crate::types::TierValues;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// A named growth scenario: where each tier should be at month 12, and the
/// net monthly growth rate that gets it there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub month12_targets: TierValues<u64>,
    pub monthly_growth_rate: f64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, month12_targets: TierValues<u64>, rate: f64) -> Self {
        Self {
            name: name.into(),
            month12_targets,
            monthly_growth_rate: rate,
        }
    }

    /// The built-in scenario table, in report order.
    pub fn builtin() -> Vec<Scenario> {
        vec![
            Scenario::new("Conservative", TierValues::new(300, 120, 25), 0.05),
            Scenario::new("Base", TierValues::new(500, 200, 20), 0.08),
            Scenario::new("Aggressive", TierValues::new(1000, 400, 50), 0.11),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| ForecastError::InvalidScenario {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        for (tier, target) in self.month12_targets.iter() {
            if *target == 0 {
                return Err(invalid(format!("month-12 target for '{tier}' must be positive")));
            }
        }
        let rate = self.monthly_growth_rate;
        if !rate.is_finite() || rate <= -1.0 {
            return Err(invalid(format!(
                "monthly growth rate {rate} must be a finite number greater than -1"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ScenarioSet
// ---------------------------------------------------------------------------

/// An ordered, validated list of scenarios with unique names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    pub fn builtin() -> Self {
        Self {
            scenarios: Scenario::builtin(),
        }
    }

    /// Load a YAML scenario file of the form `scenarios: [...]`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let set: ScenarioSet = serde_yaml::from_str(&data)?;
        if set.scenarios.is_empty() {
            return Err(ForecastError::EmptyScenarioSet(path.to_path_buf()));
        }
        set.validate()?;
        Ok(set)
    }

    /// Use `path` when given, otherwise the built-in table.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let set = Self::load(p)?;
                tracing::info!(path = %p.display(), count = set.len(), "loaded scenario file");
                Ok(set)
            }
            None => {
                tracing::debug!("using built-in scenario table");
                Ok(Self::builtin())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            scenario.validate()?;
            if !seen.insert(scenario.name.to_lowercase()) {
                return Err(ForecastError::DuplicateScenario(scenario.name.clone()));
            }
        }
        Ok(())
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Result<&Scenario> {
        self.scenarios
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ForecastError::ScenarioNotFound(name.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
