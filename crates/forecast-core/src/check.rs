//! Sanity checks over a computed forecast.
//!
//! The projector rounds at every month, so month 12 does not land exactly on
//! the scenario's target. The drift it can accumulate is bounded: the start
//! is off by at most one subscriber (rounding or the minimum-1 floor), which
//! then compounds for eleven steps, and every later step adds at most half a
//! subscriber that compounds for the steps remaining after it.

use crate::backsolve::{growth_factor, STEPS_TO_MONTH_12};
use crate::projection::{priced_total, ScenarioForecast, FORECAST_MONTHS};
use crate::types::Tier;
use serde::{Deserialize, Serialize};

/// Relative drift above which a tier is reported even though it is in bounds.
pub const DRIFT_WARN_RATIO: f64 = 0.10;

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub level: Level,
    pub scenario: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTrip {
    pub scenario: String,
    pub tier: Tier,
    pub target: u64,
    pub projected: u64,
    pub drift: i64,
    pub bound: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    pub round_trips: Vec<RoundTrip>,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.level == Level::Error)
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Largest month-12 drift per-step rounding can produce for `rate >= 0`.
pub fn drift_bound(rate: f64) -> f64 {
    let start = growth_factor(rate, STEPS_TO_MONTH_12);
    let steps: f64 = (0..STEPS_TO_MONTH_12)
        .map(|k| growth_factor(rate, k))
        .sum();
    start + 0.5 * steps
}

pub fn check(forecasts: &[ScenarioForecast]) -> CheckReport {
    let mut report = CheckReport::default();
    for forecast in forecasts {
        check_one(forecast, &mut report);
    }
    report
}

fn check_one(f: &ScenarioForecast, report: &mut CheckReport) {
    let mut findings = Vec::new();
    let mut push = |level: Level, message: String| {
        findings.push(Finding {
            level,
            scenario: f.scenario.clone(),
            message,
        });
    };

    if f.rows.len() != FORECAST_MONTHS as usize {
        push(
            Level::Error,
            format!("expected {FORECAST_MONTHS} rows, found {}", f.rows.len()),
        );
    }

    for row in &f.rows {
        let priced = priced_total(&row.subscribers);
        let consistent =
            priced == Some(row.total_mrr) && row.total_mrr.checked_mul(12) == Some(row.arr);
        if !consistent {
            let priced = priced.map_or_else(|| "overflow".to_string(), |p| p.to_string());
            push(
                Level::Error,
                format!(
                    "month {}: revenue mismatch (total_mrr {} vs priced {priced}, arr {})",
                    row.month, row.total_mrr, row.arr
                ),
            );
        }
    }

    let growing = f.growth_rate >= 0.0;
    if growing {
        for pair in f.rows.windows(2) {
            for tier in Tier::ALL {
                let (prev, next) = (pair[0].subscribers.get(tier), pair[1].subscribers.get(tier));
                if next < prev {
                    push(
                        Level::Error,
                        format!("{tier} fell from {prev} to {next} at month {}", pair[1].month),
                    );
                }
            }
        }
    }

    if let Some(month12) = f.month(12) {
        let bound = drift_bound(f.growth_rate);
        for (tier, &target) in f.month12_targets.iter() {
            let projected = *month12.subscribers.get(tier);
            let drift = projected as i64 - target as i64;
            let magnitude = drift.unsigned_abs() as f64;
            if growing && magnitude > bound {
                push(
                    Level::Error,
                    format!("{tier}: month-12 drift {drift} exceeds bound {bound:.2}"),
                );
            } else if magnitude > target as f64 * DRIFT_WARN_RATIO {
                push(
                    Level::Warning,
                    format!("{tier}: month 12 projects {projected} against target {target}"),
                );
            }
            report.round_trips.push(RoundTrip {
                scenario: f.scenario.clone(),
                tier,
                target,
                projected,
                drift,
                bound,
            });
        }
    }

    report.findings.extend(findings);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
