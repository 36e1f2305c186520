use crate::backsolve::{backsolve, round_count};
use crate::error::{ForecastError, Result};
use crate::scenario::{Scenario, ScenarioSet};
use crate::types::{Tier, TierValues};
use serde::{Deserialize, Serialize};

/// Months covered by every forecast.
pub const FORECAST_MONTHS: u32 = 24;

// ---------------------------------------------------------------------------
// ForecastRow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub month: u32,
    pub subscribers: TierValues<u64>,
    pub tier_mrr: TierValues<u64>,
    pub total_mrr: u64,
    pub arr: u64,
}

impl ForecastRow {
    /// Price out a month's subscriber counts. `None` if any revenue figure
    /// overflows `u64`.
    pub fn new(month: u32, subscribers: TierValues<u64>) -> Option<Self> {
        let tier_mrr = subscribers.try_map(|tier, &n| n.checked_mul(tier.price()))?;
        let total_mrr = tier_mrr
            .iter()
            .try_fold(0u64, |acc, (_, &v)| acc.checked_add(v))?;
        Some(Self {
            month,
            subscribers,
            tier_mrr,
            total_mrr,
            arr: total_mrr.checked_mul(12)?,
        })
    }
}

// ---------------------------------------------------------------------------
// ScenarioForecast
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioForecast {
    pub scenario: String,
    pub growth_rate: f64,
    pub month12_targets: TierValues<u64>,
    pub start_counts: TierValues<u64>,
    pub rows: Vec<ForecastRow>,
}

impl ScenarioForecast {
    /// Row for a 1-based month.
    pub fn month(&self, month: u32) -> Option<&ForecastRow> {
        let idx = usize::try_from(month.checked_sub(1)?).ok()?;
        self.rows.get(idx)
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Compound one month forward, rounding each tier to a whole subscriber.
pub fn step(counts: &TierValues<u64>, rate: f64) -> Option<TierValues<u64>> {
    counts.try_map(|_, &n| round_count(n as f64 * (1.0 + rate)))
}

/// Project a scenario over [`FORECAST_MONTHS`] months.
///
/// Month 1 is the backsolved start. Every later month is the previous
/// month's rounded count times `1 + rate`, rounded again. Rounding drift
/// accumulates month over month the way it does in real billing, so month
/// `m` can differ from `start * (1 + rate)^(m - 1)` rounded once.
///
/// Fails with [`ForecastError::Overflow`] at the first month whose counts
/// exceed [`MAX_SUBSCRIBERS`](crate::backsolve::MAX_SUBSCRIBERS) or whose
/// revenue does not fit in `u64`.
pub fn project(scenario: &Scenario) -> Result<ScenarioForecast> {
    let rate = scenario.monthly_growth_rate;
    let overflow = |month| ForecastError::Overflow {
        scenario: scenario.name.clone(),
        month,
    };
    let start_counts = backsolve(&scenario.month12_targets, rate).ok_or_else(|| overflow(1))?;

    let mut rows = Vec::with_capacity(FORECAST_MONTHS as usize);
    let mut counts = start_counts;
    for month in 1..=FORECAST_MONTHS {
        if month > 1 {
            counts = step(&counts, rate).ok_or_else(|| overflow(month))?;
        }
        rows.push(ForecastRow::new(month, counts).ok_or_else(|| overflow(month))?);
    }

    tracing::debug!(
        scenario = %scenario.name,
        month24_mrr = rows.last().map(|r| r.total_mrr).unwrap_or_default(),
        "projected scenario"
    );

    Ok(ScenarioForecast {
        scenario: scenario.name.clone(),
        growth_rate: rate,
        month12_targets: scenario.month12_targets,
        start_counts,
        rows,
    })
}

/// Project every scenario, preserving set order.
pub fn forecast_all(set: &ScenarioSet) -> Result<Vec<ScenarioForecast>> {
    set.iter().map(project).collect()
}

/// Total MRR recomputed from counts and list prices. `None` on overflow.
pub fn priced_total(subscribers: &TierValues<u64>) -> Option<u64> {
    Tier::ALL.iter().try_fold(0u64, |acc, &tier| {
        acc.checked_add(subscribers.get(tier).checked_mul(tier.price())?)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ScenarioForecast {
        let set = ScenarioSet::builtin();
        project(set.find("Base").unwrap()).unwrap()
    }

    #[test]
    fn twenty_four_rows_numbered_from_one() {
        for forecast in forecast_all(&ScenarioSet::builtin()).unwrap() {
            assert_eq!(forecast.rows.len(), 24);
            let months: Vec<u32> = forecast.rows.iter().map(|r| r.month).collect();
            assert_eq!(months, (1..=24).collect::<Vec<_>>());
        }
    }

    #[test]
    fn base_month_one_is_backsolved_start() {
        let f = base();
        assert_eq!(f.start_counts, TierValues::new(214, 86, 9));
        assert_eq!(f.month(1).unwrap().subscribers, f.start_counts);
        assert_eq!(f.month(1).unwrap().total_mrr, 71_560);
    }

    #[test]
    fn base_month_two_steps_once() {
        let f = base();
        assert_eq!(f.month(2).unwrap().subscribers, TierValues::new(231, 93, 10));
    }

    #[test]
    fn base_month_twelve_reflects_rounding_drift() {
        let f = base();
        let row = f.month(12).unwrap();
        assert_eq!(row.subscribers, TierValues::new(498, 201, 21));
        assert_eq!(row.tier_mrr, TierValues::new(44_322, 70_149, 52_500));
        assert_eq!(row.total_mrr, 166_971);
        assert_eq!(row.arr, 2_003_652);
    }

    #[test]
    fn base_month_twenty_four() {
        let f = base();
        let row = f.month(24).unwrap();
        assert_eq!(row.subscribers, TierValues::new(1253, 508, 53));
        assert_eq!(row.total_mrr, 421_309);
    }

    #[test]
    fn iterative_differs_from_closed_form() {
        let f = base();
        let closed = (214.0 * 1.08f64.powi(11)).round_ties_even() as u64;
        assert_eq!(closed, 499);
        assert_eq!(f.month(12).unwrap().subscribers.pro, 498);
    }

    #[test]
    fn counts_never_decrease_under_positive_growth() {
        for f in forecast_all(&ScenarioSet::builtin()).unwrap() {
            for pair in f.rows.windows(2) {
                for tier in Tier::ALL {
                    assert!(
                        pair[1].subscribers.get(tier) >= pair[0].subscribers.get(tier),
                        "{} {tier} fell at month {}",
                        f.scenario,
                        pair[1].month
                    );
                }
            }
        }
    }

    #[test]
    fn revenue_is_consistent() {
        for f in forecast_all(&ScenarioSet::builtin()).unwrap() {
            for row in &f.rows {
                assert_eq!(Some(row.total_mrr), priced_total(&row.subscribers));
                assert_eq!(row.arr, row.total_mrr * 12);
            }
        }
    }

    #[test]
    fn builtin_scenarios_land_on_target() {
        for f in forecast_all(&ScenarioSet::builtin()).unwrap() {
            let m12 = f.month(12).unwrap();
            for (tier, &target) in f.month12_targets.iter() {
                let projected = *m12.subscribers.get(tier);
                let tolerance = if f.scenario == "Base" && tier == Tier::Pro { 2 } else { 1 };
                assert!(
                    projected.abs_diff(target) <= tolerance,
                    "{} {tier}: {projected} vs {target}",
                    f.scenario
                );
            }
        }
    }

    #[test]
    fn builtin_tiers_grow_every_month() {
        for f in forecast_all(&ScenarioSet::builtin()).unwrap() {
            for pair in f.rows.windows(2) {
                for tier in Tier::ALL {
                    assert!(pair[1].subscribers.get(tier) > pair[0].subscribers.get(tier));
                }
            }
        }
    }

    #[test]
    fn hypergrowth_overflows_instead_of_panicking() {
        let s = Scenario::new("Hyper", TierValues::new(1000, 1000, 1000), 9.0);
        s.validate().unwrap();
        match project(&s) {
            Err(ForecastError::Overflow { scenario, month }) => {
                assert_eq!(scenario, "Hyper");
                assert_eq!(month, 14);
            }
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[test]
    fn overflow_in_one_scenario_fails_the_set() {
        let set = ScenarioSet {
            scenarios: vec![
                Scenario::new("Base", TierValues::new(500, 200, 20), 0.08),
                Scenario::new("Hyper", TierValues::new(1000, 1000, 1000), 9.0),
            ],
        };
        assert!(matches!(
            forecast_all(&set),
            Err(ForecastError::Overflow { scenario, .. }) if scenario == "Hyper"
        ));
    }

    #[test]
    fn revenue_overflow_is_detected() {
        assert!(ForecastRow::new(1, TierValues::new(1, 1, u64::MAX / 2500)).is_none());
        assert_eq!(priced_total(&TierValues::new(u64::MAX, 1, 1)), None);
    }

    #[test]
    fn declining_scenario_floors_at_one() {
        let s = Scenario::new("Wind-down", TierValues::new(2, 2, 2), -0.3);
        let f = project(&s).unwrap();
        assert!(f.rows.iter().all(|r| r.subscribers.ultra >= 1));
        assert_eq!(f.month(24).unwrap().subscribers, TierValues::new(1, 1, 1));
    }

    #[test]
    fn month_out_of_range() {
        let f = base();
        assert!(f.month(0).is_none());
        assert!(f.month(25).is_none());
    }
}
