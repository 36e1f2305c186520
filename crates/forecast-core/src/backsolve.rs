use crate::types::TierValues;

/// Growth steps between month 1 and month 12. Month 1 is the unscaled start.
pub const STEPS_TO_MONTH_12: i32 = 11;

/// `(1 + rate)^steps`
pub fn growth_factor(rate: f64, steps: i32) -> f64 {
    (1.0 + rate).powf(f64::from(steps))
}

/// Ceiling on any single tier's subscriber count. At the top list price this
/// keeps a month's ARR below 10^17, far inside `u64`.
pub const MAX_SUBSCRIBERS: u64 = 1_000_000_000_000;

/// Round half to even and clamp to at least one subscriber, so a tier never
/// starts (or decays) to zero and stays there under multiplicative growth.
/// `None` when the count is not finite or exceeds [`MAX_SUBSCRIBERS`].
pub fn round_count(value: f64) -> Option<u64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round_ties_even().max(1.0);
    if rounded > MAX_SUBSCRIBERS as f64 {
        return None;
    }
    Some(rounded as u64)
}

/// Month-1 counts that compound to `month12_targets` after eleven steps.
/// `None` when a start count falls outside [`round_count`]'s range, which
/// only a steeply declining rate can cause.
pub fn backsolve(month12_targets: &TierValues<u64>, rate: f64) -> Option<TierValues<u64>> {
    let factor = growth_factor(rate, STEPS_TO_MONTH_12);
    month12_targets.try_map(|_, &target| round_count(target as f64 / factor))
}
