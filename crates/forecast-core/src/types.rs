use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Pro,
    Ent,
    Ultra,
}

impl Tier {
    /// Column order used by every emitter.
    pub const ALL: [Tier; 3] = [Tier::Pro, Tier::Ent, Tier::Ultra];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Pro => "pro",
            Tier::Ent => "ent",
            Tier::Ultra => "ultra",
        }
    }

    /// Monthly price per subscriber. Fixed for the whole run.
    pub fn price(self) -> u64 {
        match self {
            Tier::Pro => 89,
            Tier::Ent => 349,
            Tier::Ultra => 2500,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TierValues
// ---------------------------------------------------------------------------

/// One value per tier. Serializes as `{pro, ent, ultra}` in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierValues<T> {
    pub pro: T,
    pub ent: T,
    pub ultra: T,
}

impl<T> TierValues<T> {
    pub fn new(pro: T, ent: T, ultra: T) -> Self {
        Self { pro, ent, ultra }
    }

    pub fn get(&self, tier: Tier) -> &T {
        match tier {
            Tier::Pro => &self.pro,
            Tier::Ent => &self.ent,
            Tier::Ultra => &self.ultra,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Tier) -> T) -> Self {
        Self {
            pro: f(Tier::Pro),
            ent: f(Tier::Ent),
            ultra: f(Tier::Ultra),
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Tier, &T) -> U) -> TierValues<U> {
        TierValues::from_fn(|tier| f(tier, self.get(tier)))
    }

    /// Like [`map`](Self::map), short-circuiting on the first `None`.
    pub fn try_map<U>(&self, mut f: impl FnMut(Tier, &T) -> Option<U>) -> Option<TierValues<U>> {
        Some(TierValues {
            pro: f(Tier::Pro, &self.pro)?,
            ent: f(Tier::Ent, &self.ent)?,
            ultra: f(Tier::Ultra, &self.ultra)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_are_fixed() {
        assert_eq!(Tier::Pro.price(), 89);
        assert_eq!(Tier::Ent.price(), 349);
        assert_eq!(Tier::Ultra.price(), 2500);
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&Tier::Ultra).unwrap();
        assert_eq!(json, "\"ultra\"");
        let parsed: Tier = serde_yaml::from_str("ent").unwrap();
        assert_eq!(parsed, Tier::Ent);
    }

    #[test]
    fn iter_follows_column_order() {
        let v = TierValues::new(1, 2, 3);
        let tiers: Vec<Tier> = v.iter().map(|(t, _)| t).collect();
        assert_eq!(tiers, Tier::ALL.to_vec());
    }

    #[test]
    fn map_passes_tier() {
        let counts = TierValues::new(2u64, 3, 4);
        let mrr = counts.map(|tier, n| n * tier.price());
        assert_eq!(mrr, TierValues::new(178, 1047, 10000));
    }

    #[test]
    fn try_map_stops_at_none() {
        let v = TierValues::new(1u64, 2, 3);
        assert_eq!(v.try_map(|_, &n| n.checked_sub(1)), Some(TierValues::new(0, 1, 2)));
        assert_eq!(v.try_map(|_, &n| n.checked_sub(2)), None);
    }

    #[test]
    fn json_field_order_is_stable() {
        let v = TierValues::new(1, 2, 3);
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            r#"{"pro":1,"ent":2,"ultra":3}"#
        );
    }
}
