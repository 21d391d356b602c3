use serde::{Deserialize, Serialize};

/// Number of entries in a rule table, one per possible live neighbor count (0..=6)
pub const RULE_COUNT: usize = 7;

/// Wealth delta table indexed by live neighbor count.
/// Positive entries are profits (and allow births), zero or negative are costs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WealthRules([i32; RULE_COUNT]);

impl WealthRules {
    pub const DEFAULT: Self = Self([-1, -3, -1, 1, -1, -2, -3]);

    pub const fn new(deltas: [i32; RULE_COUNT]) -> Self {
        Self(deltas)
    }

    /// Delta applied to a cell with `neighbors` live neighbors.
    /// Counts past the table (impossible on a hex grid) are neutral.
    pub fn delta(&self, neighbors: u8) -> i32 {
        self.0.get(neighbors as usize).copied().unwrap_or(0)
    }

    pub const fn deltas(&self) -> &[i32; RULE_COUNT] {
        &self.0
    }

    /// Replace one entry, returning the new table. Out of range indices are ignored.
    pub fn with_delta(mut self, index: usize, delta: i32) -> Self {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = delta;
        }
        self
    }

    /// Build from an arbitrary slice; `None` unless it has exactly seven entries
    pub fn from_slice(deltas: &[i32]) -> Option<Self> {
        <[i32; RULE_COUNT]>::try_from(deltas).ok().map(Self)
    }
}

impl Default for WealthRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        assert_eq!(WealthRules::default().deltas(), &[-1, -3, -1, 1, -1, -2, -3]);
    }

    #[test]
    fn test_delta_lookup() {
        let rules = WealthRules::new([-5, -3, 2, 3, -1, -2, -3]);
        assert_eq!(rules.delta(0), -5);
        assert_eq!(rules.delta(2), 2);
        assert_eq!(rules.delta(6), -3);
        assert_eq!(rules.delta(7), 0);
    }

    #[test]
    fn test_default_only_three_is_profitable() {
        let rules = WealthRules::default();
        let profitable: Vec<u8> = (0..=6).filter(|&n| rules.delta(n) > 0).collect();
        assert_eq!(profitable, vec![3]);
    }

    #[test]
    fn test_with_delta() {
        let rules = WealthRules::default().with_delta(0, 4);
        assert_eq!(rules.delta(0), 4);
        assert_eq!(WealthRules::default().with_delta(9, 4), WealthRules::default());
    }

    #[test]
    fn test_from_slice_requires_seven() {
        assert!(WealthRules::from_slice(&[1, 2, 3]).is_none());
        assert_eq!(
            WealthRules::from_slice(&[-1, -3, -1, 1, -1, -2, -3]),
            Some(WealthRules::DEFAULT)
        );
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&WealthRules::DEFAULT).unwrap();
        assert_eq!(json, "[-1,-3,-1,1,-1,-2,-3]");
    }
}
