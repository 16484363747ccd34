//! Capacity utilisation rendered to one decimal place.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Share of a store's capacity that was allocated, to one decimal place.
///
/// Stored as tenths of a percent and computed with integer arithmetic,
/// rounding half up: `(allocated * 1000 + capacity / 2) / capacity`.
/// A capacity of zero yields `0.0`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapacityPercentage(u64);

impl CapacityPercentage {
    pub const ZERO: Self = Self(0);

    pub fn of(allocated: u64, capacity: u64) -> Self {
        if capacity == 0 {
            return Self::ZERO;
        }
        let scaled = u128::from(allocated) * 1000 + u128::from(capacity / 2);
        let tenths = scaled / u128::from(capacity);
        Self(u64::try_from(tenths).unwrap_or(u64::MAX))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl core::fmt::Display for CapacityPercentage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl core::str::FromStr for CapacityPercentage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = s
            .split_once('.')
            .ok_or_else(|| format!("expected one decimal place, got {s:?}"))?;
        if frac.len() != 1 {
            return Err(format!("expected one decimal place, got {s:?}"));
        }
        // digits only: no sign
        if whole.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            return Err(format!("expected an unsigned decimal, got {s:?}"));
        }
        let whole: u64 = whole.parse().map_err(|e| format!("{s:?}: {e}"))?;
        let frac: u64 = frac.parse().map_err(|e| format!("{s:?}: {e}"))?;
        whole
            .checked_mul(10)
            .and_then(|tenths| tenths.checked_add(frac))
            .map(Self)
            .ok_or_else(|| format!("{s:?} is out of range"))
    }
}

// Reports carry the percentage as the formatted string (e.g. "28.0").
impl Serialize for CapacityPercentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CapacityPercentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
