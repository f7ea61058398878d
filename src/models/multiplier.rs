use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Size coefficient with two decimal places (0.00 to 99.99).
///
/// Stored as hundredths so that `floor(base * multiplier)` is exact integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier(u32);

impl Multiplier {
    pub const ZERO: Multiplier = Multiplier(0);
    pub const ONE: Multiplier = Multiplier(100);

    /// Largest value a coefficient can hold (99.99).
    pub const MAX_HUNDREDTHS: u32 = 9_999;

    #[inline]
    pub fn hundredths(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Scale a base value, truncating toward zero.
    pub fn apply(self, base: u32) -> u32 {
        let scaled = (base as u64 * self.0 as u64) / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = MenuError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(MenuError::InvalidInput(format!(
                "multiplier must be a non-negative number, got {}",
                value
            )));
        }
        let hundredths = (value * 100.0).round();
        if hundredths > Self::MAX_HUNDREDTHS as f64 {
            return Err(MenuError::InvalidInput(format!(
                "multiplier {} exceeds 99.99",
                value
            )));
        }
        Ok(Self(hundredths as u32))
    }
}

impl From<Multiplier> for f64 {
    fn from(m: Multiplier) -> f64 {
        m.as_f64()
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_apply_truncates() {
        let m = Multiplier::try_from(1.3).unwrap();
        assert_eq!(m.apply(400), 520);
        // 333 * 1.5 = 499.5
        assert_eq!(Multiplier::try_from(1.5).unwrap().apply(333), 499);
    }

    #[test]
    fn test_apply_exact_where_float_would_drift() {
        // 0.29 * 100 in f64 is 28.999999999999996
        let m = Multiplier::try_from(0.29).unwrap();
        assert_eq!(m.hundredths(), 29);
        assert_eq!(m.apply(100), 29);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(Multiplier::try_from(-0.5).is_err());
        assert!(Multiplier::try_from(f64::NAN).is_err());
        assert!(Multiplier::try_from(100.0).is_err());
        assert!(Multiplier::try_from(99.99).is_ok());
    }

    #[test]
    fn test_serde_as_number() {
        let m: Multiplier = serde_json::from_str("1.25").unwrap();
        assert_eq!(m.hundredths(), 125);
        assert_float_absolute_eq!(m.as_f64(), 1.25);

        let back = serde_json::to_string(&m).unwrap();
        assert_eq!(back, "1.25");

        let from_int: Multiplier = serde_json::from_str("2").unwrap();
        assert_eq!(from_int.to_string(), "2.00");
        assert!(serde_json::from_str::<Multiplier>("-1").is_err());
    }
}
