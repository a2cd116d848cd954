// Money - Fixed-point monetary amount
//
// Amounts are stored as minor currency units (cents) in an i64 so that
// repeated updates never accumulate binary floating point drift. The wire
// format stays a plain JSON number of major units ("amount": 200.0), so
// existing clients keep working unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Monetary amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// Create from minor units (cents)
    pub fn from_minor_units(cents: i64) -> Self {
        Money(cents)
    }

    /// Create from major units (e.g. 100.5 dollars -> 10050 cents).
    /// Sub-cent input is rounded half away from zero.
    pub fn from_major_units(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    /// Amount in minor units (cents)
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Amount in major units, for the JSON wire format
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// Serialized as a JSON number of major units, matching the `amount` field
// shape clients already send and receive.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Money::from_major_units(value))
    }
}

// ============================================================================
// TESTS
// ============================================================================
