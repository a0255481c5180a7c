//! Fixed-point item amounts.

use serde::{Deserialize, Serialize};
use stockboard_core::ValueObject;

/// Stack size as the host reports it: a fixed-point integer with six
/// implied decimal places (`1_000_000` raw == 1 item).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAmount(i64);

impl RawAmount {
    /// Raw units per whole item.
    pub const SCALE: i64 = 1_000_000;

    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Whole-item amount, convenient for fixtures.
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(Self::SCALE))
    }

    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Amount in item units. Negative raw values count as nothing.
    pub fn to_units(self) -> f64 {
        if self.0 <= 0 {
            return 0.0;
        }
        self.0 as f64 / Self::SCALE as f64
    }
}

impl ValueObject for RawAmount {}
