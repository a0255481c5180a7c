//! Host update frequencies.

use core::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stockboard_core::StockboardError;

/// Simulation ticks per second on the host.
pub const TICKS_PER_SECOND: u32 = 60;

/// How often the host runs the program.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateFrequency {
    /// A single run, then stop.
    Once,
    Update1,
    Update10,
    #[default]
    Update100,
}

impl UpdateFrequency {
    /// Host ticks between runs, `None` for a single run.
    pub fn ticks(self) -> Option<u32> {
        match self {
            Self::Once => None,
            Self::Update1 => Some(1),
            Self::Update10 => Some(10),
            Self::Update100 => Some(100),
        }
    }

    /// Wall-clock period between runs.
    pub fn period(self) -> Option<Duration> {
        self.ticks()
            .map(|t| Duration::from_secs_f64(f64::from(t) / f64::from(TICKS_PER_SECOND)))
    }
}

impl FromStr for UpdateFrequency {
    type Err = StockboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(Self::Once),
            "1" | "update1" => Ok(Self::Update1),
            "10" | "update10" => Ok(Self::Update10),
            "100" | "update100" => Ok(Self::Update100),
            other => Err(StockboardError::invalid_config(format!(
                "update frequency must be one of once, 1, 10, 100 (got {other:?})"
            ))),
        }
    }
}
