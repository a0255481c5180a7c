//! Runtime configuration from the environment.
//!
//! Only scheduling and logging are configurable. Panel routing is fixed
//! by name suffix and has no knobs.

use stockboard_core::{StockboardError, StockboardResult};
use stockboard_observability::tracing::LogFormat;

use crate::frequency::UpdateFrequency;

pub const ENV_UPDATE_FREQUENCY: &str = "STOCKBOARD_UPDATE_FREQUENCY";
pub const ENV_MAX_TICKS: &str = "STOCKBOARD_MAX_TICKS";
pub const ENV_LOG_FORMAT: &str = "STOCKBOARD_LOG_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridConfig {
    pub update_frequency: UpdateFrequency,
    /// Stop after this many ticks; unlimited when `None`.
    pub max_ticks: Option<u64>,
    pub log_format: LogFormat,
}

impl GridConfig {
    pub fn from_env() -> StockboardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> StockboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_UPDATE_FREQUENCY) {
            config.update_frequency = raw
                .parse()
                .map_err(|e| StockboardError::invalid_config(format!("{ENV_UPDATE_FREQUENCY}: {e}")))?;
        }

        if let Some(raw) = lookup(ENV_MAX_TICKS) {
            let ticks = raw.trim().parse::<u64>().map_err(|e| {
                StockboardError::invalid_config(format!("{ENV_MAX_TICKS}: {e}"))
            })?;
            if ticks == 0 {
                return Err(StockboardError::invalid_config(format!(
                    "{ENV_MAX_TICKS}: must be positive"
                )));
            }
            config.max_ticks = Some(ticks);
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = LogFormat::from_name(&raw).ok_or_else(|| {
                StockboardError::invalid_config(format!(
                    "{ENV_LOG_FORMAT}: must be json or pretty (got {raw:?})"
                ))
            })?;
        }

        Ok(config)
    }
}
