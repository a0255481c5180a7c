//! Panel routing by name suffix.

use serde::{Deserialize, Serialize};

/// Panels whose name ends with this show items in stock.
pub const AVAILABLE_SUFFIX: &str = "[available]";

/// Panels whose name ends with this show items that ran out.
pub const UNAVAILABLE_SUFFIX: &str = "[out]";

/// Which group a panel receives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelRoute {
    Available,
    Unavailable,
}

impl PanelRoute {
    /// Route for a panel's custom name. Case-sensitive; `None` leaves the panel alone.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.ends_with(AVAILABLE_SUFFIX) {
            Some(Self::Available)
        } else if name.ends_with(UNAVAILABLE_SUFFIX) {
            Some(Self::Unavailable)
        } else {
            None
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Available => AVAILABLE_SUFFIX,
            Self::Unavailable => UNAVAILABLE_SUFFIX,
        }
    }
}
