//! Error model.

use thiserror::Error;

/// Result type used across the workspace.
pub type StockboardResult<T> = Result<T, StockboardError>;

/// Workspace-level error.
///
/// Aggregation and formatting never fail; errors only surface at the host
/// boundary (panel writes) and when reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockboardError {
    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The host rejected an operation.
    #[error("host error: {0}")]
    Host(String),

    /// A panel referenced by the snapshot is no longer present on the host.
    #[error("panel not found: {0}")]
    PanelNotFound(String),

    /// An identifier was malformed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl StockboardError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    pub fn panel_not_found(name: impl Into<String>) -> Self {
        Self::PanelNotFound(name.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
