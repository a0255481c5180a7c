//! Text surface abstraction over host display panels.

use serde::{Deserialize, Serialize};
use stockboard_core::StockboardResult;

/// What a panel draws.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    None,
    TextAndImage,
    Script,
}

/// A host panel that can show text.
pub trait TextSurface {
    /// User-assigned custom name; carries the routing suffix.
    fn name(&self) -> &str;

    fn set_content_type(&mut self, content_type: ContentType);

    /// Replace the full text of the panel.
    fn write_text(&mut self, text: &str) -> StockboardResult<()>;
}
