//! Display side of the stock board: number formatting, panel routing and
//! rendering of the quantity table onto text surfaces.

pub mod format;
pub mod presenter;
pub mod routing;
pub mod surface;

pub use format::format_amount;
pub use presenter::{render_group, PanelOutcome, PresentReport, RenderedGroups, LINE_ENDING};
pub use routing::{PanelRoute, AVAILABLE_SUFFIX, UNAVAILABLE_SUFFIX};
pub use surface::{ContentType, TextSurface};
