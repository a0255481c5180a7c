//! Rendering of the quantity table onto routed panels.

use std::fmt::Write as _;

use tracing::warn;

use stockboard_inventory::{QuantityEntry, QuantityTable};

use crate::format::format_amount;
use crate::routing::PanelRoute;
use crate::surface::{ContentType, TextSurface};

/// Line terminator used on host panels.
pub const LINE_ENDING: &str = "\r\n";

/// Render one group, one `"<subtype id> <amount>"` line per entry.
pub fn render_group(entries: &[QuantityEntry]) -> String {
    entries.iter().fold(String::new(), |mut out, entry| {
        let _ = write!(
            out,
            "{} {}{LINE_ENDING}",
            entry.component,
            format_amount(entry.quantity)
        );
        out
    })
}

/// Both groups of a table, rendered once per tick and shared by every panel.
///
/// Hosts hand out one panel at a time, so callers loop over their panels and
/// call [`RenderedGroups::apply`] for each, tallying with [`PresentReport::record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGroups {
    pub available: String,
    pub unavailable: String,
}

impl RenderedGroups {
    pub fn from_table(table: &QuantityTable) -> Self {
        let (available, unavailable) = table.partition();
        Self {
            available: render_group(&available),
            unavailable: render_group(&unavailable),
        }
    }

    pub fn text_for(&self, route: PanelRoute) -> &str {
        match route {
            PanelRoute::Available => &self.available,
            PanelRoute::Unavailable => &self.unavailable,
        }
    }

    /// Route `panel` by name and overwrite it with its group.
    pub fn apply<S>(&self, panel: &mut S) -> PanelOutcome
    where
        S: TextSurface + ?Sized,
    {
        let Some(route) = PanelRoute::from_name(panel.name()) else {
            return PanelOutcome::Unrouted;
        };

        panel.set_content_type(ContentType::TextAndImage);
        match panel.write_text(self.text_for(route)) {
            Ok(()) => PanelOutcome::Updated(route),
            Err(e) => {
                warn!(panel = %panel.name(), error = %e, "panel write failed");
                PanelOutcome::Failed(route)
            }
        }
    }
}

/// What happened to one panel during a pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
    Updated(PanelRoute),
    Unrouted,
    Failed(PanelRoute),
}

/// Summary of a presentation pass.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PresentReport {
    pub updated: usize,
    pub unrouted: usize,
    pub failed: usize,
}

impl PresentReport {
    pub fn record(&mut self, outcome: PanelOutcome) {
        match outcome {
            PanelOutcome::Updated(_) => self.updated += 1,
            PanelOutcome::Unrouted => self.unrouted += 1,
            PanelOutcome::Failed(_) => self.failed += 1,
        }
    }
}
