//! Host boundary.

use stockboard_core::EntityId;
use stockboard_display::TextSurface;
use stockboard_inventory::TerminalBlock;

/// The game's terminal system as seen from the program.
///
/// `blocks` returns a snapshot taken at call time; writes go back through
/// `text_surface`.
pub trait GridTerminalSystem {
    /// Every terminal block reachable from the program.
    fn blocks(&self) -> Vec<TerminalBlock>;

    /// Live text surface of a panel block, if it still exists.
    fn text_surface(&mut self, id: EntityId) -> Option<&mut dyn TextSurface>;

    /// Blocks matching a capability predicate.
    fn blocks_of_type(&self, predicate: &dyn Fn(&TerminalBlock) -> bool) -> Vec<TerminalBlock> {
        self.blocks().into_iter().filter(|b| predicate(b)).collect()
    }
}
