//! Per-tick aggregation of component stock across blocks.

use tracing::{debug, trace};

use crate::block::TerminalBlock;
use crate::component::Component;
use crate::table::QuantityTable;

/// Counters from one aggregation pass.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub blocks: usize,
    pub inventories: usize,
    pub stacks_counted: usize,
    pub stacks_skipped: usize,
}

/// Sum tracked component stock over `blocks` into a fresh table.
pub fn aggregate<'a, I>(blocks: I) -> QuantityTable
where
    I: IntoIterator<Item = &'a TerminalBlock>,
{
    let mut table = QuantityTable::new();
    aggregate_into(&mut table, blocks);
    table
}

/// Reset `table`, then sum tracked component stock over `blocks` into it.
///
/// Blocks without inventories contribute nothing. Stacks outside the
/// component category, or with a subtype the registry doesn't know, are
/// skipped.
pub fn aggregate_into<'a, I>(table: &mut QuantityTable, blocks: I) -> AggregateStats
where
    I: IntoIterator<Item = &'a TerminalBlock>,
{
    table.reset();
    let mut stats = AggregateStats::default();

    for block in blocks.into_iter().filter(|b| b.has_inventory()) {
        stats.blocks += 1;
        for inventory in &block.inventories {
            stats.inventories += 1;
            for stack in &inventory.items {
                if !stack.item_type.is_component() {
                    stats.stacks_skipped += 1;
                    continue;
                }
                match Component::from_subtype_id(&stack.item_type.subtype_id) {
                    Some(component) => {
                        table.add(component, stack.amount.to_units());
                        stats.stacks_counted += 1;
                    }
                    None => {
                        trace!(
                            block = %block.name,
                            subtype_id = %stack.item_type.subtype_id,
                            "untracked component"
                        );
                        stats.stacks_skipped += 1;
                    }
                }
            }
        }
    }

    debug!(
        blocks = stats.blocks,
        inventories = stats.inventories,
        counted = stats.stacks_counted,
        skipped = stats.stacks_skipped,
        "aggregated component stock"
    );
    stats
}
