//! Inventory side of the stock board.
//!
//! Pure, deterministic logic: the component registry, block snapshots as
//! reported by the host, and the per-tick quantity aggregation. No IO.

pub mod aggregator;
pub mod amount;
pub mod block;
pub mod component;
pub mod table;

pub use aggregator::{aggregate, aggregate_into, AggregateStats};
pub use amount::RawAmount;
pub use block::{Inventory, ItemStack, ItemType, TerminalBlock};
pub use component::{Component, COMPONENT_TYPE_ID, LEGACY_TYPE_PREFIX};
pub use table::{QuantityEntry, QuantityTable};
