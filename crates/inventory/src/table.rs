//! Quantity table: one accumulated amount per tracked component.

use serde::{Deserialize, Serialize};

use crate::component::Component;

/// Single row of the table.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityEntry {
    pub component: Component,
    pub quantity: f64,
}

impl QuantityEntry {
    pub fn is_available(&self) -> bool {
        self.quantity > 0.0
    }
}

/// Accumulated quantities, keyed by [`Component`].
///
/// Storage is one slot per registry entry, so the key set always equals the
/// registry. Values are never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityTable {
    values: [f64; Component::COUNT],
}

impl Default for QuantityTable {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantityTable {
    /// Table with every tracked component at zero.
    pub fn new() -> Self {
        Self {
            values: [0.0; Component::COUNT],
        }
    }

    /// Zero every slot.
    pub fn reset(&mut self) {
        self.values = [0.0; Component::COUNT];
    }

    /// Add `units` to a component. Non-positive and non-finite input is ignored.
    pub fn add(&mut self, component: Component, units: f64) {
        if !(units.is_finite() && units > 0.0) {
            return;
        }
        self.values[component.index()] += units;
    }

    pub fn get(&self, component: Component) -> f64 {
        self.values[component.index()]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = QuantityEntry> + '_ {
        Component::ALL.iter().map(|&component| QuantityEntry {
            component,
            quantity: self.get(component),
        })
    }

    /// Entries by quantity, largest first. Equal quantities keep registry order.
    pub fn sorted_desc(&self) -> Vec<QuantityEntry> {
        let mut entries: Vec<QuantityEntry> = self.iter().collect();
        entries.sort_by(|a, b| b.quantity.total_cmp(&a.quantity));
        entries
    }

    /// Split into `(available, unavailable)`: quantity > 0 versus == 0.
    ///
    /// Both halves are sorted largest first.
    pub fn partition(&self) -> (Vec<QuantityEntry>, Vec<QuantityEntry>) {
        self.sorted_desc()
            .into_iter()
            .partition(QuantityEntry::is_available)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}
