//! Terminal block snapshots.
//!
//! A snapshot is what the host hands over at the start of a tick: each
//! block's name, its inventory slots and whether it is a text panel.
//! Capabilities are plain predicates, there is no block hierarchy.

use serde::{Deserialize, Serialize};
use stockboard_core::{Entity, EntityId, ValueObject};

use crate::amount::RawAmount;
use crate::component::{Component, COMPONENT_TYPE_ID};

/// Host item type: coarse category plus subtype.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemType {
    pub type_id: String,
    pub subtype_id: String,
}

impl ItemType {
    pub fn new(type_id: impl Into<String>, subtype_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            subtype_id: subtype_id.into(),
        }
    }

    /// Item type of a tracked component.
    pub fn component(component: Component) -> Self {
        Self::new(COMPONENT_TYPE_ID, component.subtype_id())
    }

    pub fn is_component(&self) -> bool {
        self.type_id == COMPONENT_TYPE_ID
    }
}

impl ValueObject for ItemType {}

/// One stack of a single item type inside an inventory slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item_type: ItemType,
    pub amount: RawAmount,
}

impl ItemStack {
    pub fn new(item_type: ItemType, amount: RawAmount) -> Self {
        Self { item_type, amount }
    }

    /// Stack of `units` whole components.
    pub fn component(component: Component, units: i64) -> Self {
        Self::new(ItemType::component(component), RawAmount::from_units(units))
    }
}

/// One inventory slot of a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub items: Vec<ItemStack>,
}

impl Inventory {
    pub fn new(items: Vec<ItemStack>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A terminal block as seen at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalBlock {
    pub id: EntityId,
    /// User-assigned custom name.
    pub name: String,
    #[serde(default)]
    pub inventories: Vec<Inventory>,
    #[serde(default)]
    pub text_panel: bool,
}

impl TerminalBlock {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            inventories: Vec::new(),
            text_panel: false,
        }
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventories.push(inventory);
        self
    }

    pub fn as_text_panel(mut self) -> Self {
        self.text_panel = true;
        self
    }

    pub fn has_inventory(&self) -> bool {
        !self.inventories.is_empty()
    }

    pub fn is_text_panel(&self) -> bool {
        self.text_panel
    }

    pub fn inventory_count(&self) -> usize {
        self.inventories.len()
    }

    pub fn inventory(&self, index: usize) -> Option<&Inventory> {
        self.inventories.get(index)
    }
}

impl Entity for TerminalBlock {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
