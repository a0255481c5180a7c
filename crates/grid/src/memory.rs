//! In-memory grid: a host stand-in for tests and the demo binary.

use std::collections::BTreeMap;

use stockboard_core::{find_by_id_mut, position_by_id, EntityId, StockboardError, StockboardResult};
use stockboard_display::{ContentType, TextSurface};
use stockboard_inventory::{Inventory, TerminalBlock};

use crate::host::GridTerminalSystem;

/// Text panel state held by [`InMemoryGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryPanel {
    name: String,
    content_type: ContentType,
    text: String,
    writes: usize,
    powered: bool,
}

impl InMemoryPanel {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: ContentType::None,
            text: String::new(),
            writes: 0,
            powered: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TextSurface for InMemoryPanel {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
    }

    fn write_text(&mut self, text: &str) -> StockboardResult<()> {
        if !self.powered {
            return Err(StockboardError::host(format!("panel {} is unpowered", self.name)));
        }
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
        Ok(())
    }
}

/// Blocks and panels kept in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGrid {
    blocks: Vec<TerminalBlock>,
    panels: BTreeMap<EntityId, InMemoryPanel>,
}

impl InMemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid from a JSON array of block snapshots.
    pub fn from_json(json: &str) -> StockboardResult<Self> {
        let blocks: Vec<TerminalBlock> = serde_json::from_str(json)
            .map_err(|e| StockboardError::host(format!("invalid grid snapshot: {e}")))?;
        let mut grid = Self::new();
        for block in blocks {
            grid.add_block(block);
        }
        Ok(grid)
    }

    /// Add a block; panel blocks get an empty text surface. Replaces a block with the same id.
    pub fn add_block(&mut self, block: TerminalBlock) {
        self.remove_block(block.id);
        if block.is_text_panel() {
            self.panels.insert(block.id, InMemoryPanel::new(block.name.clone()));
        }
        self.blocks.push(block);
    }

    pub fn with_block(mut self, block: TerminalBlock) -> Self {
        self.add_block(block);
        self
    }

    pub fn remove_block(&mut self, id: EntityId) -> Option<TerminalBlock> {
        self.panels.remove(&id);
        let pos = position_by_id(&self.blocks, &id)?;
        Some(self.blocks.remove(pos))
    }

    /// Rename a block, keeping its panel (if any) in sync.
    pub fn rename_block(&mut self, id: EntityId, name: impl Into<String>) -> StockboardResult<()> {
        let name = name.into();
        let block = self.block_mut(id)?;
        block.name = name.clone();
        if let Some(panel) = self.panels.get_mut(&id) {
            panel.name = name;
        }
        Ok(())
    }

    /// Replace one inventory slot of a block.
    pub fn set_inventory(
        &mut self,
        id: EntityId,
        slot: usize,
        inventory: Inventory,
    ) -> StockboardResult<()> {
        let block = self.block_mut(id)?;
        let target = block.inventories.get_mut(slot).ok_or_else(|| {
            StockboardError::host(format!("block {id} has no inventory slot {slot}"))
        })?;
        *target = inventory;
        Ok(())
    }

    fn block_mut(&mut self, id: EntityId) -> StockboardResult<&mut TerminalBlock> {
        find_by_id_mut(&mut self.blocks, &id)
            .ok_or_else(|| StockboardError::host(format!("no block with id {id}")))
    }

    pub fn set_powered(&mut self, id: EntityId, powered: bool) -> StockboardResult<()> {
        let panel = self
            .panels
            .get_mut(&id)
            .ok_or_else(|| StockboardError::panel_not_found(id.to_string()))?;
        panel.powered = powered;
        Ok(())
    }

    /// Panel by custom name (first match).
    pub fn panel(&self, name: &str) -> Option<&InMemoryPanel> {
        self.panels.values().find(|p| p.name == name)
    }

    pub fn panel_text(&self, name: &str) -> Option<&str> {
        self.panel(name).map(InMemoryPanel::text)
    }
}

impl GridTerminalSystem for InMemoryGrid {
    fn blocks(&self) -> Vec<TerminalBlock> {
        self.blocks.clone()
    }

    fn text_surface(&mut self, id: EntityId) -> Option<&mut dyn TextSurface> {
        self.panels
            .get_mut(&id)
            .map(|panel| panel as &mut dyn TextSurface)
    }
}
