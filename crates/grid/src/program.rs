//! The per-tick program: fetch, aggregate, present.

use chrono::{DateTime, Utc};
use tracing::{debug, info_span};

use stockboard_core::StockboardError;
use stockboard_display::{PanelOutcome, PanelRoute, PresentReport, RenderedGroups};
use stockboard_inventory::{aggregate_into, AggregateStats, QuantityTable, TerminalBlock};

use crate::config::GridConfig;
use crate::host::GridTerminalSystem;

/// Outcome of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// 1-based tick counter.
    pub tick: u64,
    pub table: QuantityTable,
    pub stats: AggregateStats,
    pub present: PresentReport,
    pub completed_at: DateTime<Utc>,
}

/// Stock board program.
///
/// Holds no stock state between ticks: every tick rebuilds the quantity
/// table from the host's current snapshot.
#[derive(Debug, Clone, Default)]
pub struct Program {
    config: GridConfig,
    ticks: u64,
}

impl Program {
    pub fn new(config: GridConfig) -> Self {
        Self { config, ticks: 0 }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether the configured tick budget is used up.
    pub fn finished(&self) -> bool {
        self.config.max_ticks.is_some_and(|max| self.ticks >= max)
    }

    /// Run one pass against `host`.
    pub fn tick<H>(&mut self, host: &mut H) -> TickReport
    where
        H: GridTerminalSystem + ?Sized,
    {
        self.ticks += 1;
        let span = info_span!("tick", tick = self.ticks);
        let _enter = span.enter();

        let inventories = host.blocks_of_type(&|b: &TerminalBlock| b.has_inventory());
        let panels = host.blocks_of_type(&|b: &TerminalBlock| b.is_text_panel());

        let mut table = QuantityTable::new();
        let stats = aggregate_into(&mut table, &inventories);

        let groups = RenderedGroups::from_table(&table);
        let mut present = PresentReport::default();
        for panel in &panels {
            let Some(route) = PanelRoute::from_name(&panel.name) else {
                present.record(PanelOutcome::Unrouted);
                continue;
            };
            match host.text_surface(panel.id) {
                Some(surface) => present.record(groups.apply(surface)),
                None => {
                    debug!(error = %StockboardError::panel_not_found(&panel.name), "skipping panel");
                    present.record(PanelOutcome::Failed(route));
                }
            }
        }

        debug!(
            inventories = inventories.len(),
            panels = panels.len(),
            updated = present.updated,
            unrouted = present.unrouted,
            failed = present.failed,
            "presented stock"
        );

        TickReport {
            tick: self.ticks,
            table,
            stats,
            present,
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryGrid;
    use stockboard_core::EntityId;
    use stockboard_display::{ContentType, TextSurface};
    use stockboard_inventory::{Component, Inventory, ItemStack};

    fn grid() -> InMemoryGrid {
        InMemoryGrid::new()
            .with_block(
                TerminalBlock::new(EntityId::new(1), "Large Cargo Container").with_inventory(
                    Inventory::new(vec![
                        ItemStack::component(Component::SteelPlate, 1_500),
                        ItemStack::component(Component::Motor, 12),
                    ]),
                ),
            )
            .with_block(TerminalBlock::new(EntityId::new(2), "Cargo[available]").as_text_panel())
            .with_block(TerminalBlock::new(EntityId::new(3), "Cargo[out]").as_text_panel())
            .with_block(TerminalBlock::new(EntityId::new(4), "Cargo").as_text_panel())
    }

    #[test]
    fn tick_writes_routed_panels() {
        let mut grid = grid();
        let mut program = Program::default();

        let report = program.tick(&mut grid);

        assert_eq!(report.tick, 1);
        assert_eq!(report.table.get(Component::SteelPlate), 1_500.0);
        assert_eq!(report.present.updated, 2);
        assert_eq!(report.present.unrouted, 1);

        assert_eq!(grid.panel_text("Cargo[available]"), Some("SteelPlate 1k\r\nMotor 12\r\n"));
        let out = grid.panel_text("Cargo[out]").unwrap();
        assert!(out.starts_with("BulletproofGlass 0\r\n"));
        assert!(!out.contains("Motor"));
        assert_eq!(grid.panel("Cargo").unwrap().writes(), 0);
        assert_eq!(grid.panel("Cargo").unwrap().content_type(), ContentType::None);
        assert_eq!(
            grid.panel("Cargo[out]").unwrap().content_type(),
            ContentType::TextAndImage
        );
    }

    #[test]
    fn ticks_are_idempotent_on_unchanged_grid() {
        let mut grid = grid();
        let mut program = Program::default();

        let first = program.tick(&mut grid);
        let first_text = grid.panel_text("Cargo[available]").map(str::to_owned);
        let second = program.tick(&mut grid);

        assert_eq!(first.table, second.table);
        assert_eq!(grid.panel_text("Cargo[available]").map(str::to_owned), first_text);
        assert_eq!(second.tick, 2);
    }

    #[test]
    fn emptied_container_moves_item_to_out_panel() {
        let mut grid = grid();
        let mut program = Program::default();
        program.tick(&mut grid);

        grid.set_inventory(
            EntityId::new(1),
            0,
            Inventory::new(vec![ItemStack::component(Component::SteelPlate, 1_500)]),
        )
        .unwrap();
        program.tick(&mut grid);

        assert!(!grid.panel_text("Cargo[available]").unwrap().contains("Motor"));
        assert!(grid.panel_text("Cargo[out]").unwrap().contains("Motor 0\r\n"));
    }

    #[test]
    fn unpowered_panel_is_counted_not_fatal() {
        let mut grid = grid();
        grid.set_powered(EntityId::new(2), false).unwrap();

        let report = Program::default().tick(&mut grid);

        assert_eq!(report.present.failed, 1);
        assert_eq!(report.present.updated, 1);
        assert_eq!(grid.panel_text("Cargo[available]"), Some(""));
    }

    /// Host whose snapshot lists panels it can no longer hand out.
    struct StaleSnapshotHost {
        grid: InMemoryGrid,
        vanished: TerminalBlock,
    }

    impl GridTerminalSystem for StaleSnapshotHost {
        fn blocks(&self) -> Vec<TerminalBlock> {
            let mut blocks = self.grid.blocks();
            blocks.push(self.vanished.clone());
            blocks
        }

        fn text_surface(&mut self, id: EntityId) -> Option<&mut dyn TextSurface> {
            if id == self.vanished.id {
                return None;
            }
            self.grid.text_surface(id)
        }
    }

    #[test]
    fn panel_without_surface_is_counted_failed_and_others_still_update() {
        let mut host = StaleSnapshotHost {
            grid: grid(),
            vanished: TerminalBlock::new(EntityId::new(99), "Hangar[out]").as_text_panel(),
        };

        let report = Program::default().tick(&mut host);

        assert_eq!(report.present.failed, 1);
        assert_eq!(report.present.updated, 2);
        assert_eq!(report.present.unrouted, 1);
        assert_eq!(
            host.grid.panel_text("Cargo[available]"),
            Some("SteelPlate 1k\r\nMotor 12\r\n")
        );
        assert!(host.grid.panel_text("Cargo[out]").unwrap().contains("Reactor 0\r\n"));
    }

    #[test]
    fn finished_honours_max_ticks() {
        let mut grid = grid();
        let mut program = Program::new(GridConfig {
            max_ticks: Some(2),
            ..GridConfig::default()
        });

        assert!(!program.finished());
        program.tick(&mut grid);
        program.tick(&mut grid);
        assert!(program.finished());
    }
}
