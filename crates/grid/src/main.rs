//! Demo host: runs the stock board against a small in-memory station and
//! logs what each routed panel would show.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::Notify;

use stockboard_core::EntityId;
use stockboard_grid::{GridConfig, InMemoryGrid, Program};
use stockboard_inventory::{Component, Inventory, ItemStack, ItemType, RawAmount, TerminalBlock};

const AVAILABLE_PANEL: &str = "Hangar LCD [available]";
const OUT_PANEL: &str = "Hangar LCD [out]";

fn demo_station() -> InMemoryGrid {
    InMemoryGrid::new()
        .with_block(
            TerminalBlock::new(EntityId::new(101), "Large Cargo Container 1").with_inventory(
                Inventory::new(vec![
                    ItemStack::component(Component::SteelPlate, 12_480),
                    ItemStack::component(Component::InteriorPlate, 3_100),
                    ItemStack::component(Component::Construction, 2_250),
                    ItemStack::new(ItemType::new("MyObjectBuilder_Ingot", "Iron"), RawAmount::from_units(48_000)),
                ]),
            ),
        )
        .with_block(
            TerminalBlock::new(EntityId::new(102), "Large Cargo Container 2").with_inventory(
                Inventory::new(vec![
                    ItemStack::component(Component::SteelTubeSmall, 640),
                    ItemStack::component(Component::SteelTubeLarge, 85),
                    ItemStack::component(Component::Motor, 212),
                    ItemStack::component(Component::Computer, 1_030),
                ]),
            ),
        )
        .with_block(
            TerminalBlock::new(EntityId::new(103), "Assembler")
                .with_inventory(Inventory::new(vec![ItemStack::component(Component::MetalGrid, 40)]))
                .with_inventory(Inventory::new(vec![ItemStack::component(Component::Display, 6)])),
        )
        .with_block(TerminalBlock::new(EntityId::new(201), AVAILABLE_PANEL).as_text_panel())
        .with_block(TerminalBlock::new(EntityId::new(202), OUT_PANEL).as_text_panel())
        .with_block(TerminalBlock::new(EntityId::new(203), "Hangar LCD").as_text_panel())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GridConfig::from_env().context("reading stock board configuration")?;
    stockboard_observability::tracing::init(config.log_format);

    let shutdown = Arc::new(Notify::new());
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal.notify_one();
        }
    });

    let mut station = demo_station();
    let mut program = Program::new(config);

    let ticks = stockboard_grid::run(&mut program, &mut station, shutdown, |report| {
        tracing::info!(
            tick = report.tick,
            updated = report.present.updated,
            total = report.table.total(),
            "panels refreshed"
        );
    })
    .await;

    for name in [AVAILABLE_PANEL, OUT_PANEL] {
        if let Some(text) = station.panel_text(name) {
            tracing::info!(panel = name, text = %text.replace("\r\n", "; "), "final panel text");
        }
    }
    tracing::info!(ticks, "done");
    Ok(())
}
