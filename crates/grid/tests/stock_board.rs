//! End-to-end ticks against an in-memory grid loaded from a host snapshot.

use proptest::prelude::*;

use stockboard_core::EntityId;
use stockboard_grid::{GridTerminalSystem, InMemoryGrid, Program};
use stockboard_inventory::{Component, Inventory, ItemStack, TerminalBlock};

const SNAPSHOT: &str = r#"[
    {
        "id": 1001,
        "name": "Small Cargo Container",
        "inventories": [
            { "items": [
                { "item_type": { "type_id": "MyObjectBuilder_Component", "subtype_id": "SteelPlate" }, "amount": 2400000000 },
                { "item_type": { "type_id": "MyObjectBuilder_Component", "subtype_id": "LargeTube" }, "amount": 35000000 },
                { "item_type": { "type_id": "MyObjectBuilder_Component", "subtype_id": "ZoneChip" }, "amount": 2000000 },
                { "item_type": { "type_id": "MyObjectBuilder_Ore", "subtype_id": "Stone" }, "amount": 5000000000000 }
            ] }
        ]
    },
    {
        "id": 1002,
        "name": "Refinery",
        "inventories": [
            { "items": [] },
            { "items": [
                { "item_type": { "type_id": "MyObjectBuilder_Component", "subtype_id": "SteelPlate" }, "amount": 600000000 }
            ] }
        ]
    },
    { "id": 2001, "name": "Cargo[available]", "text_panel": true },
    { "id": 2002, "name": "Cargo[out]", "text_panel": true },
    { "id": 2003, "name": "Cargo", "text_panel": true },
    { "id": 2004, "name": "Bridge[available]", "text_panel": true }
]"#;

#[test]
fn snapshot_tick_renders_every_routed_panel() {
    let mut grid = InMemoryGrid::from_json(SNAPSHOT).unwrap();
    let report = Program::default().tick(&mut grid);

    assert_eq!(report.table.get(Component::SteelPlate), 3_000.0);
    assert_eq!(report.table.get(Component::SteelTubeLarge), 35.0);
    assert_eq!(report.stats.stacks_skipped, 2);

    assert_eq!(
        grid.panel_text("Cargo[available]"),
        Some("SteelPlate 3k\r\nLargeTube 35\r\n")
    );
    assert_eq!(grid.panel_text("Bridge[available]"), grid.panel_text("Cargo[available]"));

    let out = grid.panel_text("Cargo[out]").unwrap();
    assert_eq!(out.lines().count(), Component::COUNT - 2);
    assert!(out.lines().all(|line| line.ends_with(" 0")));

    assert_eq!(grid.panel("Cargo").unwrap().writes(), 0);
}

#[test]
fn removed_panel_is_skipped() {
    let mut grid = InMemoryGrid::from_json(SNAPSHOT).unwrap();
    grid.remove_block(EntityId::new(2002));

    let report = Program::default().tick(&mut grid);
    assert_eq!(report.present.updated, 2);
    assert!(grid.text_surface(EntityId::new(2002)).is_none());
}

fn grid_with(amounts: &[(Component, i64)]) -> InMemoryGrid {
    let items = amounts
        .iter()
        .map(|&(c, n)| ItemStack::component(c, n))
        .collect();
    InMemoryGrid::new()
        .with_block(TerminalBlock::new(EntityId::new(1), "Cargo").with_inventory(Inventory::new(items)))
        .with_block(TerminalBlock::new(EntityId::new(2), "Cargo[available]").as_text_panel())
        .with_block(TerminalBlock::new(EntityId::new(3), "Cargo[out]").as_text_panel())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Property: two ticks over an unchanged grid give the same table and text,
    /// and every tracked item shows up on exactly one of the two panels.
    #[test]
    fn ticks_are_idempotent_and_panels_cover_registry(
        amounts in prop::collection::vec((0usize..Component::COUNT, 0i64..3_000_000), 0..40)
    ) {
        let amounts: Vec<(Component, i64)> = amounts
            .into_iter()
            .map(|(i, n)| (Component::ALL[i], n))
            .collect();
        let mut grid = grid_with(&amounts);
        let mut program = Program::default();

        let first = program.tick(&mut grid);
        let available = grid.panel_text("Cargo[available]").unwrap().to_owned();
        let out = grid.panel_text("Cargo[out]").unwrap().to_owned();

        let second = program.tick(&mut grid);
        prop_assert_eq!(&first.table, &second.table);
        prop_assert_eq!(grid.panel_text("Cargo[available]").unwrap(), available.as_str());
        prop_assert_eq!(grid.panel_text("Cargo[out]").unwrap(), out.as_str());

        let shown = available.lines().count() + out.lines().count();
        prop_assert_eq!(shown, Component::COUNT);
        for &c in Component::ALL {
            let line_start = format!("{} ", c.subtype_id());
            let on_available = available.lines().any(|l| l.starts_with(&line_start));
            let on_out = out.lines().any(|l| l.starts_with(&line_start));
            prop_assert!(on_available != on_out);
            prop_assert_eq!(on_available, first.table.get(c) > 0.0);
        }
    }
}
