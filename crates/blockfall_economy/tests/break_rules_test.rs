//! # Break Rules Integration Tests
//!
//! Break tables loaded from TOML drive the same decisions as the built-in
//! defaults, and collected blocks land in the inventory as expected.

use blockfall_core::BlockType;
use blockfall_economy::{BreakAction, BreakRules, EconomyError, Inventory, Tool};

/// Test: a partial table overrides one tool and keeps the other defaults.
#[test]
fn test_partial_override_from_toml() {
    let rules: BreakRules = toml::from_str(
        r#"
        axe = ["wood", "leaves"]
        "#,
    )
    .unwrap();

    assert_eq!(rules.action(Tool::Axe, BlockType::Leaves), BreakAction::Collect);
    assert_eq!(rules.action(Tool::Shovel, BlockType::Leaves), BreakAction::Clear);
    assert_eq!(rules.shovel, BreakRules::default().shovel);
}

/// Test: an unknown block name is rejected.
#[test]
fn test_unknown_block_name_rejected() {
    let result: Result<BreakRules, _> = toml::from_str(r#"axe = ["obsidian"]"#);
    assert!(result.is_err());
}

/// Test: digging a column fills the inventory until the slots run out.
#[test]
fn test_collecting_until_full() {
    let rules = BreakRules::default();
    let mut inventory = Inventory::new(3);
    let dug = [
        (Tool::Shovel, BlockType::Grass),
        (Tool::Shovel, BlockType::Dirt),
        (Tool::Shovel, BlockType::Dirt),
        (Tool::Pickaxe, BlockType::Cobblestone),
        (Tool::Pickaxe, BlockType::Gem),
    ];

    let mut dropped = Vec::new();
    for (tool, block) in dug {
        assert_eq!(rules.action(tool, block), BreakAction::Collect);
        if let Err(EconomyError::InventoryFull { .. }) = inventory.add_block(block, 1) {
            dropped.push(block);
        }
    }

    assert_eq!(dropped, vec![BlockType::Gem]);
    assert_eq!(inventory.count(BlockType::Dirt), 2);
    assert_eq!(
        inventory.blocks().iter().map(|(b, _)| *b).collect::<Vec<_>>(),
        vec![BlockType::Grass, BlockType::Dirt, BlockType::Cobblestone]
    );
}
