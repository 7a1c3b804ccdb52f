//! Property tests for the layering rules.

use blockfall_core::BlockType;
use blockfall_procedural::{LayerRules, TerrainConfig, TerrainGenerator, WorldSeed};
use proptest::prelude::*;

proptest! {
    /// Every deep draw lands in exactly one band, matching the cumulative bounds.
    #[test]
    fn deep_bands_partition_unit_interval(r in 0.0f64..1.0) {
        let rules = LayerRules::default();
        let expected = if r <= 0.05 {
            BlockType::Gem
        } else if r <= rules.gem_band + rules.cobblestone_band {
            BlockType::Cobblestone
        } else if r <= rules.deep_band_total() {
            BlockType::Granite
        } else {
            BlockType::Andesite
        };
        prop_assert_eq!(rules.deep_block(r), expected);
    }

    /// The surface walk never moves more than one row between columns.
    #[test]
    fn surface_walk_is_continuous(seed in any::<u64>()) {
        let config = TerrainConfig { width: 64, height: 64, ..TerrainConfig::default() };
        let (_, surface) = TerrainGenerator::new(config, WorldSeed::new(seed)).classify();
        prop_assert_eq!(surface[0], 32);
        for pair in surface.windows(2) {
            prop_assert!((pair[1] - pair[0]).abs() <= 1);
        }
    }
}
