//! Built-in palette and configuration compiled from `data/`.

use blockcraft_core::block::Palette;
use blockcraft_core::config::WorldConfig;

use crate::loader::{self, LoadError};

/// Palette source shipped with the crate.
pub const BUILTIN_PALETTE_RON: &str = include_str!("../../../data/blocks.ron");

/// World configuration source shipped with the crate.
pub const BUILTIN_CONFIG_RON: &str = include_str!("../../../data/world.ron");

/// Load the built-in block palette.
pub fn builtin_palette() -> Result<Palette, LoadError> {
    loader::load_palette_from_str(BUILTIN_PALETTE_RON)
}

/// Load the built-in world configuration.
pub fn builtin_config() -> Result<WorldConfig, LoadError> {
    loader::load_config_from_str(BUILTIN_CONFIG_RON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockcraft_core::block::{BlockType, Rgb};

    #[test]
    fn test_builtin_palette_matches_block_set() {
        let palette = builtin_palette().expect("builtin palette must load");
        let rock = palette.get(BlockType::Rock).expect("rock present");
        assert_eq!(rock.color, Rgb(87, 87, 87));
        assert_eq!(palette.index_of(BlockType::Wood), Some(8));
    }

    #[test]
    fn test_builtin_config_matches_defaults() {
        let config = builtin_config().expect("builtin config must load");
        let defaults = WorldConfig::default();
        assert_eq!(config.cursor, defaults.cursor);
        assert_eq!(config.locomotion, defaults.locomotion);
        assert_eq!(config.terrain.half_extent, defaults.terrain.half_extent);
        assert!((config.terrain.frequency - defaults.terrain.frequency).abs() < 1e-9);
    }
}
