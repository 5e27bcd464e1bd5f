use blockcraft_core::block::{BlockDef, BlockTextures, BlockType, Palette, Rgb};
use blockcraft_core::config::WorldConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::validator::{self, ValidationError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse palette RON: {0}")]
    PaletteParseError(String),
    #[error("Failed to parse config RON: {0}")]
    ConfigParseError(String),
    #[error("Palette failed validation: {}", join_errors(.0))]
    InvalidPalette(Vec<ValidationError>),
    #[error("Config failed validation: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A palette entry as written in data files, before its code is resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlockDef {
    pub code: String,
    pub color: Rgb,
    pub textures: BlockTextures,
}

/// Parse a palette RON string without validating it.
pub fn parse_palette(ron_str: &str) -> Result<Vec<RawBlockDef>, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::PaletteParseError(e.to_string()))
}

/// Parse, validate and resolve a palette RON string.
pub fn load_palette_from_str(ron_str: &str) -> Result<Palette, LoadError> {
    let raw = parse_palette(ron_str)?;
    validator::validate_palette(&raw).map_err(LoadError::InvalidPalette)?;

    let blocks = raw
        .into_iter()
        .map(|def| {
            BlockType::from_code(&def.code).map(|block| BlockDef {
                block,
                color: def.color,
                textures: def.textures,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LoadError::InvalidPalette(vec![ValidationError::Palette(e.to_string())]))?;

    let palette = Palette::new(blocks).map_err(|e| {
        LoadError::InvalidPalette(vec![ValidationError::Palette(e.to_string())])
    })?;
    log::info!("Loaded block palette with {} entries", palette.len());
    Ok(palette)
}

/// Parse and validate a world configuration RON string.
pub fn load_config_from_str(ron_str: &str) -> Result<WorldConfig, LoadError> {
    let options = ron::Options::default();
    let config: WorldConfig = options
        .from_str(ron_str)
        .map_err(|e| LoadError::ConfigParseError(e.to_string()))?;
    validator::validate_config(&config).map_err(LoadError::InvalidConfig)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BLOCKS: &str = r#"[
        (code: "grass", color: (104, 143, 78),
         textures: (side: "side.png", top: "top.png", bottom: "dirt.png")),
        (code: "wood", color: (255, 167, 38),
         textures: (side: "wood.png", top: "wood.png", bottom: "wood.png")),
    ]"#;

    #[test]
    fn test_parse_palette_entries() {
        let raw = parse_palette(TWO_BLOCKS).expect("should parse");
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].code, "grass");
        assert_eq!(raw[0].color, Rgb(104, 143, 78));
        assert_eq!(raw[0].textures.bottom, "dirt.png");
    }

    #[test]
    fn test_incomplete_palette_rejected() {
        let result = load_palette_from_str(TWO_BLOCKS);
        match result {
            Err(LoadError::InvalidPalette(errors)) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::MissingBlock("rock"))));
            }
            other => panic!("expected InvalidPalette, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_ron_rejected() {
        let result = load_palette_from_str(r#"[this is not valid RON {"#);
        assert!(matches!(result, Err(LoadError::PaletteParseError(_))));
    }

    #[test]
    fn test_builtin_palette_loads() {
        let src = include_str!("../../../data/blocks.ron");
        let palette = load_palette_from_str(src).expect("should load");
        assert_eq!(palette.len(), 11);
        assert_eq!(palette.at(0).map(|d| d.block), Some(BlockType::Grass));
        let grass = palette.get(BlockType::Grass).expect("grass present");
        assert_eq!(grass.textures.top, "./assets/grass_block_top.png");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = load_config_from_str("(terrain: (seed: 7))").expect("should load");
        assert_eq!(config.terrain.seed, 7);
        assert_eq!(config.terrain.half_extent, 20);
        assert_eq!(config.locomotion.walk_speed, 7.0);
    }

    #[test]
    fn test_builtin_config_loads() {
        let src = include_str!("../../../data/world.ron");
        let config = load_config_from_str(src).expect("should load");
        assert_eq!(config.cursor.min, [-5, 0, -5]);
        assert_eq!(config.camera.max_distance, 25.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = load_config_from_str("(terrain: (half_extent: 0))");
        match result {
            Err(LoadError::InvalidConfig(errors)) => assert!(errors
                .iter()
                .any(|e| matches!(e, ValidationError::NonPositiveExtent(0)))),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }
}
