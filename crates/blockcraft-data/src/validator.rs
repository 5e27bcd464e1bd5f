use blockcraft_core::block::{BlockType, ALL_BLOCK_TYPES};
use blockcraft_core::config::WorldConfig;
use std::collections::HashSet;
use thiserror::Error;

use crate::loader::RawBlockDef;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Palette is empty")]
    EmptyPalette,
    #[error("Duplicate block code '{0}'")]
    DuplicateBlockCode(String),
    #[error("Unknown block code '{0}'")]
    UnknownBlockCode(String),
    #[error("Block '{0}' has no palette entry")]
    MissingBlock(&'static str),
    #[error("Block '{code}' has an empty {face} texture path")]
    EmptyTexture { code: String, face: &'static str },
    #[error("{0}")]
    Palette(String),
    #[error("Terrain half_extent {0} must be positive")]
    NonPositiveExtent(i32),
    #[error("Terrain {name} {value} must be positive and finite")]
    NonPositiveTerrainParam { name: &'static str, value: f64 },
    #[error("Cursor min {min:?} exceeds max {max:?}")]
    InvertedCursorBounds { min: [i32; 3], max: [i32; 3] },
    #[error("Cursor start {start:?} lies outside bounds {min:?}..={max:?}")]
    CursorStartOutOfBounds {
        start: [i32; 3],
        min: [i32; 3],
        max: [i32; 3],
    },
    #[error("Locomotion {name} {value} is out of range ({expected})")]
    LocomotionOutOfRange {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },
    #[error("Camera distance {distance} lies outside {min}..={max}")]
    CameraDistanceOutOfRange { distance: f32, min: f32, max: f32 },
    #[error("Spawn column {0:?} lies outside the terrain")]
    SpawnOutOfBounds([i32; 2]),
    #[error("max_frame_delta {0} must be positive")]
    NonPositiveFrameDelta(f32),
}

/// Validate raw palette entries: non-empty, unique and known codes, full
/// coverage of the block set, non-empty texture paths.
pub fn validate_palette(raw: &[RawBlockDef]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if raw.is_empty() {
        errors.push(ValidationError::EmptyPalette);
    }

    let mut seen = HashSet::new();
    let mut covered: HashSet<BlockType> = HashSet::new();
    for def in raw {
        if !seen.insert(def.code.as_str()) {
            errors.push(ValidationError::DuplicateBlockCode(def.code.clone()));
        }
        match BlockType::from_code(&def.code) {
            Ok(block) => {
                covered.insert(block);
            }
            Err(_) => errors.push(ValidationError::UnknownBlockCode(def.code.clone())),
        }
        for (face, path) in [
            ("side", &def.textures.side),
            ("top", &def.textures.top),
            ("bottom", &def.textures.bottom),
        ] {
            if path.trim().is_empty() {
                errors.push(ValidationError::EmptyTexture {
                    code: def.code.clone(),
                    face,
                });
            }
        }
    }

    for block in ALL_BLOCK_TYPES {
        if !covered.contains(&block) {
            errors.push(ValidationError::MissingBlock(block.code()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a world configuration for internal consistency.
pub fn validate_config(config: &WorldConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let terrain = &config.terrain;
    if terrain.half_extent <= 0 {
        errors.push(ValidationError::NonPositiveExtent(terrain.half_extent));
    }
    for (name, value) in [
        ("frequency", terrain.frequency),
        ("exponent", terrain.exponent),
        ("amplitude", terrain.amplitude),
    ] {
        if !(value.is_finite() && value > 0.0) {
            errors.push(ValidationError::NonPositiveTerrainParam { name, value });
        }
    }

    let cursor = &config.cursor;
    if (0..3).any(|i| cursor.min[i] > cursor.max[i]) {
        errors.push(ValidationError::InvertedCursorBounds {
            min: cursor.min,
            max: cursor.max,
        });
    } else if (0..3).any(|i| cursor.start[i] < cursor.min[i] || cursor.start[i] > cursor.max[i]) {
        errors.push(ValidationError::CursorStartOutOfBounds {
            start: cursor.start,
            min: cursor.min,
            max: cursor.max,
        });
    }

    let loco = &config.locomotion;
    let checks: [(&'static str, f32, bool, &'static str); 5] = [
        ("walk_speed", loco.walk_speed, loco.walk_speed >= 0.0, ">= 0"),
        ("gravity", loco.gravity, loco.gravity < 0.0, "< 0"),
        ("jump_velocity", loco.jump_velocity, loco.jump_velocity > 0.0, "> 0"),
        ("half_height", loco.half_height, loco.half_height > 0.0, "> 0"),
        ("turn_rate", loco.turn_rate, loco.turn_rate > 0.0, "> 0"),
    ];
    for (name, value, ok, expected) in checks {
        if !ok || !value.is_finite() {
            errors.push(ValidationError::LocomotionOutOfRange {
                name,
                value,
                expected,
            });
        }
    }

    let camera = &config.camera;
    if camera.distance < camera.min_distance || camera.distance > camera.max_distance {
        errors.push(ValidationError::CameraDistanceOutOfRange {
            distance: camera.distance,
            min: camera.min_distance,
            max: camera.max_distance,
        });
    }

    let session = &config.session;
    if session.max_frame_delta.is_nan() || session.max_frame_delta <= 0.0 {
        errors.push(ValidationError::NonPositiveFrameDelta(
            session.max_frame_delta,
        ));
    }
    let h = terrain.half_extent;
    if session.spawn.iter().any(|&c| c < -h || c >= h) {
        errors.push(ValidationError::SpawnOutOfBounds(session.spawn));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
