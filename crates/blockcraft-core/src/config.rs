//! World and session configuration. Loaded from RON by `blockcraft-data`;
//! every field has a default so partial files are accepted.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Procedural terrain parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Noise seed. Same seed, same terrain.
    pub seed: u32,
    /// Columns span `-half_extent..half_extent` on both axes.
    pub half_extent: i32,
    /// Noise sampling frequency per column.
    pub frequency: f64,
    /// Exponent applied to normalized noise before scaling.
    pub exponent: f64,
    /// Height reached where normalized noise is 1.0.
    pub amplitude: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            half_extent: DEFAULT_TERRAIN_HALF_EXTENT,
            frequency: DEFAULT_NOISE_FREQUENCY,
            exponent: DEFAULT_NOISE_EXPONENT,
            amplitude: DEFAULT_TERRAIN_AMPLITUDE,
        }
    }
}

/// Inclusive cell bounds of the editor cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub min: [i32; 3],
    pub max: [i32; 3],
    /// Starting cell. Its y is the floor of the height-indicator stack.
    pub start: [i32; 3],
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_CURSOR_MIN,
            max: DEFAULT_CURSOR_MAX,
            start: [0, DEFAULT_CURSOR_MIN[1], 0],
        }
    }
}

/// Avatar movement constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub walk_speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub half_height: f32,
    pub turn_rate: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: DEFAULT_WALK_SPEED,
            gravity: DEFAULT_GRAVITY,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            half_height: DEFAULT_AVATAR_HALF_HEIGHT,
            turn_rate: DEFAULT_TURN_RATE,
        }
    }
}

/// Follow camera orbit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub yaw: f32,
    /// Elevation of the eye above the target, in radians.
    pub pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_CAMERA_DISTANCE,
            min_distance: DEFAULT_CAMERA_MIN_DISTANCE,
            max_distance: DEFAULT_CAMERA_MAX_DISTANCE,
            yaw: 0.0,
            pitch: 0.4,
        }
    }
}

/// Frame loop parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Frame deltas above this many seconds are clamped.
    pub max_frame_delta: f32,
    /// Populate the voxel world with terrain columns at startup.
    pub populate_terrain: bool,
    /// Avatar spawn column.
    pub spawn: [i32; 2],
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
            populate_terrain: true,
            spawn: [0, 0],
        }
    }
}

/// Everything a session needs besides the palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub terrain: TerrainConfig,
    pub cursor: CursorConfig,
    pub locomotion: LocomotionConfig,
    pub camera: CameraConfig,
    pub session: SessionConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cursor_start_inside_bounds() {
        let c = CursorConfig::default();
        for axis in 0..3 {
            assert!(c.start[axis] >= c.min[axis] && c.start[axis] <= c.max[axis]);
        }
    }

    #[test]
    fn test_default_camera_distance_in_range() {
        let c = CameraConfig::default();
        assert!(c.distance >= c.min_distance && c.distance <= c.max_distance);
    }
}
