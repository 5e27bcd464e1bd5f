//! Shared constants. Config defaults in `config.rs` are built from these so
//! the demos and the data files agree on one set of numbers.

/// Half extent of the default procedural terrain (columns -20..20).
pub const DEFAULT_TERRAIN_HALF_EXTENT: i32 = 20;

/// Noise sampling frequency: one noise unit per 30 columns.
pub const DEFAULT_NOISE_FREQUENCY: f64 = 1.0 / 30.0;

/// Exponent biasing normalized noise toward low heights.
pub const DEFAULT_NOISE_EXPONENT: f64 = 1.5;

/// Height reached by a column where normalized noise is 1.0.
pub const DEFAULT_TERRAIN_AMPLITUDE: f64 = 20.0;

/// Layers of rock-free cover at the top of a terrain column.
/// The top `GRASS_LAYERS` are grass, the next `DIRT_LAYERS` are dirt.
pub const GRASS_LAYERS: i32 = 2;
pub const DIRT_LAYERS: i32 = 2;

/// Editor grid: 10×10 cells around the origin, 11 cells tall.
pub const DEFAULT_CURSOR_MIN: [i32; 3] = [-5, 0, -5];
pub const DEFAULT_CURSOR_MAX: [i32; 3] = [4, 10, 4];

/// Horizontal walk speed in units per second.
pub const DEFAULT_WALK_SPEED: f32 = 7.0;

/// Vertical acceleration in units per second squared (negative = down).
pub const DEFAULT_GRAVITY: f32 = -30.0;

/// Vertical launch velocity of a jump in units per second.
pub const DEFAULT_JUMP_VELOCITY: f32 = 10.0;

/// Distance from the avatar's origin to its feet.
pub const DEFAULT_AVATAR_HALF_HEIGHT: f32 = 1.0;

/// Maximum avatar yaw change per tick, in radians.
pub const DEFAULT_TURN_RATE: f32 = 0.2;

/// Frame deltas above this (seconds) are clamped before integration.
pub const DEFAULT_MAX_FRAME_DELTA: f32 = 0.1;

/// Follow camera orbit distance and its allowed range.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 15.0;
pub const DEFAULT_CAMERA_MIN_DISTANCE: f32 = 10.0;
pub const DEFAULT_CAMERA_MAX_DISTANCE: f32 = 25.0;

/// Height of the camera target above the avatar origin.
pub const CAMERA_TARGET_LIFT: f32 = 1.0;

/// Name of the animation clip played while the avatar walks.
pub const WALK_CLIP: &str = "walk";
