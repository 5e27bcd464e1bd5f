use blockcraft_core::config::WorldConfig;

/// What a scene measures per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Generate a height field and populate a fresh world from it.
    TerrainGeneration,
    /// One session frame with a movement key held and the camera orbiting.
    Locomotion,
    /// Place and remove at the cursor while sweeping it across its bounds.
    Editing,
    /// Export the world to JSON, reset it, and import it again.
    SaveLoad,
}

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub kind: SceneKind,
    /// Terrain half extent; the field is `2 * half_extent` columns per side.
    pub half_extent: i32,
}

/// Return the standard suite of benchmark scenes.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "terrain-40x40",
            kind: SceneKind::TerrainGeneration,
            half_extent: 20,
        },
        SceneConfig {
            name: "terrain-200x200",
            kind: SceneKind::TerrainGeneration,
            half_extent: 100,
        },
        SceneConfig {
            name: "walk-200x200",
            kind: SceneKind::Locomotion,
            half_extent: 100,
        },
        SceneConfig {
            name: "edit-40x40",
            kind: SceneKind::Editing,
            half_extent: 20,
        },
        SceneConfig {
            name: "save-load-40x40",
            kind: SceneKind::SaveLoad,
            half_extent: 20,
        },
    ]
}

/// World configuration for a scene: the defaults with the scene's extent and
/// a fixed seed so runs are comparable.
pub fn scene_world_config(config: &SceneConfig) -> WorldConfig {
    let mut world = WorldConfig::default();
    world.terrain.seed = 1;
    world.terrain.half_extent = config.half_extent;
    world
}

/// Number of terrain columns in a scene.
pub fn scene_column_count(config: &SceneConfig) -> u32 {
    let side = 2 * config.half_extent.max(0) as u32;
    side * side
}
