use blockcraft_core::block::BlockType;
use blockcraft_core::config::TerrainConfig;
use blockcraft_core::constants::{DIRT_LAYERS, GRASS_LAYERS};
use blockcraft_core::error::BlockcraftError;
use glam::IVec3;
use noise::{NoiseFn, Simplex};

use crate::height_field::HeightField;
use crate::voxel_world::VoxelWorld;

/// Heightmap generator over seeded 2D simplex noise.
///
/// Each column samples the noise at `(x, z) * frequency`, remaps it to
/// `[0, 1]`, raises it to `exponent` (flattening lowlands) and scales by
/// `amplitude` before rounding to whole voxels.
pub struct TerrainGenerator {
    noise: Simplex,
    frequency: f64,
    exponent: f64,
    amplitude: f64,
}

impl TerrainGenerator {
    pub fn new(config: &TerrainConfig) -> Self {
        Self {
            noise: Simplex::new(config.seed),
            frequency: config.frequency,
            exponent: config.exponent,
            amplitude: config.amplitude,
        }
    }

    /// Ground height of a single column.
    pub fn sample(&self, x: i32, z: i32) -> i32 {
        let raw = self
            .noise
            .get([x as f64 * self.frequency, z as f64 * self.frequency]);
        let normalized = ((raw + 1.0) * 0.5).clamp(0.0, 1.0);
        (normalized.powf(self.exponent) * self.amplitude).round() as i32
    }

    /// Fill a height field covering `-half_extent..half_extent` on both axes.
    pub fn generate(&self, half_extent: i32) -> Result<HeightField, BlockcraftError> {
        let mut field = HeightField::flat(half_extent, 0)?;
        for z in -half_extent..half_extent {
            for x in -half_extent..half_extent {
                field.set_height(x, z, self.sample(x, z))?;
            }
        }
        log::info!(
            "Generated terrain: {0}x{0} columns, max height {1}",
            field.side(),
            field.max_height()
        );
        Ok(field)
    }
}

/// Block filling layer `y` of a column whose ground height is `height`.
///
/// The top layers are grass, the ones beneath dirt, and everything
/// deeper rock.
pub fn layer_block(y: i32, height: i32) -> BlockType {
    if y < height - GRASS_LAYERS - DIRT_LAYERS {
        BlockType::Rock
    } else if y < height - GRASS_LAYERS {
        BlockType::Dirt
    } else {
        BlockType::Grass
    }
}

/// Layers of a column of the given height, bottom-up.
pub fn column_layers(height: i32) -> impl Iterator<Item = (i32, BlockType)> {
    (0..height.max(0)).map(move |y| (y, layer_block(y, height)))
}

/// Place the voxels of every height-field column into the world. Returns the
/// number of voxels newly placed.
pub fn populate_terrain(world: &mut VoxelWorld, field: &HeightField) -> usize {
    let mut placed = 0;
    for (column, height) in field.columns() {
        for (y, block) in column_layers(height) {
            if world.place(IVec3::new(column.x, y, column.y), block) {
                placed += 1;
            }
        }
    }
    log::info!("Populated terrain with {placed} voxels");
    placed
}
