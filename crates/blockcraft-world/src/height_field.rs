use blockcraft_core::config::TerrainConfig;
use blockcraft_core::error::BlockcraftError;
use blockcraft_core::types::ColumnCoord;
use glam::{IVec2, IVec3};

use crate::terrain::TerrainGenerator;
use crate::voxel_world::VoxelWorld;

/// Dense grid of integer ground heights over columns
/// `-half_extent..half_extent` on both axes.
///
/// A column of height `h` is solid from `y = 0` up to its top face at `y = h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightField {
    half_extent: i32,
    side: usize,
    heights: Vec<i32>,
}

impl HeightField {
    /// A field where every column has the same height.
    pub fn flat(half_extent: i32, height: i32) -> Result<Self, BlockcraftError> {
        let side = Self::side_for(half_extent)?;
        Ok(Self {
            half_extent,
            side,
            heights: vec![height; side * side],
        })
    }

    /// Wrap row-major height data (x fastest, starting at `-half_extent`).
    pub fn from_heights(half_extent: i32, heights: Vec<i32>) -> Result<Self, BlockcraftError> {
        let side = Self::side_for(half_extent)?;
        if heights.len() != side * side {
            return Err(BlockcraftError::HeightDataSize {
                expected: side * side,
                actual: heights.len(),
            });
        }
        Ok(Self {
            half_extent,
            side,
            heights,
        })
    }

    /// Procedurally generate a field from noise. Deterministic per seed.
    pub fn generate(config: &TerrainConfig) -> Result<Self, BlockcraftError> {
        TerrainGenerator::new(config).generate(config.half_extent)
    }

    fn side_for(half_extent: i32) -> Result<usize, BlockcraftError> {
        if half_extent <= 0 {
            return Err(BlockcraftError::InvalidExtent(half_extent));
        }
        Ok(2 * half_extent as usize)
    }

    fn index(&self, x: i32, z: i32) -> Result<usize, BlockcraftError> {
        if !self.contains(x, z) {
            return Err(BlockcraftError::OutOfBounds {
                x,
                z,
                half_extent: self.half_extent,
            });
        }
        let ix = (x + self.half_extent) as usize;
        let iz = (z + self.half_extent) as usize;
        Ok(iz * self.side + ix)
    }

    /// Whether a column lies inside the field.
    pub fn contains(&self, x: i32, z: i32) -> bool {
        let h = self.half_extent;
        x >= -h && x < h && z >= -h && z < h
    }

    /// Ground height of a column.
    pub fn height_at(&self, x: i32, z: i32) -> Result<i32, BlockcraftError> {
        Ok(self.heights[self.index(x, z)?])
    }

    /// Overwrite the height of a column.
    pub fn set_height(&mut self, x: i32, z: i32, height: i32) -> Result<(), BlockcraftError> {
        let i = self.index(x, z)?;
        self.heights[i] = height;
        Ok(())
    }

    /// Lower a column by `amount`, never below zero. Returns the new height.
    pub fn lower(&mut self, x: i32, z: i32, amount: i32) -> Result<i32, BlockcraftError> {
        let i = self.index(x, z)?;
        let lowered = (self.heights[i] - amount).max(0);
        self.heights[i] = lowered;
        Ok(lowered)
    }

    pub fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// Columns per axis.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Every column with its height, row by row.
    pub fn columns(&self) -> impl Iterator<Item = (ColumnCoord, i32)> + '_ {
        let h = self.half_extent;
        let side = self.side;
        self.heights.iter().enumerate().map(move |(i, &height)| {
            let x = (i % side) as i32 - h;
            let z = (i / side) as i32 - h;
            (IVec2::new(x, z), height)
        })
    }

    /// Raise every column whose top face is covered by a voxel until it
    /// reaches open air. Columns never go down. Returns how many columns rose.
    pub fn raise_to_voxels(&mut self, world: &VoxelWorld) -> usize {
        let h = self.half_extent;
        let side = self.side;
        let mut raised = 0;
        for (i, height) in self.heights.iter_mut().enumerate() {
            let x = (i % side) as i32 - h;
            let z = (i / side) as i32 - h;
            let start = *height;
            while world.contains(IVec3::new(x, *height, z)) {
                *height += 1;
            }
            if *height != start {
                raised += 1;
            }
        }
        if raised > 0 {
            log::debug!("{raised} columns raised to match voxels");
        }
        raised
    }

    /// Tallest column height.
    pub fn max_height(&self) -> i32 {
        self.heights.iter().copied().max().unwrap_or(0)
    }
}
