use glam::{IVec2, IVec3, Vec3};

/// Integer voxel cell coordinate. Y-up.
pub type GridPosition = IVec3;

/// Integer terrain column coordinate (x, z).
pub type ColumnCoord = IVec2;

/// Column containing a grid cell.
pub fn column_of(position: GridPosition) -> ColumnCoord {
    IVec2::new(position.x, position.z)
}

/// World-space center of a voxel cell. Cells sit on integer x/z and span
/// `y..y+1` vertically, so a column of height `h` has its top face at `y = h`.
pub fn cell_center(position: GridPosition) -> Vec3 {
    Vec3::new(position.x as f32, position.y as f32 + 0.5, position.z as f32)
}

/// Column under a continuous world-space point.
pub fn column_at(point: Vec3) -> ColumnCoord {
    IVec2::new(point.x.round() as i32, point.z.round() as i32)
}
