pub mod height_field;
pub mod terraces;
pub mod terrain;
pub mod voxel_world;

pub use height_field::HeightField;
pub use terraces::TerraceRow;
pub use terrain::{column_layers, layer_block, populate_terrain, TerrainGenerator};
pub use voxel_world::{VoxelRecord, VoxelWorld, WorldEvent};
