use blockcraft_world::VoxelWorld;

use crate::error::PersistError;
use crate::format::SaveRecord;

/// Snapshot every live voxel as save records.
///
/// Records are sorted by position so repeated saves of the same world produce
/// identical files. Loaders must not rely on the order.
pub fn save(world: &VoxelWorld) -> Vec<SaveRecord> {
    let mut records: Vec<SaveRecord> = world.iter().map(SaveRecord::from).collect();
    records.sort_by_key(|r| r.position);
    records
}

/// Serialize the world to a pretty-printed JSON save file.
pub fn to_json(world: &VoxelWorld) -> Result<String, PersistError> {
    let records = save(world);
    let json = serde_json::to_string_pretty(&records)?;
    log::info!("Saved {} voxels ({} bytes)", records.len(), json.len());
    Ok(json)
}
