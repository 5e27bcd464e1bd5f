use blockcraft_world::{VoxelRecord, VoxelWorld};
use serde_json::Value;

use crate::compat;
use crate::error::PersistError;

/// Parse and validate a JSON save file.
///
/// Every record is checked before any is returned; the first malformed one
/// fails the whole parse with its index.
pub fn from_json(json: &str) -> Result<Vec<VoxelRecord>, PersistError> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(PersistError::NotARecordList(compat::kind_of(&other))),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| compat::validate_record(index, item).map(VoxelRecord::from))
        .collect()
}

/// Load a JSON save file into the world with `place` semantics.
///
/// The world is untouched if any record is malformed. Returns how many cells
/// were newly filled.
pub fn load(world: &mut VoxelWorld, json: &str) -> Result<usize, PersistError> {
    let records = match from_json(json) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Rejected save file: {e}");
            return Err(e);
        }
    };
    let placed = world.deserialize(&records);
    log::info!(
        "Loaded {} records ({} placed, {} already occupied)",
        records.len(),
        placed,
        records.len() - placed
    );
    Ok(placed)
}
