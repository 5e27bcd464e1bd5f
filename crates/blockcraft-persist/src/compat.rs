use serde::Deserialize;
use serde_json::Value;

use crate::error::PersistError;
use crate::format::SaveRecord;

/// Field carried by early save files that embedded full render material
/// dumps instead of a block code.
pub const LEGACY_MESH_FIELD: &str = "mesh";

/// Decode one record of a save file, naming the problem if it is malformed.
pub fn validate_record(index: usize, value: &Value) -> Result<SaveRecord, PersistError> {
    let malformed = |reason: String| PersistError::MalformedSaveRecord { index, reason };

    let object = value
        .as_object()
        .ok_or_else(|| malformed(format!("expected an object, found {}", kind_of(value))))?;

    if object.contains_key(LEGACY_MESH_FIELD) && !object.contains_key("blockType") {
        return Err(malformed(
            "legacy record with embedded mesh data and no blockType".to_string(),
        ));
    }

    SaveRecord::deserialize(value).map_err(|e| malformed(e.to_string()))
}

/// Short name of a JSON value's type for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
