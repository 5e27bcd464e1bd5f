/// Errors that can occur during save/load operations.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("save data is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("save data must be a list of records, found {0}")]
    NotARecordList(&'static str),

    #[error("malformed save record #{index}: {reason}")]
    MalformedSaveRecord { index: usize, reason: String },

    #[error("region min {min:?} exceeds max {max:?}")]
    InvertedRegion { min: [i32; 3], max: [i32; 3] },
}
