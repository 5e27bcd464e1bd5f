use thiserror::Error;

/// Errors shared by the world model and the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockcraftError {
    #[error("column ({x}, {z}) is outside the height field (half extent {half_extent})")]
    OutOfBounds { x: i32, z: i32, half_extent: i32 },

    #[error("invalid height field extent {0} (must be positive)")]
    InvalidExtent(i32),

    #[error("height field data has {actual} cells, expected {expected}")]
    HeightDataSize { expected: usize, actual: usize },

    #[error("unknown block type code '{0}'")]
    UnknownBlockCode(String),

    #[error("block type '{0}' is missing from the palette")]
    MissingFromPalette(&'static str),
}
