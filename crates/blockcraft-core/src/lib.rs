pub mod block;
pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod types;

pub use block::{BlockDef, BlockTextures, BlockType, Palette, Rgb};
pub use config::WorldConfig;
pub use error::BlockcraftError;
pub use types::{ColumnCoord, GridPosition};
