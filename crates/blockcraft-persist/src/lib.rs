pub mod compat;
pub mod error;
pub mod format;
pub mod load;
pub mod save;
pub mod structure;

pub use error::PersistError;
pub use format::{PositionRecord, SaveRecord};
pub use load::{from_json, load};
pub use save::{save, to_json};
pub use structure::{export_region, stamp_structure};
