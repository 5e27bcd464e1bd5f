pub mod defaults;
pub mod loader;
pub mod validator;

pub use loader::{load_config_from_str, load_palette_from_str, LoadError, RawBlockDef};
pub use validator::{validate_config, validate_palette, ValidationError};
