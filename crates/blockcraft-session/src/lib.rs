pub mod camera;
pub mod clock;
pub mod cursor;
pub mod error;
pub mod headless;
pub mod input;
pub mod locomotion;
pub mod render;
pub mod session;

pub use camera::FollowCamera;
pub use clock::FrameClock;
pub use cursor::Cursor;
pub use error::SessionError;
pub use headless::{HeadlessBackend, RenderCall};
pub use input::{InputState, Key, MovementKeys};
pub use locomotion::{AvatarLocomotion, MotionState, TickOutcome};
pub use render::{IndicatorHandle, MeshHandle, RenderBackend, RenderBridge};
pub use session::Session;
