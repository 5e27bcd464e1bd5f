use blockcraft_core::error::BlockcraftError;
use blockcraft_data::LoadError;
use blockcraft_persist::PersistError;

/// Errors surfaced by a running session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    World(#[from] BlockcraftError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Load(#[from] LoadError),
}
