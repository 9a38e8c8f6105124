use thiserror::Error;

use sockforge_core::UnitId;

use crate::ports::ScreenPosition;

/// Failure reported by a game collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InteractionError {
    #[error("click at {position} failed: {reason}")]
    Click { position: ScreenPosition, reason: String },

    #[error("failed to close menus: {0}")]
    Menu(String),

    #[error("relocation failed: {0}")]
    Relocation(String),

    #[error("interaction failed: {0}")]
    Other(String),
}

/// Execution failure of a socketing pass.
///
/// Match misses are not errors; anything here aborts the whole pass because
/// the game state may no longer agree with what the engine believes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SocketingError {
    /// Collaborator failure, propagated unchanged.
    #[error(transparent)]
    Interaction(#[from] InteractionError),

    /// The base was relocated but is not in the working area afterwards.
    #[error("base item {0} is not in the inventory after relocation")]
    BaseNotRelocated(UnitId),

    /// The working area lacks inserts the recipe needs.
    #[error("recipe '{recipe}' is missing inserts in the inventory: {missing:?}")]
    InsertsMissing { recipe: String, missing: Vec<String> },
}
