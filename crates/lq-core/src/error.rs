//! Recoverable rule errors
//!
//! Every core operation is all-or-nothing: when one of these is returned,
//! no player state has changed.

use thiserror::Error;

/// Errors reported by core operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown task: {0}")]
    UnknownTask(String),

    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("unknown quest: {0}")]
    UnknownQuest(String),

    #[error("not enough energy: need {needed}, have {have}")]
    InsufficientEnergy { needed: u32, have: u32 },

    #[error("not enough gold: need {needed}, have {have}")]
    InsufficientGold { needed: u32, have: u32 },

    #[error("item not in inventory: {0}")]
    ItemNotOwned(String),

    #[error("quest already active or completed: {0}")]
    AlreadyActiveOrCompleted(String),
}
