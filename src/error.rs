//! Startup and collaborator failures
//!
//! In-run outcomes (crash, landing) are game states, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanderError {
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("renderer failure: {0}")]
    Render(String),

    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}
