//! Cross-cutting error types.
//!
//! Domain-specific errors (`ConfigError`, `ApiError`, `SceneError`) live in
//! their respective crates; everything converges on `anyhow` in `holly-cli`.

use thiserror::Error;

/// Errors raised by the core domain logic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// User input failed validation (missing or over-limit survey fields).
    #[error("{0}")]
    Validation(String),

    /// A session event was applied at a step where it is not allowed.
    #[error("invalid transition: event {event} at step {step}")]
    InvalidTransition { step: String, event: String },

    /// Ornament metadata could not be encoded or decoded.
    #[error("metadata error: {0}")]
    Metadata(#[from] serde_json::Error),
}
