//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Transport or service failure (network, quota, non-2xx, blocked prompt).
    #[error("Model service error: {0}")]
    Ai(String),

    /// Reply did not match the requested output shape.
    #[error("Structured decode failed: {0}")]
    Decode(String),

    #[error("Invalid image payload: {0}")]
    Image(String),

    #[error("Photo capture failed: {0}")]
    Capture(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}
