// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArmarioError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ArmarioError {
    /// Backend failures are worth retrying; validation failures are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ArmarioError::Api { .. } | ArmarioError::Network(_))
    }
}
