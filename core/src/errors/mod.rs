//! Flow-specific error types and error handling.

mod types;

pub use types::{AuthError, ValidationError};

use thiserror::Error;

/// Core flow errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// The text to surface to the user for this error
    ///
    /// Every error in the flow is user-visible; the display string
    /// carries the literal message the screen shows.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
