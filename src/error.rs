//! Error type for park construction and validation.
//!
//! Queries never fail; only validating a park against its invariants can.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParkError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl ParkError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ParkError::InvalidInput {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkError>;
