//! Policy composition errors

use domain_rating::RatingError;
use thiserror::Error;

/// Errors that can occur while composing quotes, applications, or policies
#[derive(Debug, Error)]
pub enum PolicyError {
    /// An applicant-supplied value conflicts with the quoted snapshot
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The rating engine rejected the composition
    #[error(transparent)]
    Rating(#[from] RatingError),

    /// The opaque request echo could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PolicyError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        PolicyError::InvalidRequest(message.into())
    }
}
