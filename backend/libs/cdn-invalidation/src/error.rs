//! Error types for CDN invalidation requests

use thiserror::Error;

/// CDN invalidation errors
#[derive(Error, Debug)]
pub enum InvalidationError {
    /// Required configuration value is missing or empty
    #[error("{0} environment variable not set")]
    MissingConfiguration(&'static str),

    /// `paths` in the event is not a list of strings
    #[error("Invalid paths in event: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    /// Request could not be built for the CDN API
    #[error("Invalid invalidation request: {0}")]
    Request(String),

    /// CDN control-plane call failed
    #[error("{0}")]
    Api(String),

    /// CDN accepted the call but returned no invalidation
    #[error("CreateInvalidation response did not include an invalidation")]
    MissingInvalidation,
}

impl InvalidationError {
    /// HTTP-style status reported to the caller
    pub fn status_code(&self) -> u16 {
        match self {
            InvalidationError::MissingConfiguration(_) => 400,
            _ => 500,
        }
    }

    /// Operational failures are everything raised after configuration resolved
    pub fn is_operational(&self) -> bool {
        !matches!(self, InvalidationError::MissingConfiguration(_))
    }
}
