//! # error
//!
//! Connector errors

use remotefs::RemoteError;
use thiserror::Error;

/// Result returned by connector operations
pub type SmbResult<T> = Result<T, SmbError>;

/// Errors raised while configuring or opening a share session
#[derive(Debug, Error)]
pub enum SmbError {
    /// The backend required to reach the server is not available
    #[error("required client extension not loaded: {0}")]
    Dependency(String),
    /// A connection parameter is missing or invalid
    #[error("missing connection parameters: {0}")]
    Configuration(String),
    /// Failure reported by the remote share service
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),
}

impl SmbError {
    /// Returns whether the error comes from the local configuration rather than the server
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
