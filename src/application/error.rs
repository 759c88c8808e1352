//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the edges of the inventory model: reading manifests,
/// loading settings, resolving hosts requested by the user.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("invalid inventory manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("no computer named '{0}'")]
    HostNotFound(String),

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
