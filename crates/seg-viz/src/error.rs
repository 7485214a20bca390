//! Visualization-server error type.

use thiserror::Error;

/// Errors produced while starting or running the server.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VizResult<T> = Result<T, VizError>;
