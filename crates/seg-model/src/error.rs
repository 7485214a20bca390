//! Model-subsystem error type.

use thiserror::Error;

use seg_core::SegError;
use seg_grid::GridError;

/// Errors produced while constructing a model.
///
/// Once a model is built, stepping cannot fail: relocation onto a full grid
/// is a defined no-op, not an error.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Core(#[from] SegError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type ModelResult<T> = Result<T, ModelError>;
