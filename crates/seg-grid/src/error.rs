//! Grid-subsystem error type.

use thiserror::Error;

use seg_core::Coord;

/// Errors produced by `seg-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),

    #[error("cell {0} is empty")]
    CellEmpty(Coord),
}

pub type GridResult<T> = Result<T, GridError>;
