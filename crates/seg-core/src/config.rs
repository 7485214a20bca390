//! Model configuration and fail-fast validation.

use crate::{SegError, SegResult};

/// Top-level Schelling model configuration.
///
/// All parameters have the classic defaults (20×20 torus, 80 % occupancy,
/// 20 % minority, tolerance 4).  Validation happens once, at model
/// construction; after that nothing can fail.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// Grid height in cells.  Must be ≥ 1.
    pub height: u32,

    /// Grid width in cells.  Must be ≥ 1.
    pub width: u32,

    /// Probability that a cell is occupied at construction, in [0, 1].
    ///
    /// 1.0 is legal: the grid starts full and every relocation request
    /// becomes a no-op (there is nowhere to go).
    pub density: f64,

    /// Probability that a created agent gets the minority color, in [0, 1].
    pub minority_fraction: f64,

    /// Max acceptable count of differently-colored Moore neighbors.
    ///
    /// With 8 possible neighbors, any value ≥ 8 makes every agent
    /// unconditionally happy.
    pub tolerance_threshold: u32,

    /// Master RNG seed.  `None` draws a seed from entropy at build time; the
    /// resolved value is readable back from the model for reproduction.
    pub seed: Option<u64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            height: 20,
            width: 20,
            density: 0.8,
            minority_fraction: 0.2,
            tolerance_threshold: 4,
            seed: None,
        }
    }
}

impl ModelConfig {
    /// Check every parameter, returning the first violation found.
    pub fn validate(&self) -> SegResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(SegError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(SegError::Config(format!(
                "density must be in [0, 1], got {}",
                self.density
            )));
        }
        if !(0.0..=1.0).contains(&self.minority_fraction) {
            return Err(SegError::Config(format!(
                "minority_fraction must be in [0, 1], got {}",
                self.minority_fraction
            )));
        }
        Ok(())
    }

    /// Total number of cells on the grid.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
