//! Fluent builder for constructing a [`SchellingModel`].

use seg_core::{Color, Coord, ModelConfig, SimRng, Tick};
use seg_grid::TorusGrid;

use crate::scheduler::RandomActivation;
use crate::store::AgentStore;
use crate::{ModelResult, SchellingModel};

/// Fluent builder for [`SchellingModel`].
///
/// # Required inputs
///
/// - [`ModelConfig`] — dimensions, density, minority fraction, tolerance,
///   optional seed.
///
/// # Optional inputs
///
/// | Method       | Default                                                  |
/// |--------------|----------------------------------------------------------|
/// | `.layout(v)` | Random population per `density` / `minority_fraction`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut model = ModelBuilder::new(ModelConfig { seed: Some(42), ..Default::default() })
///     .build()?;
/// model.step();
/// ```
pub struct ModelBuilder {
    config: ModelConfig,
    layout: Option<Vec<(Coord, Color)>>,
}

impl ModelBuilder {
    pub fn new(config: ModelConfig) -> Self {
        Self { config, layout: None }
    }

    /// Supply an explicit agent placement instead of random population.
    ///
    /// Each entry puts one agent of the given color on the given cell, with
    /// the configured tolerance threshold.  `density` and
    /// `minority_fraction` are ignored.  Duplicate or out-of-range cells
    /// fail `build()`.  Intended for reproducible experiments and tests.
    pub fn layout(mut self, cells: Vec<(Coord, Color)>) -> Self {
        self.layout = Some(cells);
        self
    }

    /// Validate the configuration, populate the grid, and return a
    /// ready-to-step model.
    pub fn build(self) -> ModelResult<SchellingModel> {
        self.config.validate()?;

        // `None` draws a fresh seed from entropy; the resolved value is kept
        // on the model so any run can be reproduced.
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = SimRng::new(seed);

        let mut grid = TorusGrid::new(self.config.width, self.config.height)?;
        let mut store = AgentStore::with_capacity(grid.capacity());
        let tolerance = self.config.tolerance_threshold;

        match self.layout {
            Some(cells) => {
                for (coord, color) in cells {
                    let id = store.push(color, coord, tolerance);
                    grid.place(id, coord)?;
                }
            }
            None => {
                for coord in grid.coord_iter() {
                    if !rng.gen_bool(self.config.density) {
                        continue;
                    }
                    let color = if rng.gen_bool(self.config.minority_fraction) {
                        Color::Red
                    } else {
                        Color::Blue
                    };
                    let id = store.push(color, coord, tolerance);
                    grid.place(id, coord)?;
                }
            }
        }

        let scheduler = RandomActivation::new(store.count());

        Ok(SchellingModel {
            config: self.config,
            seed,
            tick: Tick::ZERO,
            grid,
            agents: store,
            scheduler,
            rng,
            happy_series: Vec::new(),
            moved_last_step: 0,
        })
    }
}
