//! `seg-model` — the Schelling segregation model and its tick driver.
//!
//! # Tick loop
//!
//! ```text
//! for each step:
//!   ① Shuffle   — draw a fresh random permutation of all agent ids.
//!   ② Activate  — for each agent, in that order:
//!                   count differently-colored Moore neighbors;
//!                   within tolerance  → happy = true, stay;
//!                   over tolerance    → happy = false, relocate to a
//!                                       uniformly sampled empty cell
//!                                       (no-op when the grid is full).
//!   ③ Collect   — append the count of happy agents to the series.
//! ```
//!
//! Activation is strictly sequential (classic asynchronous update): agents
//! later in the order see neighbors that may already have moved this tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seg_core::ModelConfig;
//! use seg_model::{ModelBuilder, NoopObserver};
//!
//! let mut model = ModelBuilder::new(ModelConfig::default()).build()?;
//! model.run(50, &mut NoopObserver);
//! println!("happy per step: {:?}", model.happy_series());
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod scheduler;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::ModelBuilder;
pub use error::{ModelError, ModelResult};
pub use model::SchellingModel;
pub use observer::{ModelObserver, NoopObserver};
pub use scheduler::RandomActivation;
pub use store::AgentStore;
