//! `seg-core` — foundational types for the segsim Schelling simulator.
//!
//! This crate is a dependency of every other `seg-*` crate.  It intentionally
//! has no `seg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                    |
//! |------------|---------------------------------------------|
//! | [`ids`]    | `AgentId`                                   |
//! | [`color`]  | `Color` (minority / majority)               |
//! | [`coord`]  | `Coord` (integer grid coordinates)          |
//! | [`tick`]   | `Tick`                                      |
//! | [`rng`]    | `SimRng` (seeded model-level generator)     |
//! | [`config`] | `ModelConfig` + validation                  |
//! | [`error`]  | `SegError`, `SegResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod color;
pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use config::ModelConfig;
pub use coord::Coord;
pub use error::{SegError, SegResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use tick::Tick;
