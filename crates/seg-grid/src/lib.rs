//! `seg-grid` — toroidal single-occupancy grid for the segsim simulator.
//!
//! # Data layout
//!
//! The grid is a dense row-major `Vec<AgentId>` with `AgentId::INVALID` as
//! the empty-cell sentinel (arena + coordinate index — cells have no identity
//! beyond their coordinates, so there are no cell objects).  Lookup, place,
//! and remove are all O(1) array operations.
//!
//! # Torus semantics
//!
//! Edges wrap: the Moore neighborhood of a border cell includes cells on the
//! opposite edge.  Wrap-around is confined to [`TorusGrid::wrap`]; every
//! public operation takes in-bounds coordinates.

pub mod error;
pub mod grid;


pub use error::{GridError, GridResult};
pub use grid::TorusGrid;
