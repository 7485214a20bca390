//! `seg-viz` — thin interactive visualization server for segsim.
//!
//! Hosts a single-page view of a running [`SchellingModel`]: agents drawn as
//! colored circles on a canvas grid plus a live chart of the happy-count
//! series.  The page drives the model through a small JSON API:
//!
//! | Route         | Method | Effect                                   |
//! |---------------|--------|------------------------------------------|
//! | `/`           | GET    | Embedded HTML page                       |
//! | `/api/state`  | GET    | Current [`SimSnapshot`] as JSON          |
//! | `/api/config` | GET    | The model's `ModelConfig` as JSON        |
//! | `/api/step`   | POST   | Advance one step, return new snapshot    |
//! | `/api/reset`  | POST   | Rebuild the model, return new snapshot   |
//!
//! This crate is an adapter only: all simulation semantics live in
//! `seg-model`, and the core crates never know the server exists.  The model
//! sits behind a `tokio::sync::RwLock`, so the single-threaded activation
//! loop is preserved — the server merely serializes access to it.

pub mod error;
pub mod page;
pub mod server;
pub mod snapshot;


pub use error::{VizError, VizResult};
pub use server::{router, serve, AppState, DEFAULT_PORT};
pub use snapshot::{AgentView, SimSnapshot};
