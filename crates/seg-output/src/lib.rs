//! `seg-output` — simulation output writers for the segsim simulator.
//!
//! Two backends are provided:
//!
//! | Feature  | Backend | Files created                              |
//! |----------|---------|--------------------------------------------|
//! | *(none)* | CSV     | `step_summaries.csv`, `grid_snapshots.csv` |
//! | `sqlite` | SQLite  | `output.db`                                |
//!
//! Both implement [`OutputWriter`] and are driven by [`ModelOutputObserver`],
//! which implements `seg_model::ModelObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use seg_output::{CsvWriter, ModelOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ModelOutputObserver::new(writer, 1);
//! model.run(50, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ModelOutputObserver;
pub use row::{GridSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
