//! `ModelOutputObserver<W>` — bridges `ModelObserver` to an `OutputWriter`.

use seg_core::Tick;
use seg_model::{ModelObserver, SchellingModel};

use crate::row::{GridSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`ModelObserver`] that writes step summaries and grid snapshots to any
/// [`OutputWriter`] backend (CSV, SQLite).
///
/// A summary row is written after every step; full grid snapshots are written
/// every `snapshot_interval` steps (0 disables them).  Errors from the writer
/// are stored internally because `ModelObserver` methods have no return
/// value.  After the run, check for errors with [`take_error`][Self::take_error].
pub struct ModelOutputObserver<W: OutputWriter> {
    writer: W,
    snapshot_interval: u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ModelOutputObserver<W> {
    /// Create an observer backed by `writer`, snapshotting the full grid
    /// every `snapshot_interval` steps (0 = summaries only).
    pub fn new(writer: W, snapshot_interval: u64) -> Self {
        Self {
            writer,
            snapshot_interval,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run completes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ModelObserver for ModelOutputObserver<W> {
    fn on_step_end(&mut self, tick: Tick, model: &SchellingModel) {
        let row = StepSummaryRow {
            step: tick.0,
            happy_agents: model.happy_count() as u64,
            moved_agents: model.moved_last_step() as u64,
            total_agents: model.agent_count() as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);

        if self.snapshot_interval > 0 && tick.0.is_multiple_of(self.snapshot_interval) {
            let agents = model.agents();
            let rows: Vec<GridSnapshotRow> = agents
                .agent_ids()
                .map(|id| {
                    let i = id.index();
                    GridSnapshotRow {
                        agent_id: id.0,
                        step: tick.0,
                        x: agents.pos[i].x,
                        y: agents.pos[i].y,
                        color: agents.color[i].as_str(),
                        happy: agents.happy[i],
                    }
                })
                .collect();

            if !rows.is_empty() {
                let result = self.writer.write_snapshots(&rows);
                self.store_err(result);
            }
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick, _model: &SchellingModel) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
