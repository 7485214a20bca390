//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `grid_snapshots` and `step_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{GridSnapshotRow, OutputResult, StepSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS grid_snapshots (
                 agent_id INTEGER NOT NULL,
                 step     INTEGER NOT NULL,
                 x        INTEGER NOT NULL,
                 y        INTEGER NOT NULL,
                 color    TEXT    NOT NULL,
                 happy    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS step_summaries (
                 step         INTEGER PRIMARY KEY,
                 happy_agents INTEGER NOT NULL,
                 moved_agents INTEGER NOT NULL,
                 total_agents INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[GridSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO grid_snapshots (agent_id, step, x, y, color, happy) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.step,
                    row.x,
                    row.y,
                    row.color,
                    row.happy as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO step_summaries (step, happy_agents, moved_agents, total_agents) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                row.step,
                row.happy_agents,
                row.moved_agents,
                row.total_agents
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
