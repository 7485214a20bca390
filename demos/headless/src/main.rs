//! headless — batch Schelling run for segsim.
//!
//! Builds the classic 20×20 model, runs it for a fixed number of steps, and
//! writes step summaries + periodic grid snapshots to `output/headless/`.
//! Swap the constants (or wire up a CLI) to explore other regimes.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use seg_core::ModelConfig;
use seg_model::SchellingModel;
use seg_output::{CsvWriter, ModelOutputObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const STEPS: u64 = 50;
const SNAPSHOT_INTERVAL: u64 = 10; // full grid dump every 10 steps

fn main() -> Result<()> {
    println!("=== headless — segsim Schelling run ===");

    // 1. Build the model.
    let config = ModelConfig {
        seed: Some(SEED),
        ..Default::default()
    };
    let mut model = SchellingModel::new(config)?;
    println!(
        "Grid: {}x{}  |  Agents: {} ({} minority)  |  Seed: {}",
        model.grid().width(),
        model.grid().height(),
        model.agent_count(),
        model.agents().minority_count(),
        model.seed(),
    );

    // 2. Set up output.
    std::fs::create_dir_all("output/headless")?;
    let writer = CsvWriter::new(Path::new("output/headless"))?;
    let mut obs = ModelOutputObserver::new(writer, SNAPSHOT_INTERVAL);

    // 3. Run.
    let t0 = Instant::now();
    model.run(STEPS, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!("{:<8} {:<8} {:<8}", "Step", "Happy", "Total");
    println!("{}", "-".repeat(26));
    let series = model.happy_series();
    for step in (0..series.len()).step_by(10).chain([series.len() - 1]) {
        println!(
            "{:<8} {:<8} {:<8}",
            step,
            series[step],
            model.agent_count()
        );
    }
    println!();
    println!(
        "Final: {}/{} happy after {} steps",
        model.happy_count(),
        model.agent_count(),
        STEPS
    );

    Ok(())
}
