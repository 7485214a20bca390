//! interactive — browser visualization for segsim.
//!
//! Builds the classic 20×20 model and serves the interactive grid view on
//! http://127.0.0.1:8521/ — open it in a browser, press Start, and watch the
//! clusters form.

use anyhow::Result;

use seg_core::ModelConfig;
use seg_model::SchellingModel;
use seg_viz::DEFAULT_PORT;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Entropy seed: every launch is a fresh run.  The resolved seed shows up
    // in the page footer and the logs for headless reproduction.
    let model = SchellingModel::new(ModelConfig::default())?;
    tracing::info!(
        agents = model.agent_count(),
        seed = model.seed(),
        "model ready"
    );

    seg_viz::serve(model, DEFAULT_PORT).await?;
    Ok(())
}
