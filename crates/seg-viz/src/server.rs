//! Axum router, handlers, and the `serve` entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use seg_core::ModelConfig;
use seg_model::{ModelBuilder, SchellingModel};

use crate::page::PAGE;
use crate::snapshot::SimSnapshot;
use crate::VizResult;

/// Default local port for the visualization server.
pub const DEFAULT_PORT: u16 = 8521;

/// Shared server state: the live model plus the configuration it was built
/// from (used by `/api/reset` to rebuild).
#[derive(Clone)]
pub struct AppState {
    config: ModelConfig,
    model: Arc<RwLock<SchellingModel>>,
}

impl AppState {
    pub fn new(model: SchellingModel) -> Self {
        Self {
            config: model.config().clone(),
            model: Arc::new(RwLock::new(model)),
        }
    }
}

/// Build the application router.  Exposed separately from [`serve`] so tests
/// can drive it without binding a socket.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/", get(index))
        .route("/api/state", get(api_state))
        .route("/api/config", get(api_config))
        .route("/api/step", post(api_step))
        .route("/api/reset", post(api_reset))
        .layer(cors)
        .with_state(state)
}

/// Bind `127.0.0.1:port` and serve until the process is stopped.
pub async fn serve(model: SchellingModel, port: u16) -> VizResult<()> {
    let state = AppState::new(model);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("segsim visualization listening on http://{addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn index() -> Html<&'static str> {
    Html(PAGE)
}

async fn api_state(State(state): State<AppState>) -> Json<SimSnapshot> {
    let model = state.model.read().await;
    Json(SimSnapshot::from_model(&model))
}

async fn api_config(State(state): State<AppState>) -> Json<ModelConfig> {
    Json(state.config.clone())
}

async fn api_step(State(state): State<AppState>) -> Json<SimSnapshot> {
    let mut model = state.model.write().await;
    model.step();
    info!(
        step = model.tick().0,
        happy = model.happy_count(),
        moved = model.moved_last_step(),
        "stepped"
    );
    Json(SimSnapshot::from_model(&model))
}

/// Rebuild the model from the original configuration.  With a fixed seed the
/// same run is recreated; with `seed: None` a fresh entropy seed is drawn.
async fn api_reset(
    State(state): State<AppState>,
) -> Result<Json<SimSnapshot>, (StatusCode, String)> {
    let rebuilt = ModelBuilder::new(state.config.clone())
        .build()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let mut model = state.model.write().await;
    *model = rebuilt;
    info!(seed = model.seed(), "model reset");
    Ok(Json(SimSnapshot::from_model(&model)))
}
