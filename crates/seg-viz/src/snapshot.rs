//! JSON snapshot of the model state, shaped for the browser page.

use serde::Serialize;

use seg_model::SchellingModel;

/// One agent as drawn by the page: a colored circle at a cell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentView {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    /// CSS color name ("red" / "blue").
    pub color: &'static str,
    pub happy: bool,
}

/// Full state payload returned by `/api/state`, `/api/step`, and
/// `/api/reset`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimSnapshot {
    /// Number of completed steps.
    pub step: u64,
    pub width: u32,
    pub height: u32,
    pub total_agents: usize,
    pub happy_agents: usize,
    pub moved_last_step: usize,
    /// Resolved RNG seed, so a browser session can be reproduced headlessly.
    pub seed: u64,
    /// Happy count at the end of every completed step (the chart series).
    pub happy_series: Vec<usize>,
    pub agents: Vec<AgentView>,
}

impl SimSnapshot {
    pub fn from_model(model: &SchellingModel) -> Self {
        let store = model.agents();
        let agents = store
            .agent_ids()
            .map(|id| {
                let i = id.index();
                AgentView {
                    id: id.0,
                    x: store.pos[i].x,
                    y: store.pos[i].y,
                    color: store.color[i].as_str(),
                    happy: store.happy[i],
                }
            })
            .collect();

        Self {
            step: model.tick().0,
            width: model.grid().width(),
            height: model.grid().height(),
            total_agents: model.agent_count(),
            happy_agents: model.happy_count(),
            moved_last_step: model.moved_last_step(),
            seed: model.seed(),
            happy_series: model.happy_series().to_vec(),
            agents,
        }
    }
}
