//! Structure-of-Arrays agent storage.
//!
//! Every `Vec` field has exactly `count()` elements; the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let color = store.color[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! Agents are created once at model construction and never destroyed, so the
//! arrays only ever grow during the build phase.

use seg_core::{AgentId, Color, Coord};

/// SoA storage for all agent state.
///
/// Fields are `pub` for direct indexed access on the activation hot path.
/// The position array mirrors the grid's occupancy: `grid.occupant(pos[i])`
/// is always `AgentId(i)` — the model keeps the two in lock-step.
#[derive(Default)]
pub struct AgentStore {
    /// Group membership of each agent.
    pub color: Vec<Color>,

    /// Current cell of each agent.  Mutates on relocation.
    pub pos: Vec<Coord>,

    /// Max acceptable count of differently-colored Moore neighbors.
    pub tolerance: Vec<u32>,

    /// Happiness flag, rewritten at each agent's activation.
    pub happy: Vec<bool>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            color: Vec::with_capacity(capacity),
            pos: Vec::with_capacity(capacity),
            tolerance: Vec::with_capacity(capacity),
            happy: Vec::with_capacity(capacity),
        }
    }

    /// Append one agent and return its id.
    ///
    /// Agents start happy; the flag is recomputed at first activation.
    pub fn push(&mut self, color: Color, pos: Coord, tolerance: u32) -> AgentId {
        let id = AgentId(self.color.len() as u32);
        self.color.push(color);
        self.pos.push(pos);
        self.tolerance.push(tolerance);
        self.happy.push(true);
        id
    }

    /// Number of agents.
    #[inline]
    pub fn count(&self) -> usize {
        self.color.len()
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (0..self.color.len() as u32).map(AgentId)
    }

    /// Count of currently-happy agents.
    pub fn happy_count(&self) -> usize {
        self.happy.iter().filter(|&&h| h).count()
    }

    /// Count of agents with the minority color.
    pub fn minority_count(&self) -> usize {
        self.color.iter().filter(|c| c.is_minority()).count()
    }
}
