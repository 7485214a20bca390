//! `RandomActivation` — fresh random activation order every tick.
//!
//! # Why this exists
//!
//! The order in which agents act matters: an agent activated late in a tick
//! sees neighborhoods that earlier agents have already changed.  Iterating a
//! mutable collection in storage order would bake a fixed bias into every
//! run.  `RandomActivation` instead holds an explicit list of agent ids and
//! Fisher-Yates-shuffles it with the model's seeded generator at the start of
//! each tick, so activation order is uniform over all permutations and fully
//! reproducible from the seed.
//!
//! The permutation buffer is allocated once and reused — drawing a new order
//! is an in-place shuffle, not a rebuild.

use seg_core::{AgentId, SimRng};

/// Per-tick random permutation of all agent ids.
pub struct RandomActivation {
    order: Vec<AgentId>,
}

impl RandomActivation {
    /// Create a scheduler over agents `0..count`.
    pub fn new(count: usize) -> Self {
        Self {
            order: (0..count as u32).map(AgentId).collect(),
        }
    }

    /// Number of scheduled agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Draw a fresh activation order for this tick.
    pub fn shuffle(&mut self, rng: &mut SimRng) {
        rng.shuffle(&mut self.order);
    }

    /// The agent at position `i` of the current order.
    #[inline]
    pub fn get(&self, i: usize) -> AgentId {
        self.order[i]
    }

    /// The current order as a slice (most recently drawn permutation).
    pub fn order(&self) -> &[AgentId] {
        &self.order
    }
}
