//! The `SchellingModel` struct and its tick loop.

use seg_core::{AgentId, ModelConfig, SimRng, Tick};
use seg_grid::TorusGrid;

use crate::observer::ModelObserver;
use crate::scheduler::RandomActivation;
use crate::store::AgentStore;
use crate::ModelBuilder;

/// The Schelling segregation model.
///
/// Holds the grid, the agent population, the activation scheduler, and the
/// model-level RNG, and drives the per-tick loop: shuffle, activate every
/// agent once, collect the happy count.
///
/// Create via [`ModelBuilder`]; stepping never fails.
pub struct SchellingModel {
    pub(crate) config: ModelConfig,
    /// The resolved RNG seed (differs from `config.seed` only when that was
    /// `None`).
    pub(crate) seed: u64,
    pub(crate) tick: Tick,
    pub(crate) grid: TorusGrid,
    pub(crate) agents: AgentStore,
    pub(crate) scheduler: RandomActivation,
    pub(crate) rng: SimRng,
    /// Happy-agent count collected at the end of every step; index == tick.
    pub(crate) happy_series: Vec<usize>,
    pub(crate) moved_last_step: usize,
}

impl SchellingModel {
    /// Build a model with random population from `config`.
    pub fn new(config: ModelConfig) -> crate::ModelResult<Self> {
        ModelBuilder::new(config).build()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// The resolved RNG seed; feed it back via `config.seed` to reproduce
    /// this run exactly.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The current tick (number of completed steps).
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn grid(&self) -> &TorusGrid {
        &self.grid
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn agent_count(&self) -> usize {
        self.agents.count()
    }

    /// Count of currently-happy agents.
    pub fn happy_count(&self) -> usize {
        self.agents.happy_count()
    }

    /// Happy counts collected at the end of each completed step.
    pub fn happy_series(&self) -> &[usize] {
        &self.happy_series
    }

    /// How many agents relocated during the most recent step.
    pub fn moved_last_step(&self) -> usize {
        self.moved_last_step
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run one step: activate every agent exactly once in a freshly drawn
    /// random order, then record the happy count.
    pub fn step(&mut self) {
        self.scheduler.shuffle(&mut self.rng);

        let mut moved = 0;
        for i in 0..self.scheduler.len() {
            if self.activate(self.scheduler.get(i)) {
                moved += 1;
            }
        }

        self.moved_last_step = moved;
        self.happy_series.push(self.agents.happy_count());
        self.tick.advance();
    }

    /// Run `steps` steps with observer callbacks at step boundaries.
    pub fn run<O: ModelObserver>(&mut self, steps: u64, observer: &mut O) {
        for _ in 0..steps {
            let now = self.tick;
            observer.on_step_start(now);
            self.step();
            observer.on_step_end(now, self);
        }
        observer.on_run_end(self.tick, self);
    }

    // ── Agent activation ──────────────────────────────────────────────────

    /// One agent's decision: count differently-colored Moore neighbors and
    /// either settle (happy) or relocate to a uniformly sampled empty cell
    /// (unhappy).  Returns `true` if the agent moved.
    ///
    /// When no empty cell exists the relocation is a no-op: the agent stays
    /// put and keeps `happy = false`.
    fn activate(&mut self, agent: AgentId) -> bool {
        let i = agent.index();
        let pos = self.agents.pos[i];
        let color = self.agents.color[i];

        let different = self
            .grid
            .neighbor_agents(pos)
            .filter(|n| self.agents.color[n.index()] != color)
            .count() as u32;

        if different <= self.agents.tolerance[i] {
            self.agents.happy[i] = true;
            return false;
        }

        self.agents.happy[i] = false;
        match self.grid.random_empty(&mut self.rng) {
            Some(dest) => {
                // Cannot fail: `dest` was sampled empty and `pos` holds this
                // agent; a failure here means the grid/store lock-step
                // invariant is already broken, so stay put rather than panic.
                if self.grid.relocate(pos, dest).is_ok() {
                    self.agents.pos[i] = dest;
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }
}
