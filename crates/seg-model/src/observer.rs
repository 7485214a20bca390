//! Model observer trait for progress reporting and data collection.

use seg_core::Tick;

use crate::SchellingModel;

/// Callbacks invoked by [`SchellingModel::run`] at step boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `on_step_end` receives the whole model
/// read-only, so output writers can record any view of the state without the
/// model knowing about any specific format.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl ModelObserver for ProgressPrinter {
///     fn on_step_end(&mut self, tick: Tick, model: &SchellingModel) {
///         println!("{tick}: {}/{} happy", model.happy_count(), model.agent_count());
///     }
/// }
/// ```
pub trait ModelObserver {
    /// Called before each step's first activation.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after each step completes, with the tick that just ran.
    fn on_step_end(&mut self, _tick: Tick, _model: &SchellingModel) {}

    /// Called once after the final step of a `run`.
    fn on_run_end(&mut self, _final_tick: Tick, _model: &SchellingModel) {}
}

/// A [`ModelObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl ModelObserver for NoopObserver {}
