//! Step observer trait for monitoring lattice simulation progress.

/// Trait for observing simulation steps and pruning passes.
///
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each full relaxation pass over the constraint list.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called after every particle has been clamped into the bounds.
    fn on_contain(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}

    /// Called after a pruning pass with the number of constraints it removed.
    fn on_prune(&mut self, _deactivated: usize) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
