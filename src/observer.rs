//! Step observer trait for monitoring simulation ticks.

use crate::item::ItemAttributes;

/// Trait for observing simulation steps.
///
/// Implement this to watch items move (debug overlays, frame capture, or
/// stopping the host ticker once everything is at rest). All methods have
/// default no-op implementations.
pub trait StepObserver {
    /// Called after one spring has been stepped, with its new attributes.
    fn on_spring_stepped(&mut self, _attributes: &ItemAttributes) {}

    /// Called once every spring has been stepped.
    fn on_step_complete(&mut self, _spring_count: usize) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
