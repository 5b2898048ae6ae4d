//! Dispatch context for selection rule evaluation.

use crate::models::Ticks;

/// Simulation state passed to selection rules at a decision point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation clock.
    pub clock: Ticks,
}

impl DispatchContext {
    /// Creates a context at the given tick.
    pub fn at_time(clock: Ticks) -> Self {
        Self { clock }
    }
}
