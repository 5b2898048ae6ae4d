//! Shortest Process Next, non-preemptive.
//!
//! At every decision point the ready process with the smallest total burst
//! runs to completion. Equal bursts are dispatched in ascending ID order.

use super::{nonpreemptive, Policy, SimulationOutcome, Simulator};
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::Process;

/// Shortest-process-next simulator.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Simulator, Spn};
///
/// let processes = vec![
///     Process::new("P1", 0, 6),
///     Process::new("P2", 2, 8),
///     Process::new("P3", 4, 7),
///     Process::new("P4", 5, 3),
/// ];
/// let outcome = Spn::new().simulate(&processes).unwrap();
/// assert_eq!(outcome.dispatch_order(), vec!["P1", "P4", "P3", "P2"]);
/// ```
#[derive(Debug, Clone)]
pub struct Spn {
    engine: RuleEngine,
    record_trace: bool,
}

impl Spn {
    /// Creates a simulator with tracing disabled.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::ShortestBurst),
            record_trace: false,
        }
    }

    /// Enables or disables the event trace.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.record_trace = enabled;
        self
    }
}

impl Default for Spn {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator for Spn {
    fn policy(&self) -> Policy {
        Policy::Spn
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome> {
        nonpreemptive::run(Policy::Spn, &self.engine, processes, self.record_trace)
    }
}
