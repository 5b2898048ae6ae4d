//! Highest Response Ratio Next, non-preemptive.
//!
//! Selects the ready process maximizing `(waiting + burst) / burst`.
//! Long waits raise a process's ratio, so long jobs cannot starve the way
//! they can under SPN.

use super::{nonpreemptive, Policy, SimulationOutcome, Simulator};
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::Process;

/// Highest-response-ratio-next simulator.
#[derive(Debug, Clone)]
pub struct Hrrn {
    engine: RuleEngine,
    record_trace: bool,
}

impl Hrrn {
    /// Creates a simulator with tracing disabled.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::HighestResponseRatio),
            record_trace: false,
        }
    }

    /// Enables or disables the event trace.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.record_trace = enabled;
        self
    }
}

impl Default for Hrrn {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator for Hrrn {
    fn policy(&self) -> Policy {
        Policy::Hrrn
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome> {
        nonpreemptive::run(Policy::Hrrn, &self.engine, processes, self.record_trace)
    }
}
