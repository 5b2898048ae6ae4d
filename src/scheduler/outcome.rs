//! Simulation outcome and its consistency check.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{AggregateMetrics, Policy};
use crate::error::{Result, SimError};
use crate::models::{Process, ScheduleResult, Ticks, Timeline, TraceEvent};

/// Everything one simulator run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Per-process results, sorted by process ID.
    pub results: Vec<ScheduleResult>,
    /// Chronological gantt sequence.
    pub timeline: Timeline,
    /// Aggregate metrics derived from `results`.
    pub metrics: AggregateMetrics,
    /// Event log; empty unless tracing was enabled.
    pub trace: Vec<TraceEvent>,
}

impl SimulationOutcome {
    /// Builds the outcome from raw simulator state and verifies it.
    pub(crate) fn assemble(
        policy: Policy,
        processes: &[Process],
        completions: &HashMap<&str, Ticks>,
        timeline: Timeline,
        trace: Vec<TraceEvent>,
    ) -> Result<Self> {
        let mut results = Vec::with_capacity(processes.len());
        for p in processes {
            let completion = completions.get(p.id.as_str()).copied().ok_or_else(|| {
                SimError::invariant(policy, format!("process '{}' never completed", p.id))
            })?;
            results.push(ScheduleResult::from_completion(p, completion));
        }
        results.sort_by(|a, b| a.process_id.cmp(&b.process_id));

        verify(policy, processes, &results, &timeline)?;

        let metrics = AggregateMetrics::calculate(&results);
        Ok(Self {
            policy,
            results,
            timeline,
            metrics,
            trace,
        })
    }

    /// Result for one process.
    pub fn result_for(&self, process_id: &str) -> Option<&ScheduleResult> {
        self.results.iter().find(|r| r.process_id == process_id)
    }

    /// Process IDs in order of first dispatch.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.timeline.dispatch_order()
    }

    /// Process IDs in order of completion (ties by ID).
    pub fn completion_order(&self) -> Vec<&str> {
        let mut ordered: Vec<&ScheduleResult> = self.results.iter().collect();
        ordered.sort_by(|a, b| {
            a.completion
                .cmp(&b.completion)
                .then_with(|| a.process_id.cmp(&b.process_id))
        });
        ordered.iter().map(|r| r.process_id.as_str()).collect()
    }
}

/// Checks the timeline and results against the process set.
///
/// - every interval has positive length and names a known process
/// - intervals are ordered and pairwise non-overlapping
/// - no process runs before it arrives
/// - the intervals of each process sum to its burst
/// - each completion equals the end of the process's last interval
/// - `waiting >= 0`
fn verify(
    policy: Policy,
    processes: &[Process],
    results: &[ScheduleResult],
    timeline: &Timeline,
) -> Result<()> {
    let by_id: HashMap<&str, &Process> = processes.iter().map(|p| (p.id.as_str(), p)).collect();
    let mut executed: HashMap<&str, Ticks> = HashMap::new();
    let mut last_end: HashMap<&str, Ticks> = HashMap::new();
    let mut previous_end: Option<Ticks> = None;

    for interval in timeline {
        let id = interval.process_id.as_str();
        let process = by_id.get(id).ok_or_else(|| {
            SimError::invariant(policy, format!("interval for unknown process '{id}'"))
        })?;
        if interval.end <= interval.start {
            return Err(SimError::invariant(
                policy,
                format!("empty interval [{}, {}) for '{id}'", interval.start, interval.end),
            ));
        }
        if previous_end.is_some_and(|end| interval.start < end) {
            return Err(SimError::invariant(
                policy,
                format!("interval [{}, {}) for '{id}' overlaps its predecessor", interval.start, interval.end),
            ));
        }
        if interval.start < process.arrival {
            return Err(SimError::invariant(
                policy,
                format!("'{id}' ran at {} before arriving at {}", interval.start, process.arrival),
            ));
        }
        previous_end = Some(interval.end);
        *executed.entry(id).or_insert(0) += interval.duration();
        last_end.insert(id, interval.end);
    }

    for r in results {
        let id = r.process_id.as_str();
        let ran = executed.get(id).copied().unwrap_or(0);
        if ran != r.burst {
            return Err(SimError::invariant(
                policy,
                format!("'{id}' ran {ran} ticks, burst is {}", r.burst),
            ));
        }
        if last_end.get(id) != Some(&r.completion) {
            return Err(SimError::invariant(
                policy,
                format!("'{id}' completion {} does not match its last interval", r.completion),
            ));
        }
        if r.waiting < 0 {
            return Err(SimError::invariant(
                policy,
                format!("'{id}' has negative waiting time {}", r.waiting),
            ));
        }
    }

    Ok(())
}
