//! Per-process scheduling result.

use serde::{Deserialize, Serialize};

use super::{Process, Ticks};

/// Outcome for a single process.
///
/// `turnaround = completion - arrival` and `waiting = turnaround - burst`.
/// A correct simulation always yields `waiting >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Process identifier.
    pub process_id: String,
    /// Arrival tick (copied from the descriptor).
    pub arrival: Ticks,
    /// Burst length (copied from the descriptor).
    pub burst: Ticks,
    /// Tick at which the last interval of the process ended.
    pub completion: Ticks,
    /// Time from arrival to completion.
    pub turnaround: Ticks,
    /// Time spent runnable but not running.
    pub waiting: Ticks,
}

impl ScheduleResult {
    /// Derives the result for `process` completing at `completion`.
    pub fn from_completion(process: &Process, completion: Ticks) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            process_id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            completion,
            turnaround,
            waiting: turnaround - process.burst,
        }
    }
}
