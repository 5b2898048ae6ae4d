//! Process descriptor model.
//!
//! A process is a single CPU burst that becomes runnable at its arrival
//! time. Descriptors are immutable inputs: simulators copy what they need
//! into their own bookkeeping and never mutate the caller's set.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete simulation time unit.
///
/// Signed so that negative arrivals can be represented and rejected by
/// validation instead of wrapping silently.
pub type Ticks = i64;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier. Also the final tie-breaker.
    pub id: String,
    /// Tick at which the process becomes runnable.
    pub arrival: Ticks,
    /// Total CPU time the process needs.
    pub burst: Ticks,
}

impl Process {
    /// Creates a new process descriptor.
    pub fn new(id: impl Into<String>, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: Ticks) -> bool {
        self.arrival <= clock
    }

    /// Time since arrival at `clock`.
    ///
    /// Negative before arrival; selection only sees admitted processes.
    #[inline]
    pub fn waited_at(&self, clock: Ticks) -> Ticks {
        clock - self.arrival
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(arrival={}, burst={})", self.id, self.arrival, self.burst)
    }
}
