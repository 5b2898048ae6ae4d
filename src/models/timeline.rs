//! Execution timeline (gantt sequence).
//!
//! The timeline is the chronological record of which process held the CPU
//! over which half-open interval. Idle periods are never stored; they are
//! the gaps between consecutive intervals.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Ticks;

/// A single run segment: `process_id` occupied the CPU over `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that ran.
    pub process_id: String,
    /// Start tick (inclusive).
    pub start: Ticks,
    /// End tick (exclusive).
    pub end: Ticks,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: impl Into<String>, start: Ticks, end: Ticks) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Ordered, non-overlapping sequence of execution intervals.
///
/// Preemptive policies may record several intervals for the same process;
/// consecutive intervals of one process are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval. Simulators push in chronological order.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// All intervals in chronological order.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Intervals belonging to one process.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> Ticks {
        self.intervals.iter().map(ExecutionInterval::duration).sum()
    }

    /// `(first start, last end)`, or `None` for an empty timeline.
    pub fn span(&self) -> Option<(Ticks, Ticks)> {
        let first = self.intervals.first()?;
        let last = self.intervals.last()?;
        Some((first.start, last.end))
    }

    /// Idle gaps `(from, to)` between consecutive intervals.
    pub fn idle_gaps(&self) -> Vec<(Ticks, Ticks)> {
        self.intervals
            .windows(2)
            .filter(|w| w[1].start > w[0].end)
            .map(|w| (w[0].end, w[1].start))
            .collect()
    }

    /// Process ids in the order they were first dispatched.
    pub fn dispatch_order(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.intervals
            .iter()
            .filter(|i| seen.insert(i.process_id.as_str()))
            .map(|i| i.process_id.as_str())
            .collect()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval has been recorded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
