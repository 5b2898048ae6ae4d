//! Arrival cursor over the immutable process set.

use crate::models::{Process, Ticks};

/// Processes sorted by `(arrival, id)` with a cursor marking the first one
/// not yet admitted.
#[derive(Debug)]
pub(crate) struct ArrivalQueue<'a> {
    pending: Vec<&'a Process>,
    cursor: usize,
}

impl<'a> ArrivalQueue<'a> {
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        let mut pending: Vec<&Process> = processes.iter().collect();
        pending.sort_by(|a, b| a.arrival.cmp(&b.arrival).then_with(|| a.id.cmp(&b.id)));
        Self { pending, cursor: 0 }
    }

    /// Admits every process with `arrival <= clock` not yet admitted.
    pub(crate) fn admit_until(&mut self, clock: Ticks) -> &[&'a Process] {
        let start = self.cursor;
        // Contiguous, since pending is sorted by arrival
        let count = self.pending[start..]
            .iter()
            .take_while(|p| p.has_arrived(clock))
            .count();
        self.cursor += count;
        &self.pending[start..self.cursor]
    }

    /// Arrival of the next process not yet admitted.
    pub(crate) fn next_arrival(&self) -> Option<Ticks> {
        self.pending.get(self.cursor).map(|p| p.arrival)
    }
}
