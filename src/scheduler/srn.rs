//! Shortest Remaining Time Next (SRTF), preemptive.
//!
//! # Algorithm
//!
//! The eligible pool is a min-heap keyed by `(remaining, arrival, id)`.
//! The selected process runs until it completes or until the next arrival,
//! whichever comes first. At an arrival the running segment is closed, the
//! new processes are admitted and the interrupted process re-enters the pool
//! with its reduced remaining time. A process that finishes exactly at an
//! arrival tick completes before the arrival is admitted.
//!
//! Segments are never merged: a process that keeps the CPU across an
//! arrival contributes one interval per segment.
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9.2: Shortest Remaining Time

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::arrivals::ArrivalQueue;
use super::{Policy, SimulationOutcome, Simulator};
use crate::error::Result;
use crate::models::{ExecutionInterval, Process, Ticks, Timeline, TraceEvent, TraceLog};
use crate::validation::validate_processes;

/// Preemptive shortest-remaining-time simulator.
#[derive(Debug, Clone, Default)]
pub struct Srn {
    record_trace: bool,
}

impl Srn {
    /// Creates a simulator with tracing disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the event trace.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.record_trace = enabled;
        self
    }
}

impl Simulator for Srn {
    fn policy(&self) -> Policy {
        Policy::Srn
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome> {
        validate_processes(processes)?;

        let mut arrivals = ArrivalQueue::new(processes);
        let mut pool: BinaryHeap<PoolEntry<'_>> = BinaryHeap::new();
        let mut completions: HashMap<&str, Ticks> = HashMap::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut events = TraceLog::new(self.record_trace);
        let mut running: Option<&str> = None;
        let mut clock: Ticks = 0;

        admit(&mut arrivals, &mut pool, &mut events, clock);

        loop {
            let Some(entry) = pool.pop() else {
                match arrivals.next_arrival() {
                    Some(next) => {
                        trace!("SRN: CPU idle {clock}..{next}");
                        events.record(TraceEvent::Idle {
                            from: clock,
                            to: next,
                        });
                        clock = next;
                        admit(&mut arrivals, &mut pool, &mut events, clock);
                        continue;
                    }
                    None => break,
                }
            };

            let process = entry.process;
            let id = process.id.as_str();
            if running != Some(id) {
                debug!("SRN: dispatch {id} at {clock} (remaining {})", entry.remaining);
                events.record(TraceEvent::Dispatched {
                    time: clock,
                    process_id: process.id.clone(),
                    remaining: entry.remaining,
                });
                running = Some(id);
            }

            let finish = clock + entry.remaining;
            match arrivals.next_arrival() {
                Some(next) if next < finish => {
                    timeline.push(ExecutionInterval::new(id, clock, next));
                    let remaining = entry.remaining - (next - clock);
                    clock = next;
                    admit(&mut arrivals, &mut pool, &mut events, clock);
                    pool.push(PoolEntry { remaining, process });

                    let keeps_cpu = pool.peek().is_some_and(|top| top.process.id == id);
                    if !keeps_cpu {
                        debug!("SRN: preempt {id} at {clock} (remaining {remaining})");
                        events.record(TraceEvent::Preempted {
                            time: clock,
                            process_id: process.id.clone(),
                            remaining,
                        });
                        running = None;
                    }
                }
                _ => {
                    timeline.push(ExecutionInterval::new(id, clock, finish));
                    clock = finish;
                    debug!("SRN: complete {id} at {clock}");
                    events.record(TraceEvent::Completed {
                        time: clock,
                        process_id: process.id.clone(),
                    });
                    completions.insert(id, clock);
                    running = None;
                    admit(&mut arrivals, &mut pool, &mut events, clock);
                }
            }
        }

        SimulationOutcome::assemble(
            Policy::Srn,
            processes,
            &completions,
            timeline,
            events.into_events(),
        )
    }
}

/// Pool entry; `BinaryHeap` pops the greatest, so ordering is reversed to
/// surface the least `(remaining, arrival, id)` first.
#[derive(Debug)]
struct PoolEntry<'a> {
    remaining: Ticks,
    process: &'a Process,
}

impl PoolEntry<'_> {
    fn key(&self) -> (Ticks, Ticks, &str) {
        (self.remaining, self.process.arrival, self.process.id.as_str())
    }
}

impl PartialEq for PoolEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PoolEntry<'_> {}

impl Ord for PoolEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for PoolEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn admit<'a>(
    arrivals: &mut ArrivalQueue<'a>,
    pool: &mut BinaryHeap<PoolEntry<'a>>,
    events: &mut TraceLog,
    clock: Ticks,
) {
    for &process in arrivals.admit_until(clock) {
        trace!("SRN: admit {} (arrived {})", process.id, process.arrival);
        events.record(TraceEvent::Arrived {
            time: process.arrival,
            process_id: process.id.clone(),
        });
        pool.push(PoolEntry {
            remaining: process.burst,
            process,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    fn fixture() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 6),
            Process::new("P2", 2, 8),
            Process::new("P3", 4, 7),
            Process::new("P4", 5, 3),
        ]
    }

    fn segments(outcome: &SimulationOutcome) -> Vec<(&str, Ticks, Ticks)> {
        outcome
            .timeline
            .intervals()
            .iter()
            .map(|i| (i.process_id.as_str(), i.start, i.end))
            .collect()
    }

    #[test]
    fn test_fixture_timeline() {
        let outcome = Srn::new().simulate(&fixture()).unwrap();
        assert_eq!(
            segments(&outcome),
            vec![
                ("P1", 0, 2),
                ("P1", 2, 4),
                ("P1", 4, 5),
                ("P1", 5, 6),
                ("P4", 6, 9),
                ("P3", 9, 16),
                ("P2", 16, 24),
            ]
        );
        assert_eq!(outcome.completion_order(), vec!["P1", "P4", "P3", "P2"]);
    }

    #[test]
    fn test_preemption_by_shorter_arrival() {
        let processes = vec![Process::new("A", 0, 8), Process::new("B", 1, 2)];
        let outcome = Srn::new().simulate(&processes).unwrap();
        assert_eq!(segments(&outcome), vec![("A", 0, 1), ("B", 1, 3), ("A", 3, 10)]);
        assert_eq!(outcome.result_for("A").unwrap().completion, 10);
        assert_eq!(outcome.result_for("B").unwrap().waiting, 0);
    }

    #[test]
    fn test_equal_remaining_prefers_earlier_arrival() {
        // At t=2, A has 3 left and B needs 3: A arrived first and keeps the CPU
        let processes = vec![Process::new("B", 2, 3), Process::new("A", 0, 5)];
        let outcome = Srn::new().simulate(&processes).unwrap();
        assert_eq!(segments(&outcome), vec![("A", 0, 2), ("A", 2, 5), ("B", 5, 8)]);
    }

    #[test]
    fn test_equal_remaining_and_arrival_prefers_smaller_id() {
        let processes = vec![Process::new("Q", 0, 4), Process::new("P", 0, 4)];
        let outcome = Srn::new().simulate(&processes).unwrap();
        assert_eq!(segments(&outcome), vec![("P", 0, 4), ("Q", 4, 8)]);
    }

    #[test]
    fn test_completion_at_arrival_tick() {
        // A finishes exactly when B arrives: no zero-length segment
        let processes = vec![Process::new("A", 0, 3), Process::new("B", 3, 1)];
        let outcome = Srn::new().simulate(&processes).unwrap();
        assert_eq!(segments(&outcome), vec![("A", 0, 3), ("B", 3, 4)]);
    }

    #[test]
    fn test_idle_gap_then_resume() {
        let processes = vec![Process::new("A", 0, 2), Process::new("B", 5, 2)];
        let outcome = Srn::new().with_trace(true).simulate(&processes).unwrap();
        assert_eq!(segments(&outcome), vec![("A", 0, 2), ("B", 5, 7)]);
        assert_eq!(outcome.timeline.idle_gaps(), vec![(2, 5)]);
        assert!(outcome
            .trace
            .contains(&TraceEvent::Idle { from: 2, to: 5 }));
    }

    #[test]
    fn test_first_arrival_after_zero() {
        let processes = vec![Process::new("A", 4, 3)];
        let outcome = Srn::new().simulate(&processes).unwrap();
        assert_eq!(segments(&outcome), vec![("A", 4, 7)]);
        assert_eq!(outcome.metrics.makespan, 3);
    }

    #[test]
    fn test_simultaneous_arrivals_admitted_together() {
        let processes = vec![
            Process::new("A", 0, 10),
            Process::new("C", 3, 4),
            Process::new("B", 3, 2),
        ];
        let outcome = Srn::new().simulate(&processes).unwrap();
        assert_eq!(
            segments(&outcome),
            vec![("A", 0, 3), ("B", 3, 5), ("C", 5, 9), ("A", 9, 16)]
        );
    }

    #[test]
    fn test_trace_events() {
        let processes = vec![Process::new("A", 0, 8), Process::new("B", 1, 2)];
        let outcome = Srn::new().with_trace(true).simulate(&processes).unwrap();
        assert_eq!(
            outcome.trace,
            vec![
                TraceEvent::Arrived { time: 0, process_id: "A".into() },
                TraceEvent::Dispatched { time: 0, process_id: "A".into(), remaining: 8 },
                TraceEvent::Arrived { time: 1, process_id: "B".into() },
                TraceEvent::Preempted { time: 1, process_id: "A".into(), remaining: 7 },
                TraceEvent::Dispatched { time: 1, process_id: "B".into(), remaining: 2 },
                TraceEvent::Completed { time: 3, process_id: "B".into() },
                TraceEvent::Dispatched { time: 3, process_id: "A".into(), remaining: 7 },
                TraceEvent::Completed { time: 10, process_id: "A".into() },
            ]
        );
    }

    #[test]
    fn test_no_preempt_event_when_cpu_kept() {
        let outcome = Srn::new().with_trace(true).simulate(&fixture()).unwrap();
        assert!(!outcome
            .trace
            .iter()
            .any(|e| matches!(e, TraceEvent::Preempted { .. })));
        let dispatches = outcome
            .trace
            .iter()
            .filter(|e| matches!(e, TraceEvent::Dispatched { .. }))
            .count();
        assert_eq!(dispatches, 4);
    }

    #[test]
    fn test_trace_disabled_by_default() {
        let outcome = Srn::new().simulate(&fixture()).unwrap();
        assert!(outcome.trace.is_empty());
    }

    #[test]
    fn test_keeps_cpu_across_simultaneous_arrivals() {
        // At t=2, A has 3 left; B ties on remaining but arrived later, C is longer
        let processes = vec![
            Process::new("A", 0, 5),
            Process::new("B", 2, 3),
            Process::new("C", 2, 4),
        ];
        let outcome = Srn::new().with_trace(true).simulate(&processes).unwrap();
        assert_eq!(
            segments(&outcome),
            vec![("A", 0, 2), ("A", 2, 5), ("B", 5, 8), ("C", 8, 12)]
        );
        assert!(!outcome
            .trace
            .iter()
            .any(|e| matches!(e, TraceEvent::Preempted { .. })));
        let dispatched: Vec<&str> = outcome
            .trace
            .iter()
            .filter(|e| matches!(e, TraceEvent::Dispatched { .. }))
            .filter_map(TraceEvent::process_id)
            .collect();
        assert_eq!(dispatched, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_completion_past_tick_range_rejected() {
        let processes = vec![Process::new("A", 0, Ticks::MAX), Process::new("B", 1, 1)];
        let err = Srn::new().simulate(&processes).unwrap_err();
        assert!(matches!(err, SimError::InvalidInput(_)));
    }

    #[test]
    fn test_long_burst_at_tick_range_limit() {
        let processes = vec![Process::new("A", 0, Ticks::MAX - 2), Process::new("B", 1, 1)];
        let outcome = Srn::new().simulate(&processes).unwrap();
        assert_eq!(
            segments(&outcome),
            vec![("A", 0, 1), ("B", 1, 2), ("A", 2, Ticks::MAX - 1)]
        );
    }
}
