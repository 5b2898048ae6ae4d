//! Shared run-to-completion driver for SPN and HRRN.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= clock` into the ready set.
//! 2. If the ready set is empty, jump the clock to the next arrival.
//! 3. Select the best ready process with the rule engine.
//! 4. Run it to completion as one interval, then repeat.
//!
//! # Complexity
//! O(n^2) rule comparisons for n processes.

use log::{debug, log_enabled, trace, Level};
use std::collections::HashMap;

use super::arrivals::ArrivalQueue;
use super::{Policy, SimulationOutcome};
use crate::dispatching::{DispatchContext, RuleEngine};
use crate::error::{Result, SimError};
use crate::models::{ExecutionInterval, Process, Ticks, Timeline, TraceEvent, TraceLog};
use crate::validation::validate_processes;

/// Simulates a non-preemptive policy whose selection is `engine`.
pub(crate) fn run(
    policy: Policy,
    engine: &RuleEngine,
    processes: &[Process],
    record_trace: bool,
) -> Result<SimulationOutcome> {
    validate_processes(processes)?;

    let mut arrivals = ArrivalQueue::new(processes);
    let mut ready: Vec<&Process> = Vec::new();
    let mut completions: HashMap<&str, Ticks> = HashMap::with_capacity(processes.len());
    let mut timeline = Timeline::new();
    let mut events = TraceLog::new(record_trace);
    let mut clock: Ticks = 0;

    admit(&mut arrivals, &mut ready, &mut events, clock);

    while completions.len() < processes.len() {
        if ready.is_empty() {
            let next = arrivals.next_arrival().ok_or_else(|| {
                SimError::invariant(policy, "ready set empty with no future arrivals")
            })?;
            trace!("{policy}: CPU idle {clock}..{next}");
            events.record(TraceEvent::Idle {
                from: clock,
                to: next,
            });
            clock = next;
            admit(&mut arrivals, &mut ready, &mut events, clock);
            continue;
        }

        let context = DispatchContext::at_time(clock);
        let index = engine.select_best(&ready, &context).ok_or_else(|| {
            SimError::invariant(policy, format!("no selection from {} ready processes", ready.len()))
        })?;
        if log_enabled!(Level::Trace) {
            for p in &ready {
                trace!("{policy}: {} scores {:?} at {clock}", p.id, engine.evaluate(p, &context));
            }
        }
        let current = ready.swap_remove(index);

        let end = clock + current.burst;
        debug!("{policy}: dispatch {} at {clock}, runs until {end}", current.id);
        events.record(TraceEvent::Dispatched {
            time: clock,
            process_id: current.id.clone(),
            remaining: current.burst,
        });
        timeline.push(ExecutionInterval::new(&current.id, clock, end));
        clock = end;

        // Arrivals during the run join the ready set before the next decision
        admit(&mut arrivals, &mut ready, &mut events, clock);
        events.record(TraceEvent::Completed {
            time: clock,
            process_id: current.id.clone(),
        });
        completions.insert(current.id.as_str(), clock);
    }

    SimulationOutcome::assemble(policy, processes, &completions, timeline, events.into_events())
}

fn admit<'a>(
    arrivals: &mut ArrivalQueue<'a>,
    ready: &mut Vec<&'a Process>,
    events: &mut TraceLog,
    clock: Ticks,
) {
    for &p in arrivals.admit_until(clock) {
        trace!("admit {} (arrived {})", p.id, p.arrival);
        events.record(TraceEvent::Arrived {
            time: p.arrival,
            process_id: p.id.clone(),
        });
        ready.push(p);
    }
}
