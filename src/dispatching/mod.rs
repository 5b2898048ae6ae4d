//! Selection rules and rule engine for non-preemptive dispatching.
//!
//! A selection rule orders two ready processes at a decision point. The
//! rule engine chains rules sequentially and falls back to the process ID,
//! so every decision is reproducible.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, DispatchContext, RuleEngine};
//! use cpu_schedule::models::Process;
//!
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//! let ready = [Process::new("P2", 2, 8), Process::new("P4", 5, 3)];
//! let ready: Vec<&Process> = ready.iter().collect();
//!
//! let best = engine.select_best(&ready, &DispatchContext::at_time(6));
//! assert_eq!(best, Some(1));
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems", Ch. 9.2
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Score returned by a selection rule, for decision logs.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A selection rule that orders ready processes.
///
/// # Ordering Convention
/// `compare(a, b)` returns `Less` when `a` should be dispatched before `b`.
/// Comparisons must be exact; `score` is only a lossy view for display.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPN", "HRRN").
    fn name(&self) -> &'static str;

    /// Orders two ready processes at the current decision point.
    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering;

    /// Score of a process, lower = higher priority.
    fn score(&self, process: &Process, context: &DispatchContext) -> RuleScore;
}
