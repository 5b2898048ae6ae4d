//! Uniprocessor CPU scheduling simulator.
//!
//! Reproduces the exact timeline a scheduler would produce for a fixed,
//! fully-known set of processes under three classic policies, and derives
//! per-process and aggregate metrics from it.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionInterval`, `Timeline`,
//!   `ScheduleResult`, `TraceEvent`
//! - **`validation`**: Input integrity checks (empty input, duplicate IDs,
//!   non-positive bursts, negative arrivals)
//! - **`dispatching`**: Selection rules and the rule engine used by the
//!   non-preemptive policies
//! - **`scheduler`**: `Spn`, `Srn` and `Hrrn` simulators, `AggregateMetrics`,
//!   and multi-policy comparison
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{Policy, SimulationRequest};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 6),
//!     Process::new("P2", 2, 8),
//!     Process::new("P3", 4, 7),
//!     Process::new("P4", 5, 3),
//! ];
//! let comparison = SimulationRequest::new(processes).run().unwrap();
//! let srn = comparison.report(Policy::Srn).unwrap();
//! assert_eq!(srn.outcome.metrics.makespan, 24);
//! ```
//!
//! # Scope
//!
//! The crate consumes process descriptors and produces structured results.
//! Input parsing, rendering and output formats belong to the caller.
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimError};
