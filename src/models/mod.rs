//! CPU scheduling domain models.
//!
//! Provides the input descriptors and the output records shared by every
//! simulator.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Immutable input `{id, arrival, burst}` |
//! | `ExecutionInterval` | One run segment `[start, end)` |
//! | `Timeline` | Ordered gantt sequence of intervals |
//! | `ScheduleResult` | Per-process completion, turnaround, waiting |
//! | `TraceEvent` | Optional event log of a run |

mod process;
mod result;
mod timeline;
mod trace;

pub use process::{Process, Ticks};
pub use result::ScheduleResult;
pub use timeline::{ExecutionInterval, Timeline};
pub use trace::TraceEvent;
pub(crate) use trace::TraceLog;
