//! Execution trace events.
//!
//! An optional, chronological log of what the simulated scheduler did.
//! Recording it never changes the timeline or results.

use serde::{Deserialize, Serialize};

use super::Ticks;

/// A scheduler event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// Process entered the ready set.
    Arrived { time: Ticks, process_id: String },
    /// Process started or resumed on the CPU.
    Dispatched {
        time: Ticks,
        process_id: String,
        remaining: Ticks,
    },
    /// Process was taken off the CPU before finishing.
    Preempted {
        time: Ticks,
        process_id: String,
        remaining: Ticks,
    },
    /// Process finished its burst.
    Completed { time: Ticks, process_id: String },
    /// CPU had nothing to run between `from` and `to`.
    Idle { from: Ticks, to: Ticks },
}

impl TraceEvent {
    /// Tick at which the event happened.
    pub fn time(&self) -> Ticks {
        match self {
            Self::Arrived { time, .. }
            | Self::Dispatched { time, .. }
            | Self::Preempted { time, .. }
            | Self::Completed { time, .. } => *time,
            Self::Idle { from, .. } => *from,
        }
    }

    /// Process the event concerns, if any.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Self::Arrived { process_id, .. }
            | Self::Dispatched { process_id, .. }
            | Self::Preempted { process_id, .. }
            | Self::Completed { process_id, .. } => Some(process_id),
            Self::Idle { .. } => None,
        }
    }
}

/// Event sink used by simulators. Disabled traces drop every event.
#[derive(Debug, Clone, Default)]
pub(crate) struct TraceLog {
    enabled: bool,
    events: Vec<TraceEvent>,
}

impl TraceLog {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            events: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, event: TraceEvent) {
        if self.enabled {
            self.events.push(event);
        }
    }

    pub(crate) fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}
