//! Scheduling simulators and metrics.
//!
//! Three independent discrete-event simulators share the same input
//! (a process set) and output (`SimulationOutcome`):
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | SPN | no | shortest burst, then ID |
//! | SRN | yes, at arrivals | least remaining, then arrival, then ID |
//! | HRRN | no | highest `(waiting + burst) / burst`, then ID |
//!
//! Every run validates its input first and verifies its own outcome
//! before returning. Runs are pure functions of their input.
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod arrivals;
mod compare;
mod hrrn;
mod metrics;
mod nonpreemptive;
mod outcome;
mod spn;
mod srn;

pub use compare::{compare, Comparison, PolicyReport, SimulationRequest};
pub use hrrn::Hrrn;
pub use metrics::AggregateMetrics;
pub use outcome::SimulationOutcome;
pub use spn::Spn;
pub use srn::Srn;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParsePolicyError, Result};
use crate::models::Process;

/// A uniprocessor scheduling simulator.
pub trait Simulator: Send + Sync + fmt::Debug {
    /// Policy implemented by this simulator.
    fn policy(&self) -> Policy;

    /// Validates `processes` and simulates them to completion.
    fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome>;
}

/// Supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// Shortest Process Next.
    Spn,
    /// Shortest Remaining Time Next (SRTF).
    Srn,
    /// Highest Response Ratio Next.
    Hrrn,
}

impl Policy {
    /// All policies, in reporting order.
    pub const ALL: [Policy; 3] = [Policy::Spn, Policy::Srn, Policy::Hrrn];

    /// Short name (e.g., "SPN").
    pub fn name(self) -> &'static str {
        match self {
            Self::Spn => "SPN",
            Self::Srn => "SRN",
            Self::Hrrn => "HRRN",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Self::Srn)
    }

    /// Builds the simulator for this policy.
    pub fn simulator(self, record_trace: bool) -> Box<dyn Simulator> {
        match self {
            Self::Spn => Box::new(Spn::new().with_trace(record_trace)),
            Self::Srn => Box::new(Srn::new().with_trace(record_trace)),
            Self::Hrrn => Box::new(Hrrn::new().with_trace(record_trace)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spn" | "sjf" => Ok(Self::Spn),
            "srn" | "srtf" | "srt" => Ok(Self::Srn),
            "hrrn" => Ok(Self::Hrrn),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Spn.to_string(), "SPN");
        assert_eq!(Policy::Srn.to_string(), "SRN");
        assert_eq!(Policy::Hrrn.to_string(), "HRRN");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("spn".parse::<Policy>().unwrap(), Policy::Spn);
        assert_eq!("SRTF".parse::<Policy>().unwrap(), Policy::Srn);
        assert_eq!(" Hrrn ".parse::<Policy>().unwrap(), Policy::Hrrn);
        let err = "rr".parse::<Policy>().unwrap_err();
        assert_eq!(err.to_string(), "unknown scheduling policy: 'rr'");
    }

    #[test]
    fn test_only_srn_preempts() {
        assert!(!Policy::Spn.is_preemptive());
        assert!(Policy::Srn.is_preemptive());
        assert!(!Policy::Hrrn.is_preemptive());
    }

    #[test]
    fn test_simulator_factory() {
        for policy in Policy::ALL {
            assert_eq!(policy.simulator(false).policy(), policy);
        }
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&Policy::Hrrn).unwrap();
        assert_eq!(json, "\"Hrrn\"");
        let back: Policy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Policy::Hrrn);
    }
}
