//! Side-by-side policy comparison over one process set.

use log::info;
use serde::{Deserialize, Serialize};

use super::{Policy, SimulationOutcome};
use crate::error::Result;
use crate::models::Process;

/// Input container for a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Policies to run, in reporting order.
    pub policies: Vec<Policy>,
    /// Whether outcomes carry an event trace.
    pub record_trace: bool,
}

impl SimulationRequest {
    /// Creates a request running every policy without tracing.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            policies: Policy::ALL.to_vec(),
            record_trace: false,
        }
    }

    /// Restricts the run to the given policies (duplicates are dropped).
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = Policy>) -> Self {
        self.policies.clear();
        for policy in policies {
            if !self.policies.contains(&policy) {
                self.policies.push(policy);
            }
        }
        self
    }

    /// Enables or disables event traces.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.record_trace = enabled;
        self
    }

    /// Runs every requested policy on the same process set.
    ///
    /// Fails on the first error; invalid input is reported before any
    /// policy produces output.
    pub fn run(&self) -> Result<Comparison> {
        let mut reports = Vec::with_capacity(self.policies.len());
        for &policy in &self.policies {
            let outcome = policy.simulator(self.record_trace).simulate(&self.processes)?;
            info!(
                "{policy}: avg turnaround {:.2}, avg waiting {:.2}, utilization {:.2}%",
                outcome.metrics.average_turnaround,
                outcome.metrics.average_waiting,
                outcome.metrics.cpu_utilization * 100.0
            );
            reports.push(PolicyReport { policy, outcome });
        }
        Ok(Comparison { reports })
    }
}

/// Runs every policy named by `request`; see [`SimulationRequest::run`].
pub fn compare(request: &SimulationRequest) -> Result<Comparison> {
    request.run()
}

/// Outcome of one policy within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    /// Policy that was run.
    pub policy: Policy,
    /// Its outcome.
    pub outcome: SimulationOutcome,
}

/// Reports for every requested policy, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// One report per policy.
    pub reports: Vec<PolicyReport>,
}

impl Comparison {
    /// Report for one policy.
    pub fn report(&self, policy: Policy) -> Option<&PolicyReport> {
        self.reports.iter().find(|r| r.policy == policy)
    }

    /// Policy with the lowest average waiting time (earliest on ties).
    pub fn best_by_average_waiting(&self) -> Option<Policy> {
        self.best_by(|r| r.outcome.metrics.average_waiting)
    }

    /// Policy with the lowest average turnaround time (earliest on ties).
    pub fn best_by_average_turnaround(&self) -> Option<Policy> {
        self.best_by(|r| r.outcome.metrics.average_turnaround)
    }

    fn best_by(&self, metric: impl Fn(&PolicyReport) -> f64) -> Option<Policy> {
        let mut best: Option<(&PolicyReport, f64)> = None;
        for report in &self.reports {
            let value = metric(report);
            if best.map_or(true, |(_, current)| value < current) {
                best = Some((report, value));
            }
        }
        best.map(|(r, _)| r.policy)
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

    #[test]
    fn test_runs_all_policies_by_default() {
        let comparison = SimulationRequest::new(fixture()).run().unwrap();
        let policies: Vec<Policy> = comparison.reports.iter().map(|r| r.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
    }

    #[test]
    fn test_compare_matches_run() {
        let request = SimulationRequest::new(fixture()).with_policies([Policy::Srn]);
        assert_eq!(compare(&request).unwrap(), request.run().unwrap());
    }

    #[test]
    fn test_with_policies_dedups() {
        let request =
            SimulationRequest::new(fixture()).with_policies([Policy::Hrrn, Policy::Spn, Policy::Hrrn]);
        assert_eq!(request.policies, vec![Policy::Hrrn, Policy::Spn]);
        let comparison = request.run().unwrap();
        assert!(comparison.report(Policy::Srn).is_none());
    }

    #[test]
    fn test_best_policy() {
        // SPN and SRN: avg WT 5.0, avg TAT 11.0; HRRN: 6.5 / 12.5
        let comparison = SimulationRequest::new(fixture()).run().unwrap();
        assert_eq!(comparison.best_by_average_waiting(), Some(Policy::Spn));
        assert_eq!(comparison.best_by_average_turnaround(), Some(Policy::Spn));

        let comparison = SimulationRequest::new(fixture())
            .with_policies([Policy::Hrrn, Policy::Srn])
            .run()
            .unwrap();
        assert_eq!(comparison.best_by_average_waiting(), Some(Policy::Srn));
    }

    #[test]
    fn test_trace_propagates() {
        let comparison = SimulationRequest::new(fixture()).with_trace(true).run().unwrap();
        assert!(comparison.reports.iter().all(|r| !r.outcome.trace.is_empty()));
    }

    #[test]
    fn test_invalid_input_fails() {
        let err = SimulationRequest::new(vec![Process::new("P1", 0, 0)])
            .run()
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_comparison() {
        let comparison = SimulationRequest::new(fixture())
            .with_policies(Vec::new())
            .run()
            .unwrap();
        assert_eq!(comparison.best_by_average_waiting(), None);
    }
}
