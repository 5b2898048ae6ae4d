//! Aggregate performance metrics.
//!
//! Computes the standard uniprocessor scheduling measures from the
//! per-process results of a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Makespan | max(completion) - min(arrival) |
//! | CPU Utilization | total burst / makespan (0 when makespan is 0) |
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleResult, Ticks};

/// Aggregate scheduling performance of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Latest completion minus earliest arrival.
    pub makespan: Ticks,
    /// Sum of all bursts.
    pub total_burst: Ticks,
}

impl AggregateMetrics {
    /// Computes metrics from the results of a run.
    ///
    /// An empty result set yields all-zero metrics.
    pub fn calculate(results: &[ScheduleResult]) -> Self {
        let n = results.len();
        if n == 0 {
            return Self {
                average_turnaround: 0.0,
                average_waiting: 0.0,
                cpu_utilization: 0.0,
                makespan: 0,
                total_burst: 0,
            };
        }

        // Per-process values fit in Ticks; their sums may not
        let total_turnaround: i128 = results.iter().map(|r| r.turnaround as i128).sum();
        let total_waiting: i128 = results.iter().map(|r| r.waiting as i128).sum();
        let total_burst: i128 = results.iter().map(|r| r.burst as i128).sum();
        let total_burst = Ticks::try_from(total_burst).unwrap_or(Ticks::MAX);

        let last_completion = results.iter().map(|r| r.completion).max().unwrap_or(0);
        let first_arrival = results.iter().map(|r| r.arrival).min().unwrap_or(0);
        let makespan = last_completion.saturating_sub(first_arrival);

        let cpu_utilization = if makespan > 0 {
            total_burst as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            average_turnaround: total_turnaround as f64 / n as f64,
            average_waiting: total_waiting as f64 / n as f64,
            cpu_utilization,
            makespan,
            total_burst,
        }
    }
}
