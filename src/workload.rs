//! Random workload generation.
//!
//! Produces valid process sets for demos, benchmarks and property tests.
//! Arrivals follow a Bernoulli process: at every tick a new process arrives
//! with probability `p_arrival`. Bursts are uniform in
//! `min_burst..=max_burst`. Generation is fully determined by the seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Process, Ticks};

/// Configurable generator of random process sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of ticks over which arrivals are drawn.
    pub ticks: Ticks,
    /// Arrival probability per tick (0.0..=1.0).
    pub p_arrival: f64,
    /// Smallest burst (clamped to at least 1).
    pub min_burst: Ticks,
    /// Largest burst.
    pub max_burst: Ticks,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            ticks: 20,
            p_arrival: 0.3,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrival horizon.
    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.p_arrival = p;
        self
    }

    /// Sets the burst range (inclusive).
    pub fn with_burst_range(mut self, min_burst: Ticks, max_burst: Ticks) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates a process set with IDs `P1..Pn` in arrival order.
    ///
    /// Always returns at least one process: if no tick produced an arrival,
    /// a single process arriving at 0 is emitted.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);
        let p_arrival = self.p_arrival.clamp(0.0, 1.0);

        let mut processes = Vec::new();
        for t in 0..self.ticks.max(0) {
            if rng.random::<f64>() < p_arrival {
                let burst = rng.random_range(min_burst..=max_burst);
                processes.push(Process::new(format!("P{}", processes.len() + 1), t, burst));
            }
        }

        if processes.is_empty() {
            let burst = rng.random_range(min_burst..=max_burst);
            processes.push(Process::new("P1", 0, burst));
        }

        processes
    }
}
