//! Runs every policy on the classic four-process scenario and on a seeded
//! random workload, printing the gantt sequence and per-process table.
//!
//! ```text
//! cargo run --example compare
//! ```

use cpu_schedule::models::Process;
use cpu_schedule::scheduler::{Comparison, SimulationRequest};
use cpu_schedule::workload::WorkloadGenerator;

fn main() -> cpu_schedule::Result<()> {
    let processes = vec![
        Process::new("P1", 0, 6),
        Process::new("P2", 2, 8),
        Process::new("P3", 4, 7),
        Process::new("P4", 5, 3),
    ];
    println!("=== Fixed scenario ===\n");
    print_comparison(&SimulationRequest::new(processes).run()?);

    let random = WorkloadGenerator::new()
        .with_ticks(15)
        .with_arrival_probability(0.4)
        .with_burst_range(1, 8)
        .with_seed(2024)
        .generate();
    println!("=== Random workload (seed 2024, {} processes) ===\n", random.len());
    print_comparison(&SimulationRequest::new(random).run()?);

    Ok(())
}

fn print_comparison(comparison: &Comparison) {
    for report in &comparison.reports {
        let outcome = &report.outcome;
        println!("--- {} ---", report.policy);

        let gantt: Vec<String> = outcome
            .timeline
            .intervals()
            .iter()
            .map(|i| format!("{}[{}-{})", i.process_id, i.start, i.end))
            .collect();
        println!("Gantt: {}", gantt.join(" "));

        println!("PID\tAT\tBT\tCT\tTAT\tWT");
        for r in &outcome.results {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                r.process_id, r.arrival, r.burst, r.completion, r.turnaround, r.waiting
            );
        }
        println!(
            "Avg TAT: {:.2}, Avg WT: {:.2}, CPU Utilization: {:.2}%\n",
            outcome.metrics.average_turnaround,
            outcome.metrics.average_waiting,
            outcome.metrics.cpu_utilization * 100.0
        );
    }

    if let (Some(wt), Some(tat)) = (
        comparison.best_by_average_waiting(),
        comparison.best_by_average_turnaround(),
    ) {
        println!("Best average waiting: {wt}; best average turnaround: {tat}\n");
    }
}
