use std::env;

use anyhow::{Context, Result};
use average::Estimate;
use rand::prelude::*;
use sched_sim::{
    Process, Segment, SimReport, Ticks, Timeline, run_fcfs, run_hrrn, run_priority,
    run_round_robin, run_sjf, run_sjf_preemptive,
};

fn main() -> Result<()> {
    let quantum: Ticks = match env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("quantum must be an integer, got {arg:?}"))?,
        None => 2,
    };

    let processes = showcase_processes();

    render(&run_fcfs(&processes)?, "FCFS");
    render(&run_sjf(&processes)?, "SJF");
    render(&run_sjf_preemptive(&processes)?, "SJF Preemptive");
    render(&run_hrrn(&processes)?, "HRRN");
    render(
        &run_round_robin(&processes, quantum).context("round robin rejected the configuration")?,
        "Round Robin",
    );
    render(&run_priority(&processes)?, "Priority");

    compare_policies(quantum)?;

    Ok(())
}

fn showcase_processes() -> Vec<Process> {
    vec![
        Process::new(0, 0, 6).with_priority(1),
        Process::new(1, 2, 3).with_priority(4),
        Process::new(2, 3, 8).with_priority(2),
        // Arrives after the CPU drains, so every policy shows an idle gap.
        Process::new(3, 20, 4).with_priority(5),
    ]
}

fn render(report: &SimReport, name: &str) {
    println!("{name} scheduling");
    println!(
        "{:>4} {:>8} {:>6} {:>9} {:>8} {:>11} {:>11}",
        "id", "arrival", "burst", "priority", "waiting", "turnaround", "completion"
    );
    for r in &report.processes {
        println!(
            "{:>4} {:>8} {:>6} {:>9} {:>8} {:>11} {:>11}",
            r.process.id,
            r.process.arrival_time,
            r.process.burst_time,
            r.process.priority,
            r.waiting_time,
            r.turnaround_time,
            r.completion_time
        );
    }
    println!("{}", gantt(&report.timeline));
    println!(
        "avg waiting {:.2}, avg turnaround {:.2}, idle {} ticks\n",
        avg(report.processes.iter().map(|r| r.waiting_time as f64)),
        avg(report.processes.iter().map(|r| r.turnaround_time as f64)),
        report.timeline.idle_ticks()
    );
}

// One block per segment, width proportional to duration.
fn gantt(timeline: &Timeline) -> String {
    let mut chart = String::from("|");
    for seg in display_segments(timeline) {
        let label = match seg {
            Segment::Run { proc, .. } => format!("P{proc}"),
            Segment::Idle { .. } => String::from("idle"),
        };
        let width = (seg.duration() as usize * 2).max(label.len() + 2);
        chart.push_str(&format!("{label:^width$}|"));
    }
    chart.push_str(&format!(" t={}", timeline.span()));
    chart
}

// Consecutive slices of the same process merge for display only; the raw
// timeline keeps per-slice granularity.
fn display_segments(timeline: &Timeline) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::new();
    for &seg in timeline.segments() {
        if let Segment::Run {
            proc,
            start,
            end: seg_end,
        } = seg
        {
            if let Some(Segment::Run {
                proc: last, end, ..
            }) = merged.last_mut()
            {
                if *last == proc && *end == start {
                    *end = seg_end;
                    continue;
                }
            }
        }
        merged.push(seg);
    }
    merged
}

fn compare_policies(quantum: Ticks) -> Result<()> {
    let processes = bernoulli_processes(200, 0.25, 0.5, 2, 7, 42);
    println!(
        "random workload: {} processes, quantum {quantum}",
        processes.len()
    );

    let runs = [
        ("FCFS", run_fcfs(&processes)?),
        ("SJF", run_sjf(&processes)?),
        ("SJF Preemptive", run_sjf_preemptive(&processes)?),
        ("HRRN", run_hrrn(&processes)?),
        ("Round Robin", run_round_robin(&processes, quantum)?),
        ("Priority", run_priority(&processes)?),
    ];

    for (name, report) in &runs {
        println!(
            "{name:>14}: avg waiting {:7.2}, avg turnaround {:7.2}, idle {:>3} ticks",
            avg(report.processes.iter().map(|r| r.waiting_time as f64)),
            avg(report.processes.iter().map(|r| r.turnaround_time as f64)),
            report.timeline.idle_ticks()
        );
    }

    Ok(())
}

fn bernoulli_processes(
    ticks: u64,
    p_arrival: f64,
    p_short: f64,
    short_ticks: u64,
    long_ticks: u64,
    seed: u64,
) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut processes = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            processes.push(
                Process::new(processes.len(), t, burst).with_priority(rng.random_range(0..=5)),
            );
        }
    }

    processes
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}
