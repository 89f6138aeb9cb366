use pretty_assertions::assert_eq;
use sched_sim::{
    Process, ProcId, Segment, SimError, SimReport, Ticks, run_fcfs, run_hrrn, run_priority,
    run_round_robin, run_sjf, run_sjf_preemptive,
};

fn p(id: ProcId, arrival: Ticks, burst: Ticks) -> Process {
    Process::new(id, arrival, burst)
}

// Run segment proc ids with consecutive repeats collapsed; the order in
// which processes got the CPU.
fn run_order(report: &SimReport) -> Vec<ProcId> {
    let mut order = Vec::new();
    for seg in report.timeline.segments() {
        if let Segment::Run { proc, .. } = *seg {
            if order.last() != Some(&proc) {
                order.push(proc);
            }
        }
    }
    order
}

fn completion(report: &SimReport, id: ProcId) -> Ticks {
    report.processes[id].completion_time
}

fn check_invariants(report: &SimReport) {
    let total_burst: Ticks = report
        .processes
        .iter()
        .map(|r| r.process.burst_time)
        .sum();
    assert_eq!(report.timeline.busy_ticks(), total_burst);

    let mut cursor: Ticks = 0;
    let mut prev_idle = false;
    for seg in report.timeline.segments() {
        assert_eq!(seg.start(), cursor, "segments must be contiguous");
        assert!(seg.end() > seg.start(), "segments must be nonempty");
        if let Segment::Run { proc, start, .. } = *seg {
            assert!(
                start >= report.processes[proc].process.arrival_time,
                "process {proc} ran before it arrived"
            );
        }
        if seg.is_idle() {
            assert!(!prev_idle, "two idle segments may not touch");
        }
        prev_idle = seg.is_idle();
        cursor = seg.end();
    }

    for r in &report.processes {
        assert_eq!(
            r.completion_time,
            r.process.arrival_time + r.waiting_time + r.process.burst_time
        );
        assert_eq!(r.turnaround_time, r.completion_time - r.process.arrival_time);
    }
}

#[test]
fn fcfs_reference_metrics() {
    let procs = vec![p(0, 0, 5), p(1, 1, 3)];
    let report = run_fcfs(&procs).unwrap();

    assert_eq!(completion(&report, 0), 5);
    assert_eq!(completion(&report, 1), 8);
    assert_eq!(report.processes[0].waiting_time, 0);
    assert_eq!(report.processes[1].waiting_time, 4);
    check_invariants(&report);
}

#[test]
fn fcfs_idles_until_the_first_arrival() {
    let report = run_fcfs(&[p(0, 2, 3)]).unwrap();

    assert_eq!(
        report.timeline.segments(),
        &[
            Segment::Idle { start: 0, end: 2 },
            Segment::Run {
                proc: 0,
                start: 2,
                end: 5
            },
        ]
    );
    assert_eq!(report.processes[0].waiting_time, 0);
    check_invariants(&report);
}

#[test]
fn sjf_equal_bursts_keep_input_order() {
    let procs = vec![p(0, 0, 4), p(1, 0, 4)];
    let report = run_sjf(&procs).unwrap();

    assert_eq!(run_order(&report), vec![0, 1]);
    check_invariants(&report);
}

#[test]
fn sjf_picks_the_shortest_ready_burst() {
    let procs = vec![p(0, 0, 8), p(1, 1, 4), p(2, 2, 2)];
    let report = run_sjf(&procs).unwrap();

    assert_eq!(run_order(&report), vec![0, 2, 1]);
    assert_eq!(completion(&report, 2), 10);
    assert_eq!(completion(&report, 1), 14);
    check_invariants(&report);
}

#[test]
fn srtf_preempts_when_less_work_arrives() {
    let procs = vec![p(0, 0, 7), p(1, 2, 4)];
    let report = run_sjf_preemptive(&procs).unwrap();

    assert_eq!(completion(&report, 1), 6);
    assert_eq!(completion(&report, 0), 11);
    assert_eq!(run_order(&report), vec![0, 1, 0]);
    check_invariants(&report);
}

#[test]
fn srtf_keeps_per_tick_granularity_in_the_raw_timeline() {
    let report = run_sjf_preemptive(&[p(0, 0, 2)]).unwrap();

    assert_eq!(
        report.timeline.segments(),
        &[
            Segment::Run {
                proc: 0,
                start: 0,
                end: 1
            },
            Segment::Run {
                proc: 0,
                start: 1,
                end: 2
            },
        ]
    );
}

#[test]
fn round_robin_reference_interleaving() {
    let procs = vec![p(0, 0, 5), p(1, 1, 3)];
    let report = run_round_robin(&procs, 2).unwrap();

    assert_eq!(
        report.timeline.segments(),
        &[
            Segment::Run {
                proc: 0,
                start: 0,
                end: 2
            },
            Segment::Run {
                proc: 1,
                start: 2,
                end: 4
            },
            Segment::Run {
                proc: 0,
                start: 4,
                end: 6
            },
            Segment::Run {
                proc: 1,
                start: 6,
                end: 7
            },
            Segment::Run {
                proc: 0,
                start: 7,
                end: 8
            },
        ]
    );
    assert_eq!(completion(&report, 0), 8);
    assert_eq!(completion(&report, 1), 7);
    check_invariants(&report);
}

#[test]
fn round_robin_admits_slice_boundary_arrivals_before_the_requeue() {
    let procs = vec![p(0, 0, 4), p(1, 2, 2)];
    let report = run_round_robin(&procs, 2).unwrap();

    // P1 arrives exactly as P0's slice expires and must go in front of it.
    assert_eq!(run_order(&report), vec![0, 1, 0]);
    check_invariants(&report);
}

#[test]
fn round_robin_rejects_a_zero_quantum() {
    let procs = vec![p(0, 0, 5)];
    assert_eq!(
        run_round_robin(&procs, 0).unwrap_err(),
        SimError::InvalidQuantum
    );
}

#[test]
fn hrrn_prefers_the_longer_wait_on_equal_bursts() {
    let procs = vec![p(0, 0, 4), p(1, 1, 2), p(2, 2, 2)];
    let report = run_hrrn(&procs).unwrap();

    // At t=4 both waiters need 2 ticks; P1 has waited longer.
    assert_eq!(run_order(&report), vec![0, 1, 2]);
    check_invariants(&report);
}

#[test]
fn hrrn_ratio_beats_shorter_burst_greed() {
    let procs = vec![p(0, 0, 3), p(1, 0, 6), p(2, 3, 3)];
    let report = run_hrrn(&procs).unwrap();

    // At t=3, P1's ratio is 1.5 against P2's 1.0, despite the longer burst.
    assert_eq!(run_order(&report), vec![0, 1, 2]);
    assert_eq!(completion(&report, 1), 9);
    assert_eq!(completion(&report, 2), 12);
    check_invariants(&report);
}

#[test]
fn hrrn_ties_keep_input_order() {
    let procs = vec![p(0, 0, 3), p(1, 0, 3)];
    let report = run_hrrn(&procs).unwrap();

    assert_eq!(run_order(&report), vec![0, 1]);
}

#[test]
fn priority_largest_value_runs_first() {
    let procs = vec![
        p(0, 0, 3).with_priority(0),
        p(1, 0, 3).with_priority(5),
        p(2, 0, 3).with_priority(2),
    ];
    let report = run_priority(&procs).unwrap();

    assert_eq!(run_order(&report), vec![1, 2, 0]);
    assert_eq!(completion(&report, 1), 3);
    assert_eq!(completion(&report, 0), 9);
    check_invariants(&report);
}

#[test]
fn priority_does_not_preempt_the_running_process() {
    let procs = vec![
        p(0, 0, 5).with_priority(0),
        p(1, 1, 2).with_priority(5),
        p(2, 1, 2).with_priority(1),
    ];
    let report = run_priority(&procs).unwrap();

    assert_eq!(run_order(&report), vec![0, 1, 2]);
    check_invariants(&report);
}

#[test]
fn idle_gaps_coalesce_into_a_single_segment() {
    let procs = vec![p(0, 0, 1), p(1, 5, 1)];
    let report = run_sjf(&procs).unwrap();

    assert_eq!(
        report.timeline.segments(),
        &[
            Segment::Run {
                proc: 0,
                start: 0,
                end: 1
            },
            Segment::Idle { start: 1, end: 5 },
            Segment::Run {
                proc: 1,
                start: 5,
                end: 6
            },
        ]
    );
    check_invariants(&report);
}

#[test]
fn every_policy_upholds_the_shared_invariants() {
    let procs = vec![
        p(0, 0, 4).with_priority(2),
        p(1, 6, 3).with_priority(5),
        p(2, 7, 5).with_priority(1),
        p(3, 7, 1).with_priority(4),
    ];

    let reports = [
        run_fcfs(&procs).unwrap(),
        run_sjf(&procs).unwrap(),
        run_sjf_preemptive(&procs).unwrap(),
        run_hrrn(&procs).unwrap(),
        run_round_robin(&procs, 2).unwrap(),
        run_priority(&procs).unwrap(),
    ];

    for report in &reports {
        check_invariants(report);
        // The arrival gap after P0 must surface as real idle time.
        assert_eq!(report.timeline.idle_ticks(), 2);
    }
}

#[test]
fn zero_burst_processes_are_rejected_up_front() {
    let procs = vec![p(0, 0, 0)];

    assert_eq!(
        run_hrrn(&procs).unwrap_err(),
        SimError::ZeroBurst { id: 0 }
    );
    assert_eq!(
        run_fcfs(&procs).unwrap_err(),
        SimError::ZeroBurst { id: 0 }
    );
}

#[test]
fn non_dense_ids_are_rejected_up_front() {
    let procs = vec![p(0, 0, 2), p(5, 1, 2)];

    assert_eq!(
        run_sjf(&procs).unwrap_err(),
        SimError::NonDenseId {
            expected: 1,
            found: 5
        }
    );
}

#[test]
fn an_empty_process_set_yields_an_empty_report() {
    let report = run_fcfs(&[]).unwrap();

    assert!(report.processes.is_empty());
    assert!(report.timeline.segments().is_empty());
}
