//! Fixed scenarios with hand-computed turnaround times.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sched_sim::params::MAX_SERVICE;
use sched_sim::{run_all, simulate, Pid, Policy, ProcessSet, SimError, SimParams};

#[test]
fn short_late_arrival_separates_fifo_from_srt() {
    let set = ProcessSet::from_pairs(&[(0, 5), (1, 1)]);
    let outcomes = run_all(&set, &Policy::ALL).unwrap();
    let (fifo, sjf, srt) = (&outcomes[0], &outcomes[1], &outcomes[2]);

    assert_eq!(fifo.turnarounds(), vec![(Pid(1), 5), (Pid(2), 5)]);
    assert_eq!(fifo.att, 5.0);

    // p2 arrives after p1 starts, so non-preemptive SJF matches FIFO
    assert_eq!(sjf.turnarounds(), fifo.turnarounds());
    assert_eq!(sjf.att, 5.0);

    assert_eq!(srt.turnarounds(), vec![(Pid(2), 1), (Pid(1), 6)]);
    assert_eq!(srt.att, 3.5);
}

#[test]
fn single_process_turnaround_is_its_service() {
    let set = ProcessSet::from_pairs(&[(17, 42)]);
    for outcome in run_all(&set, &Policy::ALL).unwrap() {
        assert_eq!(outcome.turnarounds(), vec![(Pid(1), 42)], "{}", outcome.policy);
        assert_eq!(outcome.att, 42.0);
        assert_eq!(outcome.makespan, 59);
    }
}

#[test]
fn all_zero_service_processes_finish_at_arrival() {
    let set = ProcessSet::from_pairs(&[(3, 0), (1, 0), (3, 0)]);
    for outcome in run_all(&set, &Policy::ALL).unwrap() {
        assert!(outcome.completions.iter().all(|c| c.turnaround == 0));
        assert_eq!(outcome.att, 0.0);
    }
}

#[test]
fn policies_diverge_under_contention() {
    // everything arrives at once: SJF and SRT both run shortest first
    let set = ProcessSet::from_pairs(&[(0, 9), (0, 3), (0, 6)]);
    let outcomes = run_all(&set, &Policy::ALL).unwrap();
    // FIFO: 9, 12, 18
    assert_eq!(outcomes[0].total_turnaround(), 39);
    // shortest first: 3, 9, 18
    assert_eq!(outcomes[1].total_turnaround(), 30);
    assert_eq!(outcomes[2].total_turnaround(), 30);
    assert_eq!(outcomes[2].preemptions, 0);
}

#[test]
fn seeded_simulation_is_reproducible() {
    let params = SimParams::new(25, 200, 20.0, 6.0);
    let a = simulate(&params, StdRng::seed_from_u64(2024), &Policy::ALL).unwrap();
    let b = simulate(&params, StdRng::seed_from_u64(2024), &Policy::ALL).unwrap();
    assert_eq!(a.processes, b.processes);
    assert_eq!(a.outcomes, b.outcomes);
}

#[test]
fn invalid_parameters_fail_before_generation() {
    let rng = StdRng::seed_from_u64(0);
    assert_eq!(
        simulate(&SimParams::new(5, 0, 5.0, 1.0), rng, &Policy::ALL).unwrap_err(),
        SimError::InvalidArrivalBound
    );
}

#[test]
fn oversized_mean_is_rejected_instead_of_overflowing() {
    let params = SimParams::new(2, 1, 1e20, 0.0);
    let err = simulate(&params, StdRng::seed_from_u64(0), &[Policy::Fifo]).unwrap_err();
    assert!(matches!(err, SimError::ServiceOutOfRange { max: MAX_SERVICE, .. }));
}

#[test]
fn service_at_the_ceiling_still_completes() {
    let params = SimParams::new(3, 1, MAX_SERVICE as f64, 0.0);
    let cmp = simulate(&params, StdRng::seed_from_u64(0), &[Policy::Fifo, Policy::Sjf]).unwrap();
    for outcome in &cmp.outcomes {
        // all arrive at 0 and run back to back
        assert_eq!(outcome.makespan, 3 * MAX_SERVICE);
        assert_eq!(outcome.total_turnaround(), 6 * MAX_SERVICE);
    }
}

#[test]
fn hand_built_set_past_the_clock_is_rejected() {
    let set = ProcessSet::from_pairs(&[(u64::MAX - 1, 5)]);
    assert_eq!(run_all(&set, &Policy::ALL).unwrap_err(), SimError::ClockOverflow);
}
