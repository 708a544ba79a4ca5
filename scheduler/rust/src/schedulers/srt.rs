use crate::error::Result;
use crate::process::{ProcessSet, State};
use crate::ready_queue::ReadyQueue;

use super::{dispatch, Engine, Outcome, Policy, Timeline};

/// Preemptive shortest remaining time.
///
/// The clock advances one unit at a time. After every unit, if any arrived
/// process owes strictly less than the running one, the running process is
/// suspended with its remaining time intact and the shorter one takes the
/// CPU. Comparison is against the globally shortest queued process.
pub struct Srt;

impl Engine for Srt {
    fn policy(&self) -> Policy {
        Policy::Srt
    }

    fn run(&self, mut set: ProcessSet) -> Result<Outcome> {
        let mut timeline = Timeline::start(Policy::Srt, &set)?;
        let mut queue = ReadyQueue::new();
        let mut running: Option<usize> = None;

        loop {
            queue.admit_until(&mut set, timeline.now());

            let slot = match running.take() {
                Some(slot) => slot,
                None => match queue.pop_shortest() {
                    Some(slot) => {
                        dispatch(&mut set, slot, &timeline);
                        slot
                    }
                    None => match queue.next_arrival(&set) {
                        Some(arrival) => {
                            timeline.idle_until(arrival);
                            continue;
                        }
                        None => break,
                    },
                },
            };

            if set.get(slot).remaining() > 0 {
                set.get_mut(slot).consume(1);
                timeline.advance(1);
                queue.admit_until(&mut set, timeline.now());
            }

            let remaining = set.get(slot).remaining();
            if remaining == 0 {
                timeline.terminate(&mut set, slot);
                continue;
            }

            match queue.peek_remaining() {
                Some(shorter) if shorter < remaining => {
                    timeline.note_preemption(set.get(slot).id(), shorter);
                    set.get_mut(slot).set_state(State::Suspended);
                    queue.push(&set, slot);
                }
                _ => running = Some(slot),
            }
        }

        debug_assert!(queue.is_drained(&set));
        Ok(timeline.finish(set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Pid;

    #[test]
    fn short_arrival_preempts_long_job() {
        let out = Srt.run(ProcessSet::from_pairs(&[(0, 5), (1, 1)])).unwrap();
        assert_eq!(out.turnarounds(), vec![(Pid(2), 1), (Pid(1), 6)]);
        assert_eq!(out.att, 3.5);
        assert_eq!(out.preemptions, 1);
    }

    #[test]
    fn suspended_job_resumes_from_preserved_remaining() {
        // p1 runs [0,2), p2 [2,4), p1 resumes with 4 left: [4,8)
        let out = Srt.run(ProcessSet::from_pairs(&[(0, 6), (2, 2)])).unwrap();
        assert_eq!(out.set.find(Pid(1)).and_then(|p| p.completion()), Some(8));
        assert_eq!(out.turnaround_of(Pid(1)), Some(8));
        assert_eq!(out.turnaround_of(Pid(2)), Some(2));
    }

    #[test]
    fn equal_remaining_does_not_preempt() {
        // at t=2 p1 has 3 left and p2 needs 3: p1 keeps the CPU
        let out = Srt.run(ProcessSet::from_pairs(&[(0, 5), (2, 3)])).unwrap();
        assert_eq!(out.preemptions, 0);
        assert_eq!(out.turnarounds(), vec![(Pid(1), 5), (Pid(2), 6)]);
    }

    #[test]
    fn compares_against_shortest_of_all_arrived() {
        // p1 is long; p2 (4) and p3 (2) arrive together at t=1.
        // p3 preempts first even though p2 is the adjacent slot.
        let set = ProcessSet::from_pairs(&[(0, 10), (1, 4), (1, 2)]);
        let out = Srt.run(set).unwrap();
        let order: Vec<Pid> = out.completions.iter().map(|c| c.pid).collect();
        assert_eq!(order, vec![Pid(3), Pid(2), Pid(1)]);
        // p3 [1,3), p2 [3,7), p1 resumes with 9 left [7,16)
        assert_eq!(out.turnarounds(), vec![(Pid(3), 2), (Pid(2), 6), (Pid(1), 16)]);
        assert_eq!(out.preemptions, 1);
    }

    #[test]
    fn chain_of_preemptions() {
        let set = ProcessSet::from_pairs(&[(0, 8), (1, 4), (2, 1)]);
        let out = Srt.run(set).unwrap();
        // p1 [0,1); p2 [1,2); p3 [2,3); p2 [3,6); p1 [6,13)
        assert_eq!(out.preemptions, 2);
        assert_eq!(out.turnarounds(), vec![(Pid(3), 1), (Pid(2), 5), (Pid(1), 13)]);
    }

    #[test]
    fn zero_service_arrival_finishes_instantly() {
        let set = ProcessSet::from_pairs(&[(0, 3), (1, 0)]);
        let out = Srt.run(set).unwrap();
        assert_eq!(out.turnarounds(), vec![(Pid(2), 0), (Pid(1), 3)]);
        assert!(out.set.all_terminated());
    }
}
