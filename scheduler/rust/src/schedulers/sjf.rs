use crate::error::Result;
use crate::process::ProcessSet;
use crate::ready_queue::ReadyQueue;

use super::{run_to_completion, Engine, Outcome, Policy, Timeline};

/// Non-preemptive shortest job first.
///
/// Each time the CPU frees up, the arrived process with the least
/// remaining time runs next, to completion. Ties go to the earlier
/// arrival. When nothing has arrived the clock jumps to the next arrival
/// and selection is repeated among the processes arriving then.
pub struct Sjf;

impl Engine for Sjf {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn run(&self, mut set: ProcessSet) -> Result<Outcome> {
        let mut timeline = Timeline::start(Policy::Sjf, &set)?;
        let mut queue = ReadyQueue::new();

        loop {
            queue.admit_until(&mut set, timeline.now());
            let slot = match queue.pop_shortest() {
                Some(slot) => slot,
                None => match queue.next_arrival(&set) {
                    Some(arrival) => {
                        timeline.idle_until(arrival);
                        continue;
                    }
                    None => break,
                },
            };
            run_to_completion(&mut set, slot, &mut timeline);
        }

        debug_assert!(queue.is_drained(&set));
        Ok(timeline.finish(set))
    }
}
