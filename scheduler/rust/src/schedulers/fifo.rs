use crate::error::Result;
use crate::process::{ProcessSet, State};

use super::{run_to_completion, Engine, Outcome, Policy, Timeline};

/// Runs processes strictly in arrival order, each to completion.
pub struct Fifo;

impl Engine for Fifo {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn run(&self, mut set: ProcessSet) -> Result<Outcome> {
        let mut timeline = Timeline::start(Policy::Fifo, &set)?;
        for slot in 0..set.len() {
            timeline.idle_until(set.get(slot).arrival());
            set.get_mut(slot).set_state(State::Eligible);
            run_to_completion(&mut set, slot, &mut timeline);
        }
        Ok(timeline.finish(set))
    }
}
