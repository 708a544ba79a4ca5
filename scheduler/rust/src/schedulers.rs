use std::fmt;

use log::{debug, trace};

use crate::error::{Result, SimError};
use crate::process::{Pid, ProcessSet, State};

mod fifo;
mod sjf;
mod srt;

pub use fifo::Fifo;
pub use sjf::Sjf;
pub use srt::Srt;

/// A scheduling policy that consumes its own copy of a process set.
pub trait Engine {
    fn policy(&self) -> Policy;
    fn run(&self, set: ProcessSet) -> Result<Outcome>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Sjf,
    Srt,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Sjf, Policy::Srt];

    /// Single-letter code: `F`, `S` or `R`.
    pub fn from_code(code: char) -> Option<Policy> {
        match code {
            'F' => Some(Policy::Fifo),
            'S' => Some(Policy::Sjf),
            'R' => Some(Policy::Srt),
            _ => None,
        }
    }

    /// Parses a code string such as `"FSR"`, dropping repeats and
    /// unknown letters and keeping first-seen order.
    pub fn from_spec(spec: &str) -> Vec<Policy> {
        let mut policies = Vec::new();
        for policy in spec.chars().filter_map(Policy::from_code) {
            if !policies.contains(&policy) {
                policies.push(policy);
            }
        }
        policies
    }

    pub fn engine(self) -> Box<dyn Engine> {
        match self {
            Policy::Fifo => Box::new(Fifo),
            Policy::Sjf => Box::new(Sjf),
            Policy::Srt => Box::new(Srt),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Sjf => "SJF",
            Policy::Srt => "SRT",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub pid: Pid,
    pub turnaround: u64,
    pub completion: u64,
}

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub policy: Policy,
    /// In termination order.
    pub completions: Vec<Completion>,
    /// Exact mean turnaround.
    pub att: f64,
    /// Time at which the last process terminated.
    pub makespan: u64,
    pub preemptions: u64,
    /// Final state of the engine's working copy.
    pub set: ProcessSet,
}

impl Outcome {
    pub fn turnarounds(&self) -> Vec<(Pid, u64)> {
        self.completions
            .iter()
            .map(|c| (c.pid, c.turnaround))
            .collect()
    }

    pub fn total_turnaround(&self) -> u64 {
        self.completions.iter().map(|c| c.turnaround).sum()
    }

    /// Integer-floor ATT.
    pub fn att_rounded(&self) -> u64 {
        self.total_turnaround() / self.completions.len() as u64
    }

    pub fn turnaround_of(&self, pid: Pid) -> Option<u64> {
        self.completions
            .iter()
            .find(|c| c.pid == pid)
            .map(|c| c.turnaround)
    }
}

/// Clock and completion log local to a single engine run.
pub(crate) struct Timeline {
    policy: Policy,
    now: u64,
    completions: Vec<Completion>,
    preemptions: u64,
}

impl Timeline {
    pub(crate) fn start(policy: Policy, set: &ProcessSet) -> Result<Timeline> {
        if set.is_empty() {
            return Err(SimError::EmptyProcessSet);
        }
        // the clock never passes the horizon, and no TT exceeds it either,
        // so n * horizon bounds the turnaround sum
        set.checked_horizon()
            .and_then(|h| h.checked_mul(set.len() as u64))
            .ok_or(SimError::ClockOverflow)?;
        debug!("{policy}: scheduling {} processes", set.len());
        Ok(Timeline {
            policy,
            now: 0,
            completions: Vec::with_capacity(set.len()),
            preemptions: 0,
        })
    }

    pub(crate) fn now(&self) -> u64 {
        self.now
    }

    /// Advances the clock by `units` of CPU work.
    pub(crate) fn advance(&mut self, units: u64) {
        self.now += units;
    }

    /// Jumps the clock forward to `arrival` if the CPU would otherwise idle.
    pub(crate) fn idle_until(&mut self, arrival: u64) {
        if self.now < arrival {
            trace!("{}: idle [{}, {})", self.policy, self.now, arrival);
            self.now = arrival;
        }
    }

    pub(crate) fn note_preemption(&mut self, from: Pid, to_remaining: u64) {
        trace!(
            "{}: t={} preempt {} for remaining {}",
            self.policy,
            self.now,
            from,
            to_remaining
        );
        self.preemptions += 1;
    }

    /// Terminates the process at `slot` at the current time.
    pub(crate) fn terminate(&mut self, set: &mut ProcessSet, slot: usize) {
        let now = self.now;
        let p = set.get_mut(slot);
        let turnaround = p.terminate(now);
        trace!("{}: t={} {} done, TT {}", self.policy, now, p.id(), turnaround);
        self.completions.push(Completion {
            pid: p.id(),
            turnaround,
            completion: now,
        });
    }

    pub(crate) fn finish(self, set: ProcessSet) -> Outcome {
        debug_assert!(set.all_terminated());
        let total: u64 = self.completions.iter().map(|c| c.turnaround).sum();
        let att = total as f64 / self.completions.len() as f64;
        debug!(
            "{}: ATT {:.2}, makespan {}, {} preemptions",
            self.policy, att, self.now, self.preemptions
        );
        Outcome {
            policy: self.policy,
            completions: self.completions,
            att,
            makespan: self.now,
            preemptions: self.preemptions,
            set,
        }
    }
}

/// Gives the CPU to the process at `slot`.
pub(crate) fn dispatch(set: &mut ProcessSet, slot: usize, timeline: &Timeline) {
    let p = set.get_mut(slot);
    trace!(
        "{}: t={} run {} (remaining {})",
        timeline.policy,
        timeline.now,
        p.id(),
        p.remaining()
    );
    p.set_state(State::Running);
}

/// Runs the process at `slot` to completion without interruption,
/// fast-forwarding the clock by its remaining time.
pub(crate) fn run_to_completion(set: &mut ProcessSet, slot: usize, timeline: &mut Timeline) {
    dispatch(set, slot, timeline);
    let p = set.get_mut(slot);
    let owed = p.remaining();
    let used = p.consume(owed);
    timeline.advance(used);
    timeline.terminate(set, slot);
}
