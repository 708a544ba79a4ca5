//! Discrete-time CPU scheduling simulator.
//!
//! A population of processes is drawn from `{n, k, d, v}` and each selected
//! policy (FIFO, SJF, SRT) runs on its own copy of the arrival-sorted set,
//! producing per-process turnaround times and an average.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use sched_sim::{simulate, Policy, SimParams};
//!
//! let params = SimParams::new(20, 200, 15.0, 4.0);
//! let cmp = simulate(&params, StdRng::seed_from_u64(1), &Policy::ALL).unwrap();
//! assert_eq!(cmp.outcomes.len(), 3);
//! ```

pub mod error;
pub mod params;
pub mod process;
pub mod rand_generator;
pub mod ready_queue;
pub mod report;
pub mod schedulers;

use rand::Rng;

pub use crate::error::{Result, SimError};
pub use crate::params::{Regime, SimParams};
pub use crate::process::{Pid, Process, ProcessSet, State};
pub use crate::rand_generator::RandGenerator;
pub use crate::schedulers::{Completion, Engine, Fifo, Outcome, Policy, Sjf, Srt};

/// A generated population and the outcome of every policy run on it.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub params: SimParams,
    pub processes: ProcessSet,
    pub outcomes: Vec<Outcome>,
}

impl Comparison {
    pub fn outcome(&self, policy: Policy) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.policy == policy)
    }
}

/// Validates `params`, generates a population and runs each policy on it.
pub fn simulate<R: Rng>(params: &SimParams, rng: R, policies: &[Policy]) -> Result<Comparison> {
    let mut generator = RandGenerator::new(params, rng)?;
    let processes = generator.generate(params.n);
    let outcomes = run_all(&processes, policies)?;
    Ok(Comparison {
        params: *params,
        processes,
        outcomes,
    })
}

/// Runs each policy on its own deep copy of `set`.
pub fn run_all(set: &ProcessSet, policies: &[Policy]) -> Result<Vec<Outcome>> {
    policies
        .iter()
        .map(|policy| policy.engine().run(set.clone()))
        .collect()
}
