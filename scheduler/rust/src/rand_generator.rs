use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::Result;
use crate::params::{SimParams, MAX_SERVICE};
use crate::process::{Pid, Process, ProcessSet};

/// Draws process populations from an injected random source.
///
/// Arrival times are uniform integers in `[0, k)`. Service times are
/// `Normal(d, v)` samples rounded half-to-even, floored at zero and capped
/// at [`MAX_SERVICE`], so a negative draw becomes a zero-service process.
pub struct RandGenerator<R> {
    rng: R,
    arrival_bound: u64,
    service: Normal<f64>,
    next_id: u32,
}

impl<R: Rng> RandGenerator<R> {
    pub fn new(params: &SimParams, rng: R) -> Result<Self> {
        params.validate()?;
        Ok(RandGenerator {
            rng,
            arrival_bound: params.k,
            service: Normal::new(params.d, params.v)?,
            next_id: 1,
        })
    }

    pub fn get_arrival(&mut self) -> u64 {
        self.rng.random_range(0..self.arrival_bound)
    }

    pub fn get_service(&mut self) -> u64 {
        clamp_service(self.service.sample(&mut self.rng))
    }

    pub fn next_process(&mut self) -> Process {
        let id = Pid(self.next_id);
        self.next_id += 1;
        let service = self.get_service();
        let arrival = self.get_arrival();
        Process::new(id, arrival, service)
    }

    /// Generates `n` processes, already sorted by arrival.
    pub fn generate(&mut self, n: usize) -> ProcessSet {
        let procs: Vec<Process> = (0..n).map(|_| self.next_process()).collect();
        let set = ProcessSet::from_processes(procs);
        debug!(
            "generated {} processes, total service {}",
            set.len(),
            set.total_service()
        );
        set
    }
}

fn clamp_service(sample: f64) -> u64 {
    let rounded = sample.round_ties_even();
    if rounded <= 0.0 {
        0
    } else if rounded >= MAX_SERVICE as f64 {
        MAX_SERVICE
    } else {
        rounded as u64
    }
}
