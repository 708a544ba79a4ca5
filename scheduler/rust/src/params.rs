use crate::error::{Result, SimError};

/// Simulation parameters `{n, k, d, v}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Number of processes to generate.
    pub n: usize,
    /// Arrival times are drawn from `[0, k)`.
    pub k: u64,
    /// Mean service time.
    pub d: f64,
    /// Standard deviation of the service time.
    pub v: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            n: 5,
            k: 100,
            d: 500.0,
            v: 10.0,
        }
    }
}

/// Which side of the `d` vs `k/n` boundary a parameter set falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `d` much smaller than `k/n`: processes mostly run alone.
    Isolation,
    /// Neither clearly isolated nor clearly overlapping.
    Mixed,
    /// `d` much larger than `k/n`: processes compete for the CPU.
    Contention,
}

/// Largest service time a generated process may carry. Samples above it
/// are clamped to it.
pub const MAX_SERVICE: u64 = 1 << 32;

// d + SERVICE_SPREAD * v must stay under MAX_SERVICE
const SERVICE_SPREAD: f64 = 6.0;

// "much smaller/larger" is read as a factor of ten.
const REGIME_FACTOR: f64 = 10.0;

impl SimParams {
    pub fn new(n: usize, k: u64, d: f64, v: f64) -> Self {
        SimParams { n, k, d, v }
    }

    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(SimError::InvalidProcessCount);
        }
        if self.k == 0 {
            return Err(SimError::InvalidArrivalBound);
        }
        if !self.d.is_finite() {
            return Err(SimError::NonFiniteParameter {
                name: "d",
                value: self.d,
            });
        }
        if !self.v.is_finite() {
            return Err(SimError::NonFiniteParameter {
                name: "v",
                value: self.v,
            });
        }
        if self.v < 0.0 {
            return Err(SimError::InvalidDeviation { v: self.v });
        }
        let upper = self.d + SERVICE_SPREAD * self.v;
        if upper > MAX_SERVICE as f64 {
            return Err(SimError::ServiceOutOfRange {
                upper,
                max: MAX_SERVICE,
            });
        }
        Ok(())
    }

    /// Mean spacing between arrivals, `k / n`.
    pub fn arrival_spacing(&self) -> f64 {
        self.k as f64 / self.n as f64
    }

    /// `d / (k / n)`. Values well below 1 mean little CPU contention.
    pub fn contention_ratio(&self) -> f64 {
        self.d / self.arrival_spacing()
    }

    pub fn regime(&self) -> Regime {
        let ratio = self.contention_ratio();
        if ratio * REGIME_FACTOR <= 1.0 {
            Regime::Isolation
        } else if ratio >= REGIME_FACTOR {
            Regime::Contention
        } else {
            Regime::Mixed
        }
    }
}
