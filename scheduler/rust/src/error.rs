//! Error types for parameter validation and engine input.
//!
//! The simulator performs no I/O, so the taxonomy is small: parameters are
//! rejected before any process is generated, and an engine refuses an empty
//! process set instead of reporting a meaningless average.

use std::fmt;

use rand_distr::NormalError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SimError {
    /// `n` was zero.
    InvalidProcessCount,
    /// `k` was zero, leaving no arrival time to draw from.
    InvalidArrivalBound,
    /// Negative service-time standard deviation.
    InvalidDeviation { v: f64 },
    /// `d` or `v` was NaN or infinite.
    NonFiniteParameter { name: &'static str, value: f64 },
    /// `d + 6v` lies above the largest service time the clock can carry.
    ServiceOutOfRange { upper: f64, max: u64 },
    /// Latest arrival plus total service, summed over every process,
    /// does not fit the simulated clock.
    ClockOverflow,
    /// The normal distribution rejected its parameters.
    InvalidNormal(NormalError),
    /// An engine was handed a process set with no processes.
    EmptyProcessSet,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProcessCount => write!(f, "process count n must be positive"),
            Self::InvalidArrivalBound => write!(f, "arrival upper bound k must be positive"),
            Self::InvalidDeviation { v } => {
                write!(f, "service-time deviation v must be non-negative, got {v}")
            }
            Self::NonFiniteParameter { name, value } => {
                write!(f, "parameter {name} must be finite, got {value}")
            }
            Self::ServiceOutOfRange { upper, max } => {
                write!(f, "service times up to {upper} exceed the ceiling {max}")
            }
            Self::ClockOverflow => write!(f, "process set would overflow the simulated clock"),
            Self::InvalidNormal(err) => write!(f, "invalid service-time distribution: {err}"),
            Self::EmptyProcessSet => write!(f, "cannot schedule an empty process set"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidNormal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NormalError> for SimError {
    fn from(err: NormalError) -> Self {
        Self::InvalidNormal(err)
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
