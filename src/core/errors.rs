use std::error::Error;
use std::fmt;

/// Errors produced by queue-time simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A simulation needs at least one open station
    InvalidStationCount(usize),
    /// Accumulated service time exceeded the range of `TimeUnit`
    Overflow,
    /// The rayon thread pool for batch evaluation could not be built
    ThreadPool(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidStationCount(count) => {
                write!(f, "station count must be at least 1, got {}", count)
            }
            SimulationError::Overflow => {
                write!(f, "total service time overflowed the time-unit range")
            }
            SimulationError::ThreadPool(reason) => {
                write!(f, "failed to build batch thread pool: {}", reason)
            }
        }
    }
}

impl Error for SimulationError {}
