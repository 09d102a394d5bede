use rayon::prelude::*;

use crate::core::errors::SimulationError;
use crate::core::scenario::Scenario;
use crate::core::types::TimeUnit;

/// Controls how a batch of scenarios is spread over threads.
///
/// Only batch evaluation is affected; a single scenario always computes
/// synchronously on the calling thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchConfig {
    // None: calling thread. Some(0): rayon sizes the pool from the machine.
    // Some(n): a dedicated pool of n workers.
    parallelism: Option<usize>,
}

impl BatchConfig {
    /// Evaluate scenarios one after another on the calling thread
    pub fn sequential() -> Self {
        Self { parallelism: None }
    }

    /// Evaluate scenarios on a rayon pool sized from the machine
    pub fn parallel() -> Self {
        Self { parallelism: Some(0) }
    }

    /// Evaluate scenarios on a dedicated rayon pool of `workers` threads
    pub fn parallel_with_workers(workers: usize) -> Self {
        Self {
            parallelism: Some(workers),
        }
    }

    /// True when evaluation runs on a rayon pool
    pub fn is_parallel(&self) -> bool {
        self.parallelism.is_some()
    }
}

/// Evaluate a batch of independent scenarios.
///
/// Results come back in input order regardless of how the batch is spread
/// over threads. The first invalid scenario fails the whole batch.
pub fn run_batch(
    scenarios: &[Scenario],
    config: &BatchConfig,
) -> Result<Vec<TimeUnit>, SimulationError> {
    match config.parallelism {
        None => scenarios.iter().map(Scenario::queue_time).collect(),
        Some(0) => run_parallel(scenarios),
        Some(workers) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;
            pool.install(|| run_parallel(scenarios))
        }
    }
}

fn run_parallel(scenarios: &[Scenario]) -> Result<Vec<TimeUnit>, SimulationError> {
    scenarios.par_iter().map(Scenario::queue_time).collect()
}
