use serde::{Deserialize, Serialize};

use crate::core::engine;
use crate::core::errors::SimulationError;
use crate::core::queue::ServiceQueue;
use crate::core::types::TimeUnit;

/// One queue-time problem instance: the ordered service durations plus the
/// number of open stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Service durations in arrival order
    pub durations: ServiceQueue,
    /// Number of open stations, must be at least 1
    pub stations: usize,
}

impl Scenario {
    /// Create a scenario from durations in arrival order
    pub fn new(durations: ServiceQueue, stations: usize) -> Self {
        Self { durations, stations }
    }

    /// Total time to service every item of this scenario
    pub fn queue_time(&self) -> Result<TimeUnit, SimulationError> {
        engine::queue_time(&self.durations, self.stations)
    }
}
