use serde::{Deserialize, Serialize};

use crate::core::errors::SimulationError;
use crate::core::types::TimeUnit;

/// Ordered queue of service durations, consumed left to right.
///
/// The queue itself is immutable input; the engine walks it in order and
/// never reorders items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceQueue {
    durations: Vec<TimeUnit>,
}

impl ServiceQueue {
    /// Create a queue from durations in arrival order
    pub fn new(durations: Vec<TimeUnit>) -> Self {
        Self { durations }
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// True when nothing is waiting to be serviced
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// The single longest duration, or `None` for an empty queue
    pub fn longest(&self) -> Option<TimeUnit> {
        self.durations.iter().copied().max()
    }

    /// Sum of all durations, rejecting overflow of the time-unit range
    pub fn total(&self) -> Result<TimeUnit, SimulationError> {
        self.durations
            .iter()
            .try_fold(0 as TimeUnit, |acc, &d| acc.checked_add(d))
            .ok_or(SimulationError::Overflow)
    }

    /// Iterate durations in arrival order
    pub fn iter(&self) -> impl Iterator<Item = TimeUnit> + '_ {
        self.durations.iter().copied()
    }

    /// View the durations as a slice, in arrival order
    pub fn as_slice(&self) -> &[TimeUnit] {
        &self.durations
    }
}

impl From<Vec<TimeUnit>> for ServiceQueue {
    fn from(durations: Vec<TimeUnit>) -> Self {
        Self::new(durations)
    }
}

impl From<&[TimeUnit]> for ServiceQueue {
    fn from(durations: &[TimeUnit]) -> Self {
        Self::new(durations.to_vec())
    }
}

impl FromIterator<TimeUnit> for ServiceQueue {
    fn from_iter<I: IntoIterator<Item = TimeUnit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
