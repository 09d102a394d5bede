use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::core::errors::SimulationError;
use crate::core::types::TimeUnit;

/// Finish times for a fixed set of identical service stations.
///
/// Each entry is the simulated time at which one station becomes free; an
/// idle station carries finish time 0. A fresh pool is built per simulation
/// run, nothing persists across runs.
#[derive(Debug)]
pub struct StationPool {
    // Reverse ordering for a min-heap (BinaryHeap is a max-heap by default),
    // so the earliest-freeing station pops first.
    finish_times: BinaryHeap<Reverse<TimeUnit>>,
}

impl StationPool {
    /// Create a pool of `station_count` idle stations
    pub fn new(station_count: usize) -> Result<Self, SimulationError> {
        if station_count == 0 {
            return Err(SimulationError::InvalidStationCount(station_count));
        }
        let mut finish_times = BinaryHeap::with_capacity(station_count);
        for _ in 0..station_count {
            finish_times.push(Reverse(0));
        }
        Ok(Self { finish_times })
    }

    /// Number of stations in the pool
    pub fn station_count(&self) -> usize {
        self.finish_times.len()
    }

    /// Assign the next queued item to whichever station frees first.
    ///
    /// Returns the finish time of the assigned item. Ties among equally-free
    /// stations are broken arbitrarily; the final makespan is unaffected.
    pub fn dispatch(&mut self, duration: TimeUnit) -> Result<TimeUnit, SimulationError> {
        // Pool is non-empty by construction
        let Reverse(free_at) = self.finish_times.pop().unwrap_or(Reverse(0));
        let finish = free_at
            .checked_add(duration)
            .ok_or(SimulationError::Overflow)?;
        self.finish_times.push(Reverse(finish));
        Ok(finish)
    }

    /// Latest finish time across all stations, 0 when every station is idle
    pub fn makespan(&self) -> TimeUnit {
        self.finish_times
            .iter()
            .map(|&Reverse(t)| t)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_stations_rejected() {
        assert!(matches!(
            StationPool::new(0),
            Err(SimulationError::InvalidStationCount(0))
        ));
    }

    #[test]
    fn test_fresh_pool_is_idle() {
        let pool = StationPool::new(3).unwrap();
        assert_eq!(pool.station_count(), 3);
        assert_eq!(pool.makespan(), 0);
    }

    #[test]
    fn test_dispatch_picks_earliest_free_station() {
        let mut pool = StationPool::new(2).unwrap();
        assert_eq!(pool.dispatch(4).unwrap(), 4);
        assert_eq!(pool.dispatch(2).unwrap(), 2);
        // The station freeing at 2 must take the next item
        assert_eq!(pool.dispatch(3).unwrap(), 5);
        assert_eq!(pool.makespan(), 5);
    }

    #[test]
    fn test_dispatch_overflow() {
        let mut pool = StationPool::new(1).unwrap();
        pool.dispatch(TimeUnit::MAX).unwrap();
        assert_eq!(pool.dispatch(1), Err(SimulationError::Overflow));
    }
}
