use log::debug;

use crate::core::errors::SimulationError;
use crate::core::queue::ServiceQueue;
use crate::core::station::StationPool;
use crate::core::types::TimeUnit;

/// Compute the total time until every queued item has been serviced.
///
/// Stations service one item at a time; whenever one frees it immediately
/// pulls the next unserviced item in arrival order. The computation is a
/// pure function of its inputs: a fresh station pool is built per call and
/// discarded afterwards.
///
/// Runs as a discrete-event dispatch over station finish times rather than
/// stepping the clock one unit at a time, so the cost scales with the number
/// of items, not with the total elapsed time.
pub fn queue_time(
    queue: &ServiceQueue,
    station_count: usize,
) -> Result<TimeUnit, SimulationError> {
    if station_count == 0 {
        return Err(SimulationError::InvalidStationCount(station_count));
    }
    if queue.is_empty() {
        return Ok(0);
    }
    if station_count == 1 {
        // A single station serializes all work
        return queue.total();
    }
    if queue.len() <= station_count {
        // Every item starts immediately; the longest one bounds the run
        return Ok(queue.longest().unwrap_or(0));
    }

    let mut pool = StationPool::new(station_count)?;
    for (index, duration) in queue.iter().enumerate() {
        let finish = pool.dispatch(duration)?;
        debug!(
            "item {} ({} units) dispatched, station frees at {}",
            index, duration, finish
        );
    }
    Ok(pool.makespan())
}
