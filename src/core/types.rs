/// Simulated time, counted in whole service-time units.
pub type TimeUnit = u64;
