pub mod batch;
pub mod engine;
pub mod errors;
pub mod queue;
pub mod scenario;
pub mod station;
pub mod types;
