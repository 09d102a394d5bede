pub mod core;

// Re-export commonly used types
pub use crate::core::batch::{run_batch, BatchConfig};
pub use crate::core::engine::queue_time;
pub use crate::core::errors::SimulationError;
pub use crate::core::queue::ServiceQueue;
pub use crate::core::scenario::Scenario;
pub use crate::core::types::TimeUnit;
