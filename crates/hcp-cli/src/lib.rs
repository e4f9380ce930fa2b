//! CLI library components for the health-coverage pipeline.

pub mod logging;
pub mod pipeline;
pub mod types;
