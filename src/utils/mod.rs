//! Utility modules shared across the pipeline

pub mod arrow;
pub mod logging;

pub use arrow::{downcast_array, get_column};
