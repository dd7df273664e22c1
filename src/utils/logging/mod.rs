//! Logging utilities
//!
//! Standardized logging setup and operation-level log helpers.

pub mod progress;

/// Initialize env_logger with an `info` default filter.
///
/// Safe to call more than once; later calls are no-ops. Intended for
/// binaries and integration tests of downstream consumers.
pub fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}

/// Log the completion of a normalization pass with consistent format
pub fn log_normalization_complete(source: &str, accepted: usize, rejected: usize) {
    log::info!("Normalized {source}: {accepted} records accepted, {rejected} rows rejected");
}
