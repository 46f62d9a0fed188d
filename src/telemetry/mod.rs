//! Telemetry module
//!
//! File-based logging for the run

mod logging;

pub use logging::init_logging;
