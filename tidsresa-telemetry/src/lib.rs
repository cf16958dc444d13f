//! # Tidsresa Telemetry and Monitoring
//!
//! Crate for logging and metrics around travel clock activity. Everything
//! here rides on the clock's own subscription surface; the core stays free
//! of any observability dependency.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
