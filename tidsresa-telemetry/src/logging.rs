//! ## tidsresa-telemetry::logging
//! **Structured travel logging with `tracing`**
//!
//! ### Expectations:
//! - One subscriber installed per process, once, at startup
//! - Travel hooks never fail the travel they observe
//!
//! ### Components:
//! - `logging/`: fmt subscriber init plus travel event hooks
//! - `metrics/`: Prometheus registry fed from after-travel hooks

use tidsresa_core::TravelClock;
use tracing::{debug, info};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the process-wide fmt subscriber. Call once at startup.
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_thread_names(true)
            .with_span_events(FmtSpan::ENTER)
            .init()
    }

    /// Subscribes structured log events to every travel on `clock`.
    ///
    /// Emits a debug event before the offset commit and an info event after
    /// it, both carrying the offset and delta in milliseconds.
    pub fn attach(clock: &TravelClock) {
        clock.on_before_travel(|event| async move {
            debug!(
                offset_ms = event.current_offset.num_milliseconds(),
                travel_by_ms = event.travel_by.num_milliseconds(),
                "travel starting"
            );
            Ok(())
        });
        clock.on_after_travel(|event| async move {
            info!(
                offset_ms = event.current_offset.num_milliseconds(),
                travel_by_ms = event.travel_by.num_milliseconds(),
                "travel committed"
            );
            Ok(())
        });
    }
}
