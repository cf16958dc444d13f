//! ## tidsresa-telemetry::metrics
//! **Prometheus recorder for travel activity**
//!
//! ### Expectations:
//! - Counter for committed travels, gauge for the offset in effect
//! - Gauge follows the offset in both directions, reset included
//!
//! ### Components:
//! - `metrics/`: Prometheus registry fed from after-travel hooks
//! - `logging/`: fmt subscriber init plus travel event hooks

use prometheus::{Counter, Gauge, Registry};
use tidsresa_core::{TravelClock, TravelEvent};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: prometheus::Registry,
    pub travels_total: prometheus::Counter,
    pub offset_seconds: prometheus::Gauge,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let travels_total = Counter::new(
            "tidsresa_travels_total",
            "Total committed travel operations",
        )
        .unwrap();

        let offset_seconds = Gauge::new(
            "tidsresa_offset_seconds",
            "Travel offset currently in effect, in seconds",
        )
        .unwrap();

        registry.register(Box::new(travels_total.clone())).unwrap();
        registry.register(Box::new(offset_seconds.clone())).unwrap();

        Self {
            registry,
            travels_total,
            offset_seconds,
        }
    }

    /// Records one committed travel.
    pub fn record_travel(&self, event: &TravelEvent) {
        self.travels_total.inc();
        self.offset_seconds
            .set(event.current_offset.num_milliseconds() as f64 / 1000.0);
    }

    /// Subscribes this recorder to every committed travel on `clock`.
    pub fn attach(&self, clock: &TravelClock) {
        let recorder = self.clone();
        clock.on_after_travel(move |event| {
            let recorder = recorder.clone();
            async move {
                recorder.record_travel(&event);
                Ok(())
            }
        });
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }
}
