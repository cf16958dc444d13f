//! Travel clock startup configuration.
//!
//! Controls the state the shared clock is constructed with:
//! - Whether the offset is applied from the start
//! - A preset initial offset for fixtures and rehearsal environments
//!
//! This is construction state only; nothing here persists a live offset.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tidsresa_core::TravelClock;
use validator::{self, Validate};

use crate::error::ConfigError;
use crate::validation;

/// Travel clock configuration.
#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone)]
pub struct TravelSettings {
    /// Whether the clock applies its offset from startup.
    #[serde(default)]
    pub enabled: bool,

    /// Offset the clock starts out holding, in seconds. Bounded to the
    /// domain of the clock's duration type.
    #[serde(default)]
    #[validate(range(min = validation::MIN_OFFSET_SECS, max = validation::MAX_OFFSET_SECS))]
    pub initial_offset_secs: i64,
}

impl TravelSettings {
    /// Builds the shared clock this configuration describes.
    pub fn build_clock(&self) -> Result<TravelClock, ConfigError> {
        let offset = TimeDelta::try_seconds(self.initial_offset_secs)
            .ok_or(ConfigError::OffsetOutOfRange(self.initial_offset_secs))?;
        let clock = TravelClock::with_initial_offset(offset);
        clock.set_enabled(self.enabled);
        Ok(clock)
    }
}
