//! Custom validation functions for configuration.
//!
//! Shared validation logic and bounds used across the configuration modules.

use validator::ValidationError;

/// Largest offset magnitude, in seconds, that still fits the duration type
/// used by the clock.
pub const MAX_OFFSET_SECS: i64 = i64::MAX / 1_000;

/// Negative counterpart of [`MAX_OFFSET_SECS`].
pub const MIN_OFFSET_SECS: i64 = -MAX_OFFSET_SECS;

/// Validate a log level name.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid =
        ["trace", "debug", "info", "warn", "error"].contains(&level.to_lowercase().as_str());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}
