//! Error types for travel operations.

use thiserror::Error;

/// Erased error surfaced by a travel subscriber.
///
/// Subscribers report failures with whatever error type they like; the clock
/// forwards it to the travelling caller without translation.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Travel operation error conditions.
#[derive(Debug, Error)]
pub enum TravelError {
    /// Travel or reset was attempted while the clock is disabled. Nothing was
    /// mutated and no subscriber ran.
    #[error("time travel is not enabled")]
    NotEnabled,

    /// A before-travel subscriber failed. The offset was left unchanged and
    /// later before-travel subscribers did not run.
    #[error("before-travel subscriber failed: {0}")]
    BeforeHook(#[source] HookError),

    /// An after-travel subscriber failed. The offset mutation had already
    /// committed; callers must re-read the current offset rather than assume
    /// the travel was rolled back.
    #[error("after-travel subscriber failed: {0}")]
    AfterHook(#[source] HookError),
}
