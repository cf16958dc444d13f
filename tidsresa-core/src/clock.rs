//! Shared virtual-clock state with observer-notified travel operations.
//!
//! This module provides the offset store behind the whole crate: a cheaply
//! shareable handle owning the travel offset, the enabled flag, and the
//! before/after subscriber registries. The clock is explicitly constructed
//! rather than a process global: wiring code creates one instance at startup
//! and hands out [`TravelClock::share`] copies.
//!
//! Guarantees upheld here:
//! - Reads (`now`, `utc_now`, `current_offset`, `is_enabled`) never suspend
//!   and always observe a whole offset value, never a torn one
//! - Whole travels, subscriber phases included, are serialized by an internal
//!   gate, so concurrent travellers cannot lose updates
//! - Subscriber notification is two-phase (before/after the commit) and
//!   veto-free

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta, Utc};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{HookError, TravelError};
use crate::events::hooks::{HookFuture, HookRegistry, TravelHook};
use crate::events::travel::TravelEvent;

struct ClockInner {
    /// While false every accessor and conversion is a pass-through identity,
    /// whatever the stored offset holds.
    enabled: AtomicBool,

    /// Virtual time minus real time. Guarded so readers always see a whole
    /// value; the guard is never held across a suspension point.
    offset: RwLock<TimeDelta>,

    /// Serializes whole travel operations, subscriber phases included.
    travel_gate: Mutex<()>,

    before: HookRegistry,
    after: HookRegistry,
}

/// Shareable handle to the travel offset state.
pub struct TravelClock {
    inner: Arc<ClockInner>,
}

impl TravelClock {
    /// Creates a clock at home time (zero offset), disabled.
    pub fn new() -> Self {
        Self::with_initial_offset(TimeDelta::zero())
    }

    /// Creates a clock with a preset offset, still disabled.
    ///
    /// The offset is construction state for startup wiring and test
    /// fixtures; once the clock exists, [`TravelClock::travel_by`] is the
    /// only mutator.
    pub fn with_initial_offset(offset: TimeDelta) -> Self {
        Self {
            inner: Arc::new(ClockInner {
                enabled: AtomicBool::new(false),
                offset: RwLock::new(offset),
                travel_gate: Mutex::new(()),
                before: HookRegistry::default(),
                after: HookRegistry::default(),
            }),
        }
    }

    /// Creates a new handle to the same clock state.
    #[inline]
    pub fn share(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Whether the offset is currently applied to observed time.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.load(Ordering::Acquire)
    }

    /// Turns application of the offset on or off. No other side effects.
    pub fn set_enabled(&self, enabled: bool) {
        self.inner.enabled.store(enabled, Ordering::Release);
        debug!(enabled, "time travel toggled");
    }

    /// Returns the offset currently in effect, applied or not.
    #[inline]
    pub fn current_offset(&self) -> TimeDelta {
        *self.inner.offset.read()
    }

    /// Local-timezone now on the virtual timeline.
    ///
    /// Re-samples the real clock on every call; when the clock is disabled
    /// this is exactly the real local now.
    pub fn now(&self) -> DateTime<Local> {
        if self.is_enabled() {
            Local::now() + self.current_offset()
        } else {
            Local::now()
        }
    }

    /// UTC now on the virtual timeline.
    ///
    /// Re-samples the real clock on every call; when the clock is disabled
    /// this is exactly the real UTC now.
    pub fn utc_now(&self) -> DateTime<Utc> {
        if self.is_enabled() {
            Utc::now() + self.current_offset()
        } else {
            Utc::now()
        }
    }

    /// Moves the virtual timeline by `delta`. The sole mutator of the offset.
    ///
    /// Fails fast with [`TravelError::NotEnabled`] while the clock is
    /// disabled: nothing is mutated and no subscriber runs. When enabled, the
    /// operation runs as one serialized critical section:
    ///
    /// 1. every before-travel subscriber is awaited, in registration order,
    ///    with the pre-travel offset;
    /// 2. the offset is committed in one indivisible step;
    /// 3. every after-travel subscriber is awaited, in registration order,
    ///    with the committed offset.
    ///
    /// Subscribers cannot veto the travel; a failing before-travel subscriber
    /// prevents the commit, but a failing after-travel subscriber reports
    /// [`TravelError::AfterHook`] with the commit already applied. On any
    /// error, re-read [`TravelClock::current_offset`] instead of assuming the
    /// travel was a no-op.
    pub async fn travel_by(&self, delta: TimeDelta) -> Result<(), TravelError> {
        if !self.is_enabled() {
            return Err(TravelError::NotEnabled);
        }
        let _gate = self.inner.travel_gate.lock().await;
        self.run_travel(delta).await
    }

    /// Travels back to home time, driving the offset to exactly zero.
    ///
    /// The inverse is computed under the travel gate, so the result is exact
    /// even when other travellers are queued. Precondition and notification
    /// semantics are those of [`TravelClock::travel_by`].
    pub async fn reset_to_home(&self) -> Result<(), TravelError> {
        if !self.is_enabled() {
            return Err(TravelError::NotEnabled);
        }
        let _gate = self.inner.travel_gate.lock().await;
        let delta = -self.current_offset();
        self.run_travel(delta).await
    }

    /// Registers an asynchronous subscriber for the phase before the offset
    /// commit. Subscribers run in registration order and are awaited to
    /// completion; they observe the travel, they cannot abort it.
    pub fn on_before_travel<F, Fut>(&self, hook: F)
    where
        F: Fn(TravelEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookError>> + Send + 'static,
    {
        self.inner.before.register(box_hook(hook));
    }

    /// Registers an asynchronous subscriber for the phase after the offset
    /// commit. Subscribers run in registration order and are awaited before
    /// the travel call returns.
    pub fn on_after_travel<F, Fut>(&self, hook: F)
    where
        F: Fn(TravelEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookError>> + Send + 'static,
    {
        self.inner.after.register(box_hook(hook));
    }

    /// Runs one travel. Caller holds the travel gate.
    async fn run_travel(&self, delta: TimeDelta) -> Result<(), TravelError> {
        let before = self.current_offset();

        let event = TravelEvent::new(before, delta);
        for hook in self.inner.before.snapshot() {
            hook(event).await.map_err(TravelError::BeforeHook)?;
        }

        let updated = before + delta;
        *self.inner.offset.write() = updated;
        debug!(
            offset_ms = updated.num_milliseconds(),
            travel_by_ms = delta.num_milliseconds(),
            "travel offset committed"
        );

        let event = TravelEvent::new(updated, delta);
        for hook in self.inner.after.snapshot() {
            hook(event).await.map_err(TravelError::AfterHook)?;
        }

        Ok(())
    }
}

impl Default for TravelClock {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TravelClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravelClock")
            .field("enabled", &self.is_enabled())
            .field("offset", &self.current_offset())
            .finish_non_exhaustive()
    }
}

fn box_hook<F, Fut>(hook: F) -> Arc<TravelHook>
where
    F: Fn(TravelEvent) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HookError>> + Send + 'static,
{
    Arc::new(move |event| -> HookFuture { Box::pin(hook(event)) })
}
