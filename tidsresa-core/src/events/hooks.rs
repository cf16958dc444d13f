//! Subscriber registration and dispatch plumbing for travel notifications.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::HookError;
use crate::events::travel::TravelEvent;

/// Future returned by a travel subscriber.
pub type HookFuture = Pin<Box<dyn Future<Output = Result<(), HookError>> + Send>>;

/// A registered travel subscriber for one phase.
pub(crate) type TravelHook = dyn Fn(TravelEvent) -> HookFuture + Send + Sync;

/// Registration-ordered subscriber list for one travel phase.
///
/// Dispatch iterates a snapshot taken at phase start, so a registration racing
/// an in-flight travel does not join that travel mid-phase.
#[derive(Default)]
pub(crate) struct HookRegistry {
    hooks: RwLock<Vec<Arc<TravelHook>>>,
}

impl HookRegistry {
    pub(crate) fn register(&self, hook: Arc<TravelHook>) {
        self.hooks.write().push(hook);
    }

    pub(crate) fn snapshot(&self) -> Vec<Arc<TravelHook>> {
        self.hooks.read().clone()
    }
}
