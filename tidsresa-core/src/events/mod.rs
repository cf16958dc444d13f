//! ## tidsresa-core::events
//! **Travel notification payloads and subscriber plumbing**
//!
//! A travel operation fires two notification phases: "before" (offset still
//! unchanged) and "after" (offset already committed). Each phase holds a
//! registration-ordered list of asynchronous subscribers that the clock awaits
//! sequentially. Subscribers observe; they cannot veto the travel.

pub mod hooks;
pub mod travel;

pub use hooks::HookFuture;
pub use travel::TravelEvent;
