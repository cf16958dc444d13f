//! # tidsresa-core
//!
//! Application-wide virtual clock with an adjustable travel offset.
//! A process shifts its perceived "now" forward or backward while code at the
//! boundary to external systems converts timestamps between the virtual
//! timeline and the real one.
//!
//! ### Expectations:
//! - Reads never suspend and never observe a torn offset
//! - Travels are serialized; concurrent travellers cannot lose updates
//! - Disabled means identity: virtual time equals real time until the clock
//!   is switched on
//!
//! ### Key Submodules:
//! - `clock`: [`TravelClock`] offset store with before/after travel observers
//! - `convert`: [`AppTime`] facade for virtual "now" and timeline conversion
//! - `events`: [`TravelEvent`] payload and subscriber plumbing

pub mod clock;
pub mod convert;
pub mod error;
pub mod events;

pub mod prelude {
    pub use crate::clock::*;
    pub use crate::convert::*;
    pub use crate::error::*;
    pub use crate::events::*;
}

pub use clock::TravelClock;
pub use convert::AppTime;
pub use error::{HookError, TravelError};
pub use events::TravelEvent;

// The time types consumers need to drive this API, so downstream crates do
// not have to pin a matching chrono themselves.
pub use chrono::{DateTime, Local, NaiveDate, TimeDelta, Utc};
