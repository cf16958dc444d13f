//! Travel notification payload.

use chrono::TimeDelta;

/// Immutable description of a single travel operation, delivered to
/// subscribers around the offset mutation.
///
/// Before-travel subscribers receive the offset still in effect; after-travel
/// subscribers receive the already-updated offset. Both phases carry the same
/// delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TravelEvent {
    /// Offset in effect when this event was constructed.
    pub current_offset: TimeDelta,

    /// Signed amount the travel shifts the offset by.
    pub travel_by: TimeDelta,
}

impl TravelEvent {
    /// Creates a travel event for one notification phase.
    #[inline]
    pub fn new(current_offset: TimeDelta, travel_by: TimeDelta) -> Self {
        Self {
            current_offset,
            travel_by,
        }
    }
}
