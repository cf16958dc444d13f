//! Timeline conversion facade over a shared [`TravelClock`].
//!
//! Application code reads "now" through this facade and, at the boundary to
//! external systems (persisted timestamps, third-party APIs), converts between
//! the virtual timeline and the real one. Every call consults the clock's
//! current state; nothing here caches or mutates.
//!
//! At a fixed offset the conversions are exact additive inverses:
//! `to_real_time(from_real_time(x)) == x` for any timestamp, timezone, and
//! offset, at nanosecond precision.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::clock::TravelClock;

/// Read-side view of the virtual timeline.
///
/// Holds a [`TravelClock::share`] handle; construct one per consumer or pass
/// it around, both are cheap.
pub struct AppTime {
    clock: TravelClock,
}

impl AppTime {
    /// Creates a facade over a handle to `clock`.
    pub fn new(clock: &TravelClock) -> Self {
        Self {
            clock: clock.share(),
        }
    }

    /// The clock this facade reads from.
    #[inline]
    pub fn clock(&self) -> &TravelClock {
        &self.clock
    }

    /// Local-timezone now on the virtual timeline.
    #[inline]
    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// UTC now on the virtual timeline.
    #[inline]
    pub fn utc_now(&self) -> DateTime<Utc> {
        self.clock.utc_now()
    }

    /// The virtual date in local time, truncated to the day.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Maps a virtual-timeline timestamp back onto the real timeline.
    ///
    /// Identity while the clock is disabled. Generic over the timezone, so
    /// UTC, local, and fixed-offset timestamps all convert through the same
    /// call.
    pub fn to_real_time<Tz: TimeZone>(&self, app_time: DateTime<Tz>) -> DateTime<Tz> {
        if self.clock.is_enabled() {
            app_time - self.clock.current_offset()
        } else {
            app_time
        }
    }

    /// Maps a real-timeline timestamp onto the virtual timeline.
    ///
    /// Identity while the clock is disabled; inverse of
    /// [`AppTime::to_real_time`] at any fixed offset.
    pub fn from_real_time<Tz: TimeZone>(&self, real_time: DateTime<Tz>) -> DateTime<Tz> {
        if self.clock.is_enabled() {
            real_time + self.clock.current_offset()
        } else {
            real_time
        }
    }

    /// [`AppTime::to_real_time`] for optional timestamps. An absent input
    /// short-circuits to an absent output without touching the clock.
    pub fn to_real_time_opt<Tz: TimeZone>(
        &self,
        app_time: Option<DateTime<Tz>>,
    ) -> Option<DateTime<Tz>> {
        app_time.map(|stamp| self.to_real_time(stamp))
    }

    /// [`AppTime::from_real_time`] for optional timestamps, with the same
    /// short-circuit on absent input.
    pub fn from_real_time_opt<Tz: TimeZone>(
        &self,
        real_time: Option<DateTime<Tz>>,
    ) -> Option<DateTime<Tz>> {
        real_time.map(|stamp| self.from_real_time(stamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta};
    use proptest::prelude::*;

    fn travelled_clock(offset: TimeDelta) -> TravelClock {
        let clock = TravelClock::with_initial_offset(offset);
        clock.set_enabled(true);
        clock
    }

    #[test]
    fn disabled_conversions_are_identity() {
        let clock = TravelClock::with_initial_offset(TimeDelta::days(14));
        let app_time = AppTime::new(&clock);
        let stamp = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();

        assert_eq!(app_time.to_real_time(stamp), stamp);
        assert_eq!(app_time.from_real_time(stamp), stamp);
    }

    #[test]
    fn enabled_conversions_shift_by_the_offset() {
        let offset = TimeDelta::days(3);
        let app_time = AppTime::new(&travelled_clock(offset));
        let stamp = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        assert_eq!(app_time.to_real_time(stamp), stamp - offset);
        assert_eq!(app_time.from_real_time(stamp), stamp + offset);
    }

    #[test]
    fn conversions_cover_fixed_offset_timezones() {
        let offset = TimeDelta::hours(-7) + TimeDelta::milliseconds(125);
        let app_time = AppTime::new(&travelled_clock(offset));

        let stockholm = FixedOffset::east_opt(3600).unwrap();
        let stamp = stockholm.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();

        let real = app_time.to_real_time(stamp);
        assert_eq!(real, stamp - offset);
        assert_eq!(real.timezone(), stockholm);
        assert_eq!(app_time.from_real_time(real), stamp);
    }

    #[test]
    fn optional_variants_short_circuit_on_absent_input() {
        let enabled = AppTime::new(&travelled_clock(TimeDelta::days(3)));
        let disabled = AppTime::new(&TravelClock::with_initial_offset(TimeDelta::days(3)));

        assert_eq!(enabled.to_real_time_opt::<Utc>(None), None);
        assert_eq!(enabled.from_real_time_opt::<Utc>(None), None);
        assert_eq!(disabled.to_real_time_opt::<Utc>(None), None);
        assert_eq!(disabled.from_real_time_opt::<Utc>(None), None);
    }

    #[test]
    fn optional_variants_convert_present_input() {
        let offset = TimeDelta::minutes(90);
        let app_time = AppTime::new(&travelled_clock(offset));
        let stamp = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        assert_eq!(app_time.to_real_time_opt(Some(stamp)), Some(stamp - offset));
        assert_eq!(
            app_time.from_real_time_opt(Some(stamp)),
            Some(stamp + offset)
        );
    }

    #[test]
    fn today_reflects_the_virtual_date() {
        let offset = TimeDelta::days(3);
        let app_time = AppTime::new(&travelled_clock(offset));

        // Bracket the call; a midnight rollover lands on either sample.
        let lower = (Local::now() + offset).date_naive();
        let virtual_today = app_time.today();
        let upper = (Local::now() + offset).date_naive();

        assert!(virtual_today == lower || virtual_today == upper);
    }

    #[tokio::test]
    async fn three_day_trip_and_back() {
        let clock = TravelClock::new();
        clock.set_enabled(true);
        let app_time = AppTime::new(&clock);

        clock.travel_by(TimeDelta::days(3)).await.unwrap();
        assert_eq!(clock.current_offset(), TimeDelta::days(3));

        let lower = (Local::now() + TimeDelta::days(3)).date_naive();
        let virtual_today = app_time.today();
        let upper = (Local::now() + TimeDelta::days(3)).date_naive();
        assert!(virtual_today == lower || virtual_today == upper);

        let drift = app_time.to_real_time(app_time.utc_now()) - Utc::now();
        assert!(drift.abs() < TimeDelta::seconds(5));

        clock.reset_to_home().await.unwrap();
        assert_eq!(clock.current_offset(), TimeDelta::zero());
    }

    proptest! {
        #[test]
        fn conversions_invert_for_any_offset(
            offset_ms in -1_000_000_000_000i64..1_000_000_000_000i64,
            stamp_secs in -2_000_000_000i64..2_000_000_000i64,
        ) {
            let app_time = AppTime::new(&travelled_clock(TimeDelta::milliseconds(offset_ms)));
            let stamp = Utc.timestamp_opt(stamp_secs, 0).unwrap();

            prop_assert_eq!(app_time.to_real_time(app_time.from_real_time(stamp)), stamp);
            prop_assert_eq!(app_time.from_real_time(app_time.to_real_time(stamp)), stamp);
        }

        #[test]
        fn disabled_conversions_ignore_any_offset(
            offset_ms in -1_000_000_000_000i64..1_000_000_000_000i64,
            stamp_secs in -2_000_000_000i64..2_000_000_000i64,
        ) {
            let clock = TravelClock::with_initial_offset(TimeDelta::milliseconds(offset_ms));
            let app_time = AppTime::new(&clock);
            let stamp = Utc.timestamp_opt(stamp_secs, 0).unwrap();

            prop_assert_eq!(app_time.to_real_time(stamp), stamp);
            prop_assert_eq!(app_time.from_real_time(stamp), stamp);
        }
    }
}
