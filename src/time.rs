//! Calendar and timezone helpers for the chrono API.
//!
//! Offset resolution goes through [`UtcOffsetProvider`], implemented for every
//! `chrono::TimeZone`, so `Utc`, `FixedOffset` and `chrono_tz::Tz` can be passed directly.

use crate::math::floor;
use crate::Result;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};

/// Seconds per hour.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Calendar day used as the June solstice anchor.
const JUNE_SOLSTICE: (u32, u32) = (6, 22);

/// Calendar day used as the December solstice anchor.
const DECEMBER_SOLSTICE: (u32, u32) = (12, 22);

/// Earliest boundary reported when a period start has no timestamp.
pub const START_OF_DAY_SENTINEL: NaiveTime = match NaiveTime::from_hms_nano_opt(0, 0, 0, 1) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// Latest boundary reported when a period end has no timestamp.
pub const END_OF_DAY_SENTINEL: NaiveTime =
    match NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999) {
        Some(time) => time,
        None => NaiveTime::MIN,
    };

/// Resolves the UTC offset in effect at an instant.
///
/// Implementations must answer for the queried instant rather than the current time, so
/// that daylight saving transitions are reflected for past and future dates.
pub trait UtcOffsetProvider {
    /// Gets the offset from UTC in hours at the given UTC instant.
    ///
    /// # Errors
    /// Returns `TimezoneResolution` if the offset cannot be determined.
    fn utc_offset_hours(&self, utc: NaiveDateTime) -> Result<f64>;
}

impl<Tz: TimeZone> UtcOffsetProvider for Tz {
    fn utc_offset_hours(&self, utc: NaiveDateTime) -> Result<f64> {
        let seconds = self.offset_from_utc_datetime(&utc).fix().local_minus_utc();
        Ok(f64::from(seconds) / SECONDS_PER_HOUR)
    }
}

/// Converts an offset in hours to whole seconds, rounding to the nearest second.
pub(crate) fn hours_to_seconds(hours: f64) -> i64 {
    floor(hours * SECONDS_PER_HOUR + 0.5) as i64
}

/// Local midnight of the June solstice anchor (June 22) in the year of `now`.
///
/// The fixed calendar day is a deliberate approximation of the astronomical solstice.
#[must_use]
pub fn june_solstice(now: NaiveDateTime) -> NaiveDateTime {
    solstice_anchor(now.year(), JUNE_SOLSTICE)
}

/// Local midnight of the December solstice anchor (December 22) in the year of `now`.
#[must_use]
pub fn december_solstice(now: NaiveDateTime) -> NaiveDateTime {
    solstice_anchor(now.year(), DECEMBER_SOLSTICE)
}

fn solstice_anchor(year: i32, (month, day): (u32, u32)) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("June 22 and December 22 exist in every year")
        .and_time(NaiveTime::MIN)
}

/// Checks whether `now` is closer to the June solstice anchor than to the December one.
///
/// Distances are compared in whole seconds; a tie counts as December.
#[must_use]
pub fn is_nearer_june_solstice(now: NaiveDateTime) -> bool {
    let to_june = now.signed_duration_since(june_solstice(now)).num_seconds().abs();
    let to_december = now
        .signed_duration_since(december_solstice(now))
        .num_seconds()
        .abs();
    to_june < to_december
}
