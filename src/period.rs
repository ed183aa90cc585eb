//! Classification of an instant into a named period of the day.
//!
//! All functions here are total over well-formed [`DailySunTimes`] records. Absent
//! timestamps (polar regions) are handled by open-ended windows and, when nothing at all
//! applies, by a seasonal fallback anchored on fixed solstice dates.

use crate::time::{
    is_nearer_june_solstice, END_OF_DAY_SENTINEL, SECONDS_PER_DAY, START_OF_DAY_SENTINEL,
};
use crate::{DailySunTimes, DayMode, DayPeriod, HalfDay, Location, SunAltitudeThreshold, SunEvent};
use chrono::{NaiveDateTime, NaiveTime};

/// Half-open interval bounded by two optional timestamps.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl Span {
    const fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    fn contains_closed(&self, now: NaiveDateTime) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start <= now && now < end)
    }
}

/// A period made of a morning span and an evening span.
///
/// A morning span without a start is open towards midnight, an evening span without an end
/// is open towards the next midnight. When both inner edges are missing the two spans merge
/// into one stretching across midday.
#[derive(Debug, Clone, Copy)]
struct Window {
    morning: Span,
    evening: Span,
}

impl Window {
    fn contains(&self, now: NaiveDateTime) -> bool {
        let morning = self.morning.contains_closed(now)
            || matches!((self.morning.start, self.morning.end), (None, Some(end)) if now < end);
        let evening = self.evening.contains_closed(now)
            || matches!(
                (self.evening.start, self.evening.end),
                (Some(start), None) if now >= start
            );
        let midday = match (
            self.morning.start,
            self.morning.end,
            self.evening.start,
            self.evening.end,
        ) {
            (Some(start), None, None, Some(end)) => start <= now && now < end,
            _ => false,
        };
        morning || evening || midday
    }
}

fn astronomical_window(times: &DailySunTimes) -> Window {
    Window {
        morning: Span::new(times.morning_18_below(), times.morning_12_below()),
        evening: Span::new(times.evening_12_below(), times.evening_18_below()),
    }
}

fn nautical_window(times: &DailySunTimes) -> Window {
    Window {
        morning: Span::new(times.morning_12_below(), times.morning_6_below()),
        evening: Span::new(times.evening_6_below(), times.evening_12_below()),
    }
}

fn civil_window(times: &DailySunTimes) -> Window {
    Window {
        morning: Span::new(times.morning_6_below(), times.sunrise()),
        evening: Span::new(times.sunset(), times.evening_6_below()),
    }
}

fn golden_hour_window(times: &DailySunTimes) -> Window {
    Window {
        morning: Span::new(times.morning_4_below(), times.morning_6_above()),
        evening: Span::new(times.evening_6_above(), times.evening_4_below()),
    }
}

fn blue_hour_window(times: &DailySunTimes) -> Window {
    Window {
        morning: Span::new(times.morning_6_below(), times.morning_4_below()),
        evening: Span::new(times.evening_4_below(), times.evening_6_below()),
    }
}

/// Determine which period of the day `now` falls into.
///
/// # Arguments
/// * `today` - Sun times for the local date of `now`
/// * `location` - Observer location; only its hemisphere is used here
/// * `now` - Local wall-clock time at the location
/// * `golden_blue_hour_mode` - Report golden and blue hours instead of civil twilight
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use solar_twilight::{period, DailySunTimes, DayPeriod, Location};
///
/// let location = Location::new(52.1311, 0.1323, chrono::Utc).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let times = DailySunTimes::for_location(&location, date).unwrap();
///
/// let noon = date.and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(period::current_period(&times, &location, noon, false), DayPeriod::Day);
///
/// let midnight = date.and_hms_opt(0, 30, 0).unwrap();
/// assert_eq!(period::current_period(&times, &location, midnight, false), DayPeriod::Night);
/// ```
#[must_use]
pub fn current_period<Z>(
    today: &DailySunTimes,
    location: &Location<Z>,
    now: NaiveDateTime,
    golden_blue_hour_mode: bool,
) -> DayPeriod {
    let before_dawn = today.morning_18_below().is_some_and(|start| now < start);
    let after_dusk = today.evening_18_below().is_some_and(|end| now >= end);
    if before_dawn || after_dusk {
        return DayPeriod::Night;
    }

    if astronomical_window(today).contains(now) {
        return DayPeriod::Astronomical;
    }
    if nautical_window(today).contains(now) {
        return DayPeriod::Nautical;
    }

    if golden_blue_hour_mode {
        if golden_hour_window(today).contains(now) {
            return DayPeriod::GoldenHour;
        }
        if blue_hour_window(today).contains(now) {
            return DayPeriod::BlueHour;
        }
        if Span::new(today.morning_6_above(), today.evening_6_above()).contains_closed(now) {
            return DayPeriod::Day;
        }
    } else {
        if civil_window(today).contains(now) {
            return DayPeriod::Civil;
        }
        if Span::new(today.sunrise(), today.sunset()).contains_closed(now) {
            return DayPeriod::Day;
        }
    }

    let period = polar_period(location.latitude(), now);
    log::debug!(
        "{now}: no sun event bounds the current period, seasonal fallback gives {period:?}"
    );
    period
}

/// Polar day or polar night, judged by the nearer solstice anchor and the hemisphere.
fn polar_period(latitude: f64, now: NaiveDateTime) -> DayPeriod {
    let northern = latitude > 0.0;
    match (is_nearer_june_solstice(now), northern) {
        (true, true) | (false, false) => DayPeriod::Day,
        (true, false) | (false, true) => DayPeriod::Night,
    }
}

/// Checks whether the day has no sun events and falls in the polar day season.
#[must_use]
pub fn is_polar_day<Z>(today: &DailySunTimes, location: &Location<Z>) -> bool {
    today.is_polar()
        && polar_period(location.latitude(), today.date().and_time(NaiveTime::MIN))
            == DayPeriod::Day
}

/// The events bounding a period on one side of the day; `None` is the edge of the day.
const fn boundary_events(
    period: DayPeriod,
    day_mode: DayMode,
) -> (Option<SunEvent>, Option<SunEvent>) {
    use SunAltitudeThreshold::{
        Astronomical, Civil, GoldenHourAbove, GoldenHourBelow, Nautical, Official,
    };

    const fn morning(threshold: SunAltitudeThreshold) -> Option<SunEvent> {
        Some(SunEvent::new(threshold, HalfDay::Morning))
    }
    const fn evening(threshold: SunAltitudeThreshold) -> Option<SunEvent> {
        Some(SunEvent::new(threshold, HalfDay::Evening))
    }

    match (period, day_mode) {
        (DayPeriod::Night, DayMode::Sunrise) => (None, morning(Astronomical)),
        (DayPeriod::Night, DayMode::Sunset) => (evening(Astronomical), None),
        (DayPeriod::Astronomical, DayMode::Sunrise) => (morning(Astronomical), morning(Nautical)),
        (DayPeriod::Astronomical, DayMode::Sunset) => (evening(Nautical), evening(Astronomical)),
        (DayPeriod::Nautical, DayMode::Sunrise) => (morning(Nautical), morning(Civil)),
        (DayPeriod::Nautical, DayMode::Sunset) => (evening(Civil), evening(Nautical)),
        (DayPeriod::Civil, DayMode::Sunrise) => (morning(Civil), morning(Official)),
        (DayPeriod::Civil, DayMode::Sunset) => (evening(Official), evening(Civil)),
        (DayPeriod::Day, _) => (morning(Official), evening(Official)),
        (DayPeriod::GoldenHour, DayMode::Sunrise) => {
            (morning(GoldenHourBelow), morning(GoldenHourAbove))
        }
        (DayPeriod::GoldenHour, DayMode::Sunset) => {
            (evening(GoldenHourAbove), evening(GoldenHourBelow))
        }
        (DayPeriod::BlueHour, DayMode::Sunrise) => (morning(Civil), morning(GoldenHourBelow)),
        (DayPeriod::BlueHour, DayMode::Sunset) => (evening(GoldenHourBelow), evening(Civil)),
    }
}

fn boundary_time(today: &DailySunTimes, event: Option<SunEvent>, fallback: NaiveTime) -> NaiveTime {
    event
        .and_then(|event| today.get(event.threshold, event.half_day))
        .map_or(fallback, |at| at.time())
}

/// Time of day at which `period` begins on the `day_mode` side of the day.
///
/// Falls back to one nanosecond past midnight when the bounding event is absent.
///
/// # Example
/// ```rust
/// use chrono::{NaiveDate, NaiveTime};
/// use solar_twilight::{period, DailySunTimes, DayMode, DayPeriod};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let empty = DailySunTimes::empty(date);
/// assert_eq!(
///     period::period_start_time(&empty, DayPeriod::Civil, DayMode::Sunrise),
///     NaiveTime::from_hms_nano_opt(0, 0, 0, 1).unwrap()
/// );
/// ```
#[must_use]
pub fn period_start_time(today: &DailySunTimes, period: DayPeriod, day_mode: DayMode) -> NaiveTime {
    let (start, _) = boundary_events(period, day_mode);
    boundary_time(today, start, START_OF_DAY_SENTINEL)
}

/// Time of day at which `period` ends on the `day_mode` side of the day.
///
/// Falls back to the last nanosecond of the day when the bounding event is absent.
#[must_use]
pub fn period_end_time(today: &DailySunTimes, period: DayPeriod, day_mode: DayMode) -> NaiveTime {
    let (_, end) = boundary_events(period, day_mode);
    boundary_time(today, end, END_OF_DAY_SENTINEL)
}

/// Length of the day from sunrise to sunset, in seconds.
///
/// A polar day counts as a full 86 400 seconds; any other day without both sunrise and
/// sunset counts as zero.
#[must_use]
pub fn day_length_seconds<Z>(today: &DailySunTimes, location: &Location<Z>) -> i64 {
    match (today.sunrise(), today.sunset()) {
        (Some(sunrise), Some(sunset)) => sunset.signed_duration_since(sunrise).num_seconds(),
        _ if is_polar_day(today, location) => SECONDS_PER_DAY,
        _ => 0,
    }
}

/// Change in day length from `today` to `other`, in seconds.
///
/// Positive when `other` is longer.
#[must_use]
pub fn day_length_delta_seconds<Z>(
    today: &DailySunTimes,
    other: &DailySunTimes,
    location: &Location<Z>,
) -> i64 {
    day_length_seconds(other, location) - day_length_seconds(today, location)
}
