//! Offset resolution through chrono zones and custom providers.

#![cfg(feature = "chrono")]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use chrono_tz::America::New_York;
use chrono_tz::Europe::London;
use solar_twilight::{
    event, DailySunTimes, Error, HalfDay, Location, SunAltitudeThreshold, UtcOffsetProvider,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn minutes_after_midnight(at: NaiveDateTime) -> i64 {
    at.signed_duration_since(at.date().and_hms_opt(0, 0, 0).unwrap())
        .num_minutes()
}

#[test]
fn summer_time_shifts_local_sunrise() {
    let location = Location::new(52.1311, 0.1323, London).unwrap();

    let before = DailySunTimes::for_location(&location, date(2024, 3, 30)).unwrap();
    let after = DailySunTimes::for_location(&location, date(2024, 3, 31)).unwrap();

    let shift = minutes_after_midnight(after.sunrise().unwrap())
        - minutes_after_midnight(before.sunrise().unwrap());
    assert!((55..=60).contains(&shift), "sunrise moved {shift} minutes");
}

#[test]
fn midsummer_sunrise_is_reported_in_british_summer_time() {
    let location = Location::new(52.1311, 0.1323, London).unwrap();
    let times = DailySunTimes::for_location(&location, date(2024, 6, 21)).unwrap();

    let sunrise = minutes_after_midnight(times.sunrise().unwrap());
    let sunset = minutes_after_midnight(times.sunset().unwrap());
    assert!((4 * 60 + 35..4 * 60 + 46).contains(&sunrise), "{sunrise}");
    assert!((21 * 60 + 15..21 * 60 + 27).contains(&sunset), "{sunset}");
}

#[test]
fn west_longitude_sunset_stays_on_local_date() {
    // New York summer sunset is after midnight UTC.
    let day = date(2024, 6, 21);
    let sunset = event::event_timestamp(
        40.7128,
        -74.006,
        day,
        SunAltitudeThreshold::Official,
        HalfDay::Evening,
        &New_York,
    )
    .unwrap()
    .unwrap();
    assert_eq!(sunset.date(), day);
    let minutes = minutes_after_midnight(sunset);
    assert!((20 * 60 + 24..20 * 60 + 35).contains(&minutes), "{sunset}");
}

/// Offset provider for a zone database that has no data for the requested instants.
struct Unavailable;

impl UtcOffsetProvider for Unavailable {
    fn utc_offset_hours(&self, _utc: NaiveDateTime) -> solar_twilight::Result<f64> {
        Err(Error::timezone_resolution("zone data not loaded"))
    }
}

#[test]
fn provider_failures_propagate() {
    let day = date(2024, 3, 20);
    let err = DailySunTimes::compute(day, 52.1311, 0.1323, &Unavailable).unwrap_err();
    assert!(matches!(err, Error::TimezoneResolution { .. }), "{err}");
    assert!(!err.is_invalid_coordinate());
}

#[test]
fn provider_is_not_consulted_for_absent_events() {
    // Every crossing is absent near the pole in December, so no offset is needed.
    let times = DailySunTimes::compute(date(2024, 12, 21), 89.0, 0.0, &Unavailable).unwrap();
    assert!(times.is_polar());
}

/// Offset provider with a half-hour zone, as used in parts of India and Australia.
struct HalfHour(f64);

impl UtcOffsetProvider for HalfHour {
    fn utc_offset_hours(&self, _utc: NaiveDateTime) -> solar_twilight::Result<f64> {
        Ok(self.0)
    }
}

#[test]
fn fractional_offsets_are_applied() {
    let day = date(2024, 3, 20);
    let utc = DailySunTimes::compute(day, 28.6139, 77.209, &chrono::Utc).unwrap();
    let india = DailySunTimes::compute(day, 28.6139, 77.209, &HalfHour(5.5)).unwrap();

    let (Some(utc_sunset), Some(local_sunset)) = (utc.sunset(), india.sunset()) else {
        panic!("Delhi has a sunset in March");
    };
    assert_eq!(
        local_sunset.signed_duration_since(utc_sunset),
        Duration::minutes(330)
    );
}

#[cfg(feature = "serde")]
#[test]
fn daily_times_serialize_round_trip() {
    let times = DailySunTimes::compute(date(2024, 3, 20), 52.1311, 0.1323, &London).unwrap();
    let json = serde_json::to_string(&times).unwrap();
    let restored: DailySunTimes = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, times);
}
