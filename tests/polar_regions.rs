//! Polar day and polar night behaviour at extreme latitudes.

#![cfg(feature = "chrono")]

use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::America::Nuuk;
use chrono_tz::Antarctica::McMurdo;
use solar_twilight::{period, DailySunTimes, DayPeriod, HalfDay, Location, SunAltitudeThreshold};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).unwrap()
}

#[test]
fn greenland_polar_day_in_june() {
    let location = Location::new(83.58, -30.0, Nuuk).unwrap();
    let day = date(2024, 6, 21);
    let times = DailySunTimes::for_location(&location, day).unwrap();

    assert!(times.is_polar(), "{times:?}");
    for hour in [0, 6, 12, 18, 23] {
        for mode in [false, true] {
            assert_eq!(
                period::current_period(&times, &location, at(day, hour), mode),
                DayPeriod::Day
            );
        }
    }
    assert_eq!(period::day_length_seconds(&times, &location), 86_400);
    assert!(period::is_polar_day(&times, &location));
}

#[test]
fn greenland_december_keeps_only_astronomical_twilight() {
    // At 83.58°N the December sun still climbs above 18° below the horizon at noon.
    let location = Location::new(83.58, -30.0, Nuuk).unwrap();
    let day = date(2024, 12, 21);
    let times = DailySunTimes::for_location(&location, day).unwrap();

    assert_eq!(times.sunrise(), None);
    assert_eq!(times.sunset(), None);
    assert_eq!(times.morning_6_below(), None);
    assert_eq!(times.morning_12_below(), None);
    assert!(times.morning_18_below().is_some());
    assert!(times.evening_18_below().is_some());

    assert_eq!(
        period::current_period(&times, &location, at(day, 1), false),
        DayPeriod::Night
    );
    assert_eq!(
        period::current_period(&times, &location, at(day, 23), false),
        DayPeriod::Night
    );
    assert_eq!(period::day_length_seconds(&times, &location), 0);
    assert!(!period::is_polar_day(&times, &location));
}

#[test]
fn near_pole_polar_night_has_no_events() {
    let location = Location::new(89.0, 0.0, Utc).unwrap();
    let day = date(2024, 12, 21);
    let times = DailySunTimes::for_location(&location, day).unwrap();

    assert!(times.is_polar());
    for hour in [0, 12, 23] {
        assert_eq!(
            period::current_period(&times, &location, at(day, hour), true),
            DayPeriod::Night
        );
    }
    assert_eq!(period::day_length_seconds(&times, &location), 0);
}

#[test]
fn antarctica_seasons_are_mirrored() {
    let location = Location::new(-77.85, 166.67, McMurdo).unwrap();

    let summer = date(2024, 12, 21);
    let times = DailySunTimes::for_location(&location, summer).unwrap();
    assert!(times.is_polar());
    assert_eq!(
        period::current_period(&times, &location, at(summer, 12), false),
        DayPeriod::Day
    );
    assert_eq!(period::day_length_seconds(&times, &location), 86_400);

    // In June the sun stays more than 6° below the horizon; nautical twilight spans noon.
    let winter = date(2024, 6, 21);
    let times = DailySunTimes::for_location(&location, winter).unwrap();
    assert_eq!(times.sunrise(), None);
    assert_eq!(times.morning_6_below(), None);
    assert!(times.morning_12_below().is_some());
    assert_eq!(
        period::current_period(&times, &location, at(winter, 2), false),
        DayPeriod::Night
    );
    assert_eq!(
        period::current_period(&times, &location, at(winter, 12), false),
        DayPeriod::Nautical
    );
    assert_eq!(period::day_length_seconds(&times, &location), 0);
}

#[test]
fn midnight_sun_with_low_sun_is_golden_hour_overnight() {
    // Tromsø in early June: the sun never sets but dips below 6° around midnight.
    let location = Location::new(69.65, 18.96, Utc).unwrap();
    let day = date(2024, 6, 5);
    let times = DailySunTimes::for_location(&location, day).unwrap();

    assert_eq!(times.sunrise(), None);
    assert!(times.get(SunAltitudeThreshold::GoldenHourAbove, HalfDay::Morning).is_some());
    assert!(times.get(SunAltitudeThreshold::GoldenHourAbove, HalfDay::Evening).is_some());

    assert_eq!(
        period::current_period(&times, &location, at(day, 0), true),
        DayPeriod::GoldenHour
    );
    assert_eq!(
        period::current_period(&times, &location, at(day, 12), true),
        DayPeriod::Day
    );
    assert_eq!(
        period::current_period(&times, &location, at(day, 0), false),
        DayPeriod::Day
    );
}

#[test]
fn polar_boundary_latitudes_stay_consistent() {
    // Sweep across the Arctic circle: sunrise precedes sunset whenever both occur.
    let day = date(2024, 6, 10);
    for step in 0..=60 {
        let latitude = 60.0 + f64::from(step) * 0.5;
        let times = DailySunTimes::compute(day, latitude, 15.0, &Utc).unwrap();
        if let (Some(sunrise), Some(sunset)) = (times.sunrise(), times.sunset()) {
            assert!(sunrise < sunset, "latitude {latitude}");
        }
        let length = period::day_length_seconds(
            &times,
            &Location::new(latitude, 15.0, Utc).unwrap(),
        );
        assert!((0..=86_400).contains(&length), "latitude {latitude}: {length}");
    }
}
