//! Timestamp of a single sun altitude threshold crossing.
//!
//! Implements the approximate sunrise equation from the Almanac for Computers
//! (United States Naval Observatory, 1990), generalized to arbitrary zenith angles so the
//! same routine serves sunrise/sunset, the three twilights and the golden/blue hour edges.
//! Accuracy is on the order of a minute for latitudes outside the polar circles.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::error::{check_coordinates, check_day_of_year};
use crate::math::{
    acos, asin, atan, cos, cos_deg, floor, normalize, radians_to_degrees, degrees_to_radians,
    sin, sin_deg, tan,
};
use crate::{EventHours, HalfDay, Result, SunAltitudeThreshold};

#[cfg(feature = "chrono")]
use crate::time::UtcOffsetProvider;
#[cfg(feature = "chrono")]
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta};

/// Sun's mean anomaly rate in degrees per day.
const MEAN_ANOMALY_RATE: f64 = 0.9856;

/// Sun's mean anomaly at the reference epoch in degrees.
const MEAN_ANOMALY_OFFSET: f64 = 3.289;

/// Longitude of perihelion plus 180° in degrees.
const PERIHELION_LONGITUDE: f64 = 282.634;

/// Cosine of the obliquity of the ecliptic.
const COS_OBLIQUITY: f64 = 0.91764;

/// Sine of the obliquity of the ecliptic.
const SIN_OBLIQUITY: f64 = 0.39782;

/// Sidereal drift in hours per day.
const SIDEREAL_DRIFT: f64 = 0.06571;

/// Local mean time offset in hours.
const LOCAL_MEAN_TIME_OFFSET: f64 = 6.622;

/// Calculate the UT hours of a threshold crossing for an ordinal day of the year.
///
/// This is the calendar-free core used by [`event_timestamp`]. The returned
/// [`EventHours`] carries the day shift needed when the longitude puts the crossing on the
/// neighbouring UTC day.
///
/// # Arguments
/// * `day_of_year` - Ordinal day of the calculation date (1-366)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `threshold` - Sun elevation threshold to find the crossing of
/// * `half_day` - Morning (ascending) or evening (descending) crossing
///
/// # Returns
/// `Ok(None)` when the sun never reaches the threshold that day (polar day or night).
///
/// # Errors
/// Returns error for invalid coordinates or an out-of-range day of year.
///
/// # Example
/// ```
/// use solar_twilight::{event, HalfDay, SunAltitudeThreshold};
///
/// // London, around the March equinox
/// let sunrise = event::event_hours_utc(
///     80,
///     52.1311,
///     0.1323,
///     SunAltitudeThreshold::Official,
///     HalfDay::Morning,
/// )
/// .unwrap()
/// .expect("the sun rises in London in March");
/// assert!((5.5..6.5).contains(&sunrise.hours()));
/// assert_eq!(sunrise.day_offset(), 0);
/// ```
pub fn event_hours_utc(
    day_of_year: u32,
    latitude: f64,
    longitude: f64,
    threshold: SunAltitudeThreshold,
    half_day: HalfDay,
) -> Result<Option<EventHours>> {
    check_coordinates(latitude, longitude)?;
    check_day_of_year(day_of_year)?;

    let lng_hour = longitude / 15.0;
    let t = f64::from(day_of_year) + (half_day.approximate_hour() - lng_hour) / 24.0;

    let mean_anomaly = MEAN_ANOMALY_RATE * t - MEAN_ANOMALY_OFFSET;
    let true_longitude = sun_true_longitude(mean_anomaly);
    let right_ascension = right_ascension_hours(true_longitude);

    let sin_dec = SIN_OBLIQUITY * sin_deg(true_longitude);
    let cos_dec = cos(asin(sin_dec));

    let cos_h = (cos_deg(threshold.zenith()) - sin_dec * sin_deg(latitude))
        / (cos_dec * cos_deg(latitude));
    if !(-1.0..=1.0).contains(&cos_h) {
        log::trace!(
            "no {threshold:?} {half_day:?} crossing on day {day_of_year} \
             at {latitude}°, {longitude}°"
        );
        return Ok(None);
    }

    let hour_angle_degrees = match half_day {
        HalfDay::Morning => 360.0 - radians_to_degrees(acos(cos_h)),
        HalfDay::Evening => radians_to_degrees(acos(cos_h)),
    };
    let hour_angle = hour_angle_degrees / 15.0;

    let ut = normalize(
        hour_angle + right_ascension - SIDEREAL_DRIFT * t - LOCAL_MEAN_TIME_OFFSET - lng_hour,
        24.0,
    );

    Ok(Some(EventHours::new(
        day_shift(lng_hour, ut, half_day),
        ut,
    )))
}

/// Sun's true longitude in degrees [0, 360) from its mean anomaly.
fn sun_true_longitude(mean_anomaly: f64) -> f64 {
    normalize(
        mean_anomaly
            + 1.916 * sin_deg(mean_anomaly)
            + 0.020 * sin_deg(2.0 * mean_anomaly)
            + PERIHELION_LONGITUDE,
        360.0,
    )
}

/// Sun's right ascension in hours, placed in the same quadrant as the true longitude.
fn right_ascension_hours(true_longitude: f64) -> f64 {
    let mut ra = normalize(
        radians_to_degrees(atan(COS_OBLIQUITY * tan(degrees_to_radians(true_longitude)))),
        360.0,
    );
    let l_quadrant = floor(true_longitude / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;
    ra += l_quadrant - ra_quadrant;
    ra / 15.0
}

/// Day correction for crossings that fall on the neighbouring UTC day.
///
/// East of Greenwich a morning crossing late in UT belongs to the previous UTC day;
/// west of Greenwich an evening crossing early in UT belongs to the next one.
fn day_shift(lng_hour: f64, ut: f64, half_day: HalfDay) -> i8 {
    match half_day {
        HalfDay::Morning if lng_hour > 0.0 && ut > 12.0 => -1,
        HalfDay::Evening if lng_hour < 0.0 && ut < 12.0 => 1,
        _ => 0,
    }
}

/// Calculate the local timestamp of a threshold crossing on a calendar date.
///
/// The day of year is taken from `date`. The UTC crossing is shifted into local wall-clock
/// time with the offset that `offsets` reports for that instant, so daylight saving time on
/// the queried date is honoured.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `date` - Calendar date of the calculation
/// * `threshold` - Sun elevation threshold to find the crossing of
/// * `half_day` - Morning (ascending) or evening (descending) crossing
/// * `offsets` - Resolver for the UTC offset at the crossing instant
///
/// # Returns
/// `Ok(None)` when the sun never reaches the threshold that day.
///
/// # Errors
/// Returns error for invalid coordinates, an offset provider failure, or a shifted
/// timestamp outside chrono's range.
///
/// # Example
/// ```rust
/// use chrono::{NaiveDate, Timelike};
/// use solar_twilight::{event, HalfDay, SunAltitudeThreshold};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let tokyo = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
/// let sunrise = event::event_timestamp(
///     35.6762,
///     139.6503,
///     date,
///     SunAltitudeThreshold::Official,
///     HalfDay::Morning,
///     &tokyo,
/// )
/// .unwrap()
/// .unwrap();
/// assert_eq!(sunrise.date(), date);
/// assert_eq!(sunrise.hour(), 4);
/// ```
#[cfg(feature = "chrono")]
pub fn event_timestamp<P: UtcOffsetProvider + ?Sized>(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    threshold: SunAltitudeThreshold,
    half_day: HalfDay,
    offsets: &P,
) -> Result<Option<NaiveDateTime>> {
    let Some(hours) = event_hours_utc(date.ordinal(), latitude, longitude, threshold, half_day)?
    else {
        return Ok(None);
    };

    let event_date = match hours.day_offset() {
        -1 => date.checked_sub_days(Days::new(1)),
        1 => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
    .ok_or(crate::Error::invalid_datetime("shifted event date out of range"))?;

    let utc = event_date.and_time(chrono::NaiveTime::MIN)
        + TimeDelta::seconds(i64::from(hours.seconds_of_day()));

    let offset_hours = offsets.utc_offset_hours(utc)?;
    let offset = TimeDelta::try_seconds(crate::time::hours_to_seconds(offset_hours))
        .ok_or(crate::Error::timezone_resolution("offset out of range"))?;

    utc.checked_add_signed(offset)
        .map(Some)
        .ok_or(crate::Error::invalid_datetime("local event time out of range"))
}
