//! Core data types for sun event and day period calculations.

use crate::error::check_coordinates;
use crate::math::floor;
use crate::Result;

/// Sun elevation angles whose crossings mark the events of a day.
///
/// Negative values are below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SunAltitudeThreshold {
    /// Standard sunrise/sunset (35 arcminutes below the horizon)
    Official,
    /// Civil twilight boundary (sun is 6° below horizon)
    Civil,
    /// Nautical twilight boundary (sun is 12° below horizon)
    Nautical,
    /// Astronomical twilight boundary (sun is 18° below horizon)
    Astronomical,
    /// Upper edge of the golden hour (sun is 6° above horizon)
    GoldenHourAbove,
    /// Lower edge of the golden hour (sun is 4° below horizon)
    GoldenHourBelow,
}

impl SunAltitudeThreshold {
    /// Every threshold, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Official,
        Self::Civil,
        Self::Nautical,
        Self::Astronomical,
        Self::GoldenHourAbove,
        Self::GoldenHourBelow,
    ];

    /// Gets the sun elevation angle in degrees for this threshold.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Official => -35.0 / 60.0,
            Self::Civil => -6.0,
            Self::Nautical => -12.0,
            Self::Astronomical => -18.0,
            Self::GoldenHourAbove => 6.0,
            Self::GoldenHourBelow => -4.0,
        }
    }

    /// Gets the zenith angle in degrees (90° minus the elevation angle).
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        90.0 - self.degrees()
    }
}

/// Which of the two daily crossings of a threshold to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HalfDay {
    /// The ascending crossing (dawn side)
    Morning,
    /// The descending crossing (dusk side)
    Evening,
}

impl HalfDay {
    /// Hour of the day used for the approximate time of the crossing.
    #[must_use]
    pub const fn approximate_hour(&self) -> f64 {
        match self {
            Self::Morning => 6.0,
            Self::Evening => 18.0,
        }
    }
}

/// Named periods of the day/night cycle, ordered from night to day.
///
/// `GoldenHour` and `BlueHour` are only produced in golden/blue hour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayPeriod {
    /// Sun more than 18° below the horizon
    Night,
    /// Sun between 18° and 12° below the horizon
    Astronomical,
    /// Sun between 12° and 6° below the horizon
    Nautical,
    /// Sun between 6° below the horizon and sunrise/sunset
    Civil,
    /// Sun above the horizon
    Day,
    /// Sun between 4° below and 6° above the horizon
    GoldenHour,
    /// Sun between 6° and 4° below the horizon
    BlueHour,
}

impl DayPeriod {
    /// Every period, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Night,
        Self::Astronomical,
        Self::Nautical,
        Self::Civil,
        Self::Day,
        Self::GoldenHour,
        Self::BlueHour,
    ];

    /// Checks whether this is one of the three twilight periods.
    #[must_use]
    pub const fn is_twilight(&self) -> bool {
        matches!(self, Self::Astronomical | Self::Nautical | Self::Civil)
    }

    /// Checks whether this period is only produced in golden/blue hour mode.
    #[must_use]
    pub const fn requires_golden_blue_hour_mode(&self) -> bool {
        matches!(self, Self::GoldenHour | Self::BlueHour)
    }

    /// Human-readable name of the period.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Night => "Night",
            Self::Astronomical => "Astronomical twilight",
            Self::Nautical => "Nautical twilight",
            Self::Civil => "Civil twilight",
            Self::Day => "Day",
            Self::GoldenHour => "Golden hour",
            Self::BlueHour => "Blue hour",
        }
    }
}

/// Which half of the day a period boundary refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayMode {
    /// The morning side of the day
    Sunrise,
    /// The evening side of the day
    Sunset,
}

impl From<HalfDay> for DayMode {
    fn from(half_day: HalfDay) -> Self {
        match half_day {
            HalfDay::Morning => Self::Sunrise,
            HalfDay::Evening => Self::Sunset,
        }
    }
}

/// A single threshold crossing: which threshold, on which half of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunEvent {
    /// The elevation threshold being crossed
    pub threshold: SunAltitudeThreshold,
    /// Morning (ascending) or evening (descending) crossing
    pub half_day: HalfDay,
}

impl SunEvent {
    /// Creates a new event descriptor.
    #[must_use]
    pub const fn new(threshold: SunAltitudeThreshold, half_day: HalfDay) -> Self {
        Self {
            threshold,
            half_day,
        }
    }
}

/// Time of a crossing in hours UTC, relative to the calculation date.
///
/// `hours` is in 0.0 to < 24.0; `day_offset` is -1 (previous day), 0 or +1 (next day).
///
/// # Example
/// ```
/// # use solar_twilight::EventHours;
/// let time = EventHours::new(-1, 21.515625);
/// assert_eq!(time.day_offset(), -1);
/// assert_eq!(time.hms(), (21, 30, 56));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventHours {
    day_offset: i8,
    hours: f64,
}

impl EventHours {
    /// Creates a new `EventHours` from a day offset and hours since midnight UTC.
    #[must_use]
    pub const fn new(day_offset: i8, hours: f64) -> Self {
        Self { day_offset, hours }
    }

    /// Gets the hours since midnight UTC of the shifted day.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.hours
    }

    /// Gets the whole-day shift relative to the calculation date.
    #[must_use]
    pub const fn day_offset(&self) -> i8 {
        self.day_offset
    }

    /// Splits the hours into truncated hour, minute and second.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn hms(&self) -> (u32, u32, u32) {
        let hour = floor(self.hours);
        let minutes = (self.hours - hour) * 60.0;
        let minute = floor(minutes);
        let second = floor((minutes - minute) * 60.0);
        (hour as u32, minute as u32, second as u32)
    }

    /// Gets the whole seconds since midnight UTC of the shifted day.
    #[must_use]
    pub fn seconds_of_day(&self) -> u32 {
        let (hour, minute, second) = self.hms();
        hour * 3600 + minute * 60 + second
    }
}

/// An observer location with the zone used to resolve its UTC offsets.
///
/// `Z` is typically a `chrono::TimeZone` such as `chrono_tz::Tz` or `FixedOffset`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location<Z> {
    latitude: f64,
    longitude: f64,
    zone: Z,
}

impl<Z> Location<Z> {
    /// Creates a new location.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64, zone: Z) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
            zone,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the zone.
    #[must_use]
    pub const fn zone(&self) -> &Z {
        &self.zone
    }

    /// Checks whether the location is in the northern hemisphere.
    #[must_use]
    pub fn is_northern(&self) -> bool {
        self.latitude > 0.0
    }
}

#[cfg(feature = "chrono")]
impl<Z: chrono::TimeZone> Location<Z> {
    /// Converts a UTC instant to local wall-clock time at this location.
    #[must_use]
    pub fn local_now(&self, utc: chrono::DateTime<chrono::Utc>) -> chrono::NaiveDateTime {
        utc.with_timezone(&self.zone).naive_local()
    }
}
