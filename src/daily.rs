//! A full day of sun event timestamps for one location.

use crate::event::event_timestamp;
use crate::time::UtcOffsetProvider;
use crate::{HalfDay, Location, Result, SunAltitudeThreshold, SunEvent};
use chrono::{NaiveDate, NaiveDateTime};

/// The twelve events of a day, in the order they are computed.
pub const DAILY_EVENTS: [SunEvent; 12] = [
    SunEvent::new(SunAltitudeThreshold::Astronomical, HalfDay::Morning),
    SunEvent::new(SunAltitudeThreshold::Astronomical, HalfDay::Evening),
    SunEvent::new(SunAltitudeThreshold::Nautical, HalfDay::Morning),
    SunEvent::new(SunAltitudeThreshold::Nautical, HalfDay::Evening),
    SunEvent::new(SunAltitudeThreshold::Civil, HalfDay::Morning),
    SunEvent::new(SunAltitudeThreshold::Civil, HalfDay::Evening),
    SunEvent::new(SunAltitudeThreshold::Official, HalfDay::Morning),
    SunEvent::new(SunAltitudeThreshold::Official, HalfDay::Evening),
    SunEvent::new(SunAltitudeThreshold::GoldenHourAbove, HalfDay::Morning),
    SunEvent::new(SunAltitudeThreshold::GoldenHourBelow, HalfDay::Morning),
    SunEvent::new(SunAltitudeThreshold::GoldenHourAbove, HalfDay::Evening),
    SunEvent::new(SunAltitudeThreshold::GoldenHourBelow, HalfDay::Evening),
];

/// Sunrise, sunset, twilight and golden/blue hour timestamps for one calendar date.
///
/// Timestamps are local wall-clock times. An absent timestamp means the sun does not
/// cross that threshold on that half of the day, which is expected near the poles.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use solar_twilight::DailySunTimes;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let times = DailySunTimes::compute(date, 83.58, -30.0, &chrono::Utc).unwrap();
/// assert!(times.is_polar());
/// assert_eq!(times.sunrise(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailySunTimes {
    date: NaiveDate,
    morning_18_below: Option<NaiveDateTime>,
    evening_18_below: Option<NaiveDateTime>,
    morning_12_below: Option<NaiveDateTime>,
    evening_12_below: Option<NaiveDateTime>,
    morning_6_below: Option<NaiveDateTime>,
    evening_6_below: Option<NaiveDateTime>,
    sunrise: Option<NaiveDateTime>,
    sunset: Option<NaiveDateTime>,
    morning_6_above: Option<NaiveDateTime>,
    morning_4_below: Option<NaiveDateTime>,
    evening_6_above: Option<NaiveDateTime>,
    evening_4_below: Option<NaiveDateTime>,
}

impl DailySunTimes {
    /// Calculate every sun event of a calendar date.
    ///
    /// # Arguments
    /// * `date` - Calendar date; kept as the record's date even when an event shifts
    /// * `latitude` - Observer latitude in degrees (-90 to +90)
    /// * `longitude` - Observer longitude in degrees (-180 to +180)
    /// * `offsets` - Resolver for the UTC offset at each event instant
    ///
    /// # Errors
    /// Returns error for invalid coordinates or a failing offset provider.
    pub fn compute<P: UtcOffsetProvider + ?Sized>(
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        offsets: &P,
    ) -> Result<Self> {
        let mut times = Self::empty(date);
        for event in DAILY_EVENTS {
            let at = event_timestamp(
                latitude,
                longitude,
                date,
                event.threshold,
                event.half_day,
                offsets,
            )?;
            times = times.with_event(event, at);
        }

        if times.events().count() < DAILY_EVENTS.len() {
            log::debug!(
                "{date}: {} of {} sun events at {latitude}°, {longitude}°",
                times.events().count(),
                DAILY_EVENTS.len()
            );
        }
        Ok(times)
    }

    /// Calculate every sun event of a calendar date at a location.
    ///
    /// # Errors
    /// Returns error if the location's zone cannot resolve an offset.
    pub fn for_location<Z: UtcOffsetProvider>(
        location: &Location<Z>,
        date: NaiveDate,
    ) -> Result<Self> {
        Self::compute(date, location.latitude(), location.longitude(), location.zone())
    }

    /// Creates a record for `date` with every event absent.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            morning_18_below: None,
            evening_18_below: None,
            morning_12_below: None,
            evening_12_below: None,
            morning_6_below: None,
            evening_6_below: None,
            sunrise: None,
            sunset: None,
            morning_6_above: None,
            morning_4_below: None,
            evening_6_above: None,
            evening_4_below: None,
        }
    }

    /// Returns a copy with one event replaced.
    ///
    /// Useful for rebuilding records from a cache.
    #[must_use]
    pub fn with_event(mut self, event: SunEvent, at: Option<NaiveDateTime>) -> Self {
        *self.slot_mut(event) = at;
        self
    }

    fn slot_mut(&mut self, event: SunEvent) -> &mut Option<NaiveDateTime> {
        use HalfDay::{Evening, Morning};
        use SunAltitudeThreshold::{
            Astronomical, Civil, GoldenHourAbove, GoldenHourBelow, Nautical, Official,
        };

        match (event.threshold, event.half_day) {
            (Astronomical, Morning) => &mut self.morning_18_below,
            (Astronomical, Evening) => &mut self.evening_18_below,
            (Nautical, Morning) => &mut self.morning_12_below,
            (Nautical, Evening) => &mut self.evening_12_below,
            (Civil, Morning) => &mut self.morning_6_below,
            (Civil, Evening) => &mut self.evening_6_below,
            (Official, Morning) => &mut self.sunrise,
            (Official, Evening) => &mut self.sunset,
            (GoldenHourAbove, Morning) => &mut self.morning_6_above,
            (GoldenHourAbove, Evening) => &mut self.evening_6_above,
            (GoldenHourBelow, Morning) => &mut self.morning_4_below,
            (GoldenHourBelow, Evening) => &mut self.evening_4_below,
        }
    }

    /// Gets the timestamp of one event.
    #[must_use]
    pub const fn get(
        &self,
        threshold: SunAltitudeThreshold,
        half_day: HalfDay,
    ) -> Option<NaiveDateTime> {
        use HalfDay::{Evening, Morning};
        use SunAltitudeThreshold::{
            Astronomical, Civil, GoldenHourAbove, GoldenHourBelow, Nautical, Official,
        };

        match (threshold, half_day) {
            (Astronomical, Morning) => self.morning_18_below,
            (Astronomical, Evening) => self.evening_18_below,
            (Nautical, Morning) => self.morning_12_below,
            (Nautical, Evening) => self.evening_12_below,
            (Civil, Morning) => self.morning_6_below,
            (Civil, Evening) => self.evening_6_below,
            (Official, Morning) => self.sunrise,
            (Official, Evening) => self.sunset,
            (GoldenHourAbove, Morning) => self.morning_6_above,
            (GoldenHourAbove, Evening) => self.evening_6_above,
            (GoldenHourBelow, Morning) => self.morning_4_below,
            (GoldenHourBelow, Evening) => self.evening_4_below,
        }
    }

    /// Gets the calendar date of the record.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Start of morning astronomical twilight.
    #[must_use]
    pub const fn morning_18_below(&self) -> Option<NaiveDateTime> {
        self.morning_18_below
    }

    /// End of evening astronomical twilight.
    #[must_use]
    pub const fn evening_18_below(&self) -> Option<NaiveDateTime> {
        self.evening_18_below
    }

    /// Start of morning nautical twilight.
    #[must_use]
    pub const fn morning_12_below(&self) -> Option<NaiveDateTime> {
        self.morning_12_below
    }

    /// End of evening nautical twilight.
    #[must_use]
    pub const fn evening_12_below(&self) -> Option<NaiveDateTime> {
        self.evening_12_below
    }

    /// Start of morning civil twilight.
    #[must_use]
    pub const fn morning_6_below(&self) -> Option<NaiveDateTime> {
        self.morning_6_below
    }

    /// End of evening civil twilight.
    #[must_use]
    pub const fn evening_6_below(&self) -> Option<NaiveDateTime> {
        self.evening_6_below
    }

    /// Sunrise.
    #[must_use]
    pub const fn sunrise(&self) -> Option<NaiveDateTime> {
        self.sunrise
    }

    /// Sunset.
    #[must_use]
    pub const fn sunset(&self) -> Option<NaiveDateTime> {
        self.sunset
    }

    /// End of the morning golden hour.
    #[must_use]
    pub const fn morning_6_above(&self) -> Option<NaiveDateTime> {
        self.morning_6_above
    }

    /// End of the morning blue hour.
    #[must_use]
    pub const fn morning_4_below(&self) -> Option<NaiveDateTime> {
        self.morning_4_below
    }

    /// Start of the evening golden hour.
    #[must_use]
    pub const fn evening_6_above(&self) -> Option<NaiveDateTime> {
        self.evening_6_above
    }

    /// Start of the evening blue hour.
    #[must_use]
    pub const fn evening_4_below(&self) -> Option<NaiveDateTime> {
        self.evening_4_below
    }

    /// Checks whether every event is absent.
    #[must_use]
    pub fn is_polar(&self) -> bool {
        self.events().next().is_none()
    }

    /// Present events in chronological order.
    pub fn events(&self) -> impl Iterator<Item = (SunEvent, NaiveDateTime)> {
        let mut slots: [(usize, SunEvent, Option<NaiveDateTime>); 12] =
            core::array::from_fn(|index| {
                let event = DAILY_EVENTS[index];
                (index, event, self.get(event.threshold, event.half_day))
            });
        slots.sort_unstable_by_key(|&(index, _, at)| (at.is_none(), at, index));
        slots
            .into_iter()
            .filter_map(|(_, event, at)| at.map(|at| (event, at)))
    }
}

/// Finds the first event strictly after `now`.
///
/// Today's events are searched first, then tomorrow's.
#[must_use]
pub fn next_transition(
    today: &DailySunTimes,
    tomorrow: &DailySunTimes,
    now: NaiveDateTime,
) -> Option<(SunEvent, NaiveDateTime)> {
    today
        .events()
        .find(|&(_, at)| at > now)
        .or_else(|| tomorrow.events().find(|&(_, at)| at > now))
}
