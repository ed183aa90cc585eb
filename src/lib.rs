//! # Solar Twilight
//!
//! Sunrise, sunset, twilight and golden/blue hour times, with classification of an instant
//! into a named period of the day.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The engine has three layers:
//! - [`event`]: the timestamp of one sun altitude threshold crossing, using the approximate
//!   sunrise equation of the Almanac for Computers (accurate to about a minute)
//! - [`DailySunTimes`]: the twelve crossings of a calendar date at one location
//! - [`period`]: which [`DayPeriod`] an instant falls into, period boundaries and day length
//!
//! Near the poles the sun may never cross a threshold on a given day. Such events are
//! absent (`None`), never errors, and the period classifier falls back to a seasonal
//! polar day/night judgement when no event bounds the current instant.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Calendar API (`event_timestamp`, `DailySunTimes`, `period`)
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for the public value types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-twilight = "0.1"
//!
//! # no_std + chrono
//! solar-twilight = { version = "0.1", default-features = false, features = ["libm", "chrono"] }
//!
//! # Minimal no_std (numeric API)
//! solar-twilight = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sun times and current period (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use solar_twilight::{period, DailySunTimes, DayPeriod, Location};
//!
//! let london = Location::new(52.1311, 0.1323, chrono::Utc).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let times = DailySunTimes::for_location(&london, date).unwrap();
//!
//! println!("Sunrise: {:?}", times.sunrise());
//! println!("Sunset: {:?}", times.sunset());
//!
//! let now = date.and_hms_opt(18, 30, 0).unwrap();
//! let current = period::current_period(&times, &london, now, false);
//! assert_eq!(current, DayPeriod::Civil);
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use solar_twilight::{event, HalfDay, SunAltitudeThreshold};
//!
//! // Civil dawn in UT hours on day 172 at Reykjavik
//! let dawn = event::event_hours_utc(
//!     172,
//!     64.1466,
//!     -21.9426,
//!     SunAltitudeThreshold::Civil,
//!     HalfDay::Morning,
//! )
//! .unwrap();
//!
//! // Around the June solstice the sun never gets 6° below the horizon there.
//! assert_eq!(dawn, None);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade at `trace` and `debug`
//! level. Install any logger to see them; nothing is printed otherwise.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
#[cfg(feature = "chrono")]
pub use crate::daily::{next_transition, DailySunTimes};
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::time::UtcOffsetProvider;
pub use crate::types::{
    DayMode, DayPeriod, EventHours, HalfDay, Location, SunAltitudeThreshold, SunEvent,
};

// Algorithm modules
pub mod event;
#[cfg(feature = "chrono")]
pub mod period;

// Core modules
#[cfg(feature = "chrono")]
pub mod daily;
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
#[cfg(feature = "chrono")]
pub mod time;
