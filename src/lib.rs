//! # Sunrise/Sunset Calculation Library
//!
//! Sunrise and sunset times for a geographic coordinate and a calendar date.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library implements the classic solar hour-angle approximation (the
//! "sunrise equation" from the *Almanac for Computers*, also used by NOAA's
//! simplified calculators). Given a latitude, longitude, and proleptic
//! Gregorian date it produces the UTC instant of sunrise or sunset, or a
//! domain error when the sun never crosses the horizon on that day (polar
//! day/night at high latitudes).
//!
//! The computation is a pure, stateless function: no I/O, no caching, no
//! shared state. Accuracy is within a few minutes of NOAA reference values,
//! which is the best this family of approximations can do.
//!
//! ## Features
//!
//! - `std` (default): use native math functions
//! - `chrono` (default, implies `std`): `NaiveDate`/`DateTime` convenience
//!   API and the [`Sun`] handle with a system clock for "today"
//! - `libm`: pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! sun-times = "0.1"
//!
//! # Minimal std (no chrono, numeric API only)
//! sun-times = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # no_std (pure numeric API)
//! sun-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sun_times::Sun;
//! use chrono::NaiveDate;
//!
//! let sun = Sun::new(51.21, 21.01).unwrap();
//! let date = NaiveDate::from_ymd_opt(2014, 10, 3).unwrap();
//!
//! let sunrise = sun.sunrise_utc(date).unwrap();
//! let sunset = sun.sunset_utc(date).unwrap();
//! println!("Sunrise: {sunrise}");
//! println!("Sunset: {sunset}");
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use sun_times::{almanac, SolarEvent};
//!
//! // Hours since midnight UTC of 2014-10-03 (works in both std and no_std)
//! let sunrise = almanac::event_hours_utc(
//!     2014, 10, 3,
//!     51.21,  // latitude
//!     21.01,  // longitude
//!     SolarEvent::Sunrise,
//! ).unwrap();
//!
//! let (day_offset, hours) = sunrise.day_and_hours();
//! assert_eq!(day_offset, 0);
//! assert!((hours - 4.65).abs() < 0.1); // ~04:39 UTC
//! ```
//!
//! ### Polar day and night
//! ```rust
//! use sun_times::{almanac, Error, SolarEvent};
//!
//! // Midwinter well above the arctic circle: the sun never rises.
//! let result = almanac::event_hours_utc(2023, 12, 21, 68.0, 25.0, SolarEvent::Sunrise);
//! assert_eq!(result, Err(Error::AlwaysBelow));
//! ```
//!
//! ## References
//!
//! - *Almanac for Computers* (1990), Nautical Almanac Office, US Naval
//!   Observatory. The sunrise/sunset algorithm implemented here.
//! - NOAA Global Monitoring Division sunrise/sunset calculator (reference
//!   values used in the test suite).

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
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::sun::{Clock, Sun, SystemClock};
pub use crate::types::{HoursUtc, SolarEvent};

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
#[cfg(feature = "chrono")]
pub mod sun;
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_basic_sunrise_sunset() {
        let sun = Sun::new(51.21, 21.01).unwrap();
        let date = NaiveDate::from_ymd_opt(2014, 10, 3).unwrap();

        let sunrise = sun.sunrise_utc(date).unwrap();
        let sunset = sun.sunset_utc(date).unwrap();

        assert!(sunrise < sunset);
        assert_eq!(sunrise.date_naive(), date);
        assert_eq!(sunset.date_naive(), date);
        assert_eq!(sunrise.hour(), 4);
        assert_eq!(sunset.hour(), 16);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();

        let first = almanac::sunrise_time_utc(date, 37.7749, -122.4194).unwrap();
        let second = almanac::sunrise_time_utc(date, 37.7749, -122.4194).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_coordinates_rejected_at_construction() {
        assert!(Sun::new(91.0, 0.0).is_err());
        assert!(Sun::new(0.0, -181.0).is_err());
        assert!(Sun::new(90.0, 180.0).is_ok());
    }
}
