//! Sunrise/sunset calculation using the solar hour-angle approximation.
//!
//! Implements the sunrise/sunset procedure from the *Almanac for Computers*
//! (1990, Nautical Almanac Office, US Naval Observatory), the same
//! approximation used by NOAA's simplified calculators. Accuracy is within a
//! few minutes of reference values away from the polar circles.
//!
//! The calculation is a closed-form sequence of trigonometric steps: estimate
//! the event near 06:00/18:00 local solar time, derive the sun's position
//! (mean anomaly, true longitude, right ascension, declination) at that
//! estimate, and solve the hour angle at which the sun's center reaches the
//! rise/set zenith. When the hour-angle cosine leaves [-1, 1] the sun never
//! crosses the horizon that day and the polar-day/night error is returned.

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

use crate::error::check_coordinates;
use crate::math::{
    acos, asin, atan, cos, degrees_to_radians, floor, normalize_degrees_0_to_360,
    radians_to_degrees, round, sin, tan,
};
use crate::time::day_of_year;
use crate::{Error, HoursUtc, Result, SolarEvent};

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Zenith angle of the sun's center at rise/set: 90° geometric horizon plus
/// 0.833° for atmospheric refraction and the solar disk radius. Fixed by the
/// algorithm, not configurable.
const ZENITH_DEGREES: f64 = 90.833;

/// Degrees of longitude per hour of Earth rotation.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Calculate the time of sunrise or sunset as hours since midnight UTC.
///
/// Returns the event time relative to midnight UTC (0 UT) of the given date.
/// Hours can extend beyond 24.0 (next day) or be negative (previous day);
/// [`HoursUtc::day_and_hours`] splits out the day offset. This is the
/// chrono-free core used by all convenience APIs.
///
/// # Arguments
/// * `year` - Year (proleptic Gregorian, can be negative for BCE)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `event` - Sunrise or sunset
///
/// # Errors
/// Returns a validation error for out-of-range coordinates or dates, and
/// [`Error::AlwaysAbove`] / [`Error::AlwaysBelow`] when the sun never
/// sets/rises on that date at that latitude. Latitude exactly ±90 is not
/// special-cased: it resolves to one of the polar errors.
///
/// # Example
/// ```
/// use sun_times::{almanac, SolarEvent};
///
/// let sunset = almanac::event_hours_utc(
///     2014, 10, 3,
///     51.21,   // latitude
///     21.01,   // longitude
///     SolarEvent::Sunset,
/// ).unwrap();
///
/// let (day_offset, hours) = sunset.day_and_hours();
/// assert_eq!(day_offset, 0);
/// assert!((hours - 16.17).abs() < 0.05); // ~16:10 UTC
/// ```
pub fn event_hours_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    event: SolarEvent,
) -> Result<HoursUtc> {
    check_coordinates(latitude, longitude)?;
    let n = f64::from(day_of_year(year, month, day)?);

    // Longitude as an hour offset, and a seed estimate of the event near
    // 06:00/18:00 local solar time.
    let lng_hour = longitude / DEGREES_PER_HOUR;
    let estimate = event.local_solar_hour() - lng_hour;
    let t = n + estimate / 24.0;

    // Sun's mean anomaly at the estimate.
    let m = 0.9856 * t - 3.289;

    // Sun's true longitude, in [0, 360).
    let l = normalize_degrees_0_to_360(
        m + 1.916 * sin(degrees_to_radians(m))
            + 0.020 * sin(degrees_to_radians(2.0 * m))
            + 282.634,
    );

    // Sun's right ascension, adjusted into the same quadrant as L, in hours.
    let mut ra = normalize_degrees_0_to_360(radians_to_degrees(atan(
        0.91764 * tan(degrees_to_radians(l)),
    )));
    let l_quadrant = floor(l / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;
    ra = (ra + (l_quadrant - ra_quadrant)) / DEGREES_PER_HOUR;

    // Sun's declination.
    let sin_dec = 0.39782 * sin(degrees_to_radians(l));
    let cos_dec = cos(asin(sin_dec));

    // Local hour angle cosine. Outside [-1, 1] the sun never reaches the
    // rise/set zenith on this date.
    let lat_rad = degrees_to_radians(latitude);
    let cos_h = (cos(degrees_to_radians(ZENITH_DEGREES)) - sin_dec * sin(lat_rad))
        / (cos_dec * cos(lat_rad));

    if cos_h > 1.0 {
        return Err(Error::AlwaysBelow);
    }
    if cos_h < -1.0 {
        return Err(Error::AlwaysAbove);
    }

    // Hour angle in hours; rising events use the western branch.
    let h_degrees = match event {
        SolarEvent::Sunrise => 360.0 - radians_to_degrees(acos(cos_h)),
        SolarEvent::Sunset => radians_to_degrees(acos(cos_h)),
    };
    let h = h_degrees / DEGREES_PER_HOUR;

    // Local mean time of the event, then back to UTC.
    let t_local = h + ra - 0.06571 * t - 6.622;
    let ut = t_local - lng_hour;

    // The -0.06571*t drift term wraps the local mean time by a full day once
    // per year, independently of any real midnight crossing. Anchor the
    // result to the seed estimate: pick the mod-24 representative nearest it,
    // so genuine UTC day crossings (from the longitude offset) survive as
    // day offsets and the aliasing does not.
    let ut = ut - 24.0 * round((ut - estimate) / 24.0);

    Ok(HoursUtc::from_hours(ut))
}

/// Calculate the sunrise time as hours since midnight UTC.
///
/// # Errors
/// Same as [`event_hours_utc`].
pub fn sunrise_hours_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
) -> Result<HoursUtc> {
    event_hours_utc(year, month, day, latitude, longitude, SolarEvent::Sunrise)
}

/// Calculate the sunset time as hours since midnight UTC.
///
/// # Errors
/// Same as [`event_hours_utc`].
pub fn sunset_hours_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
) -> Result<HoursUtc> {
    event_hours_utc(year, month, day, latitude, longitude, SolarEvent::Sunset)
}

/// Calculate the UTC instant of sunrise or sunset for a calendar date.
///
/// The instant is rounded to one-second resolution. Events that fall on the
/// UTC day before or after the input date keep their correct calendar date
/// (important near the antimeridian and for evening events in the Americas).
///
/// # Errors
/// Same as [`event_hours_utc`].
///
/// # Example
/// ```
/// use sun_times::{almanac, SolarEvent};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
/// let sunset = almanac::event_time_utc(date, 37.7749, -122.4194, SolarEvent::Sunset).unwrap();
///
/// // San Francisco's evening is already past midnight UTC.
/// assert_eq!(sunset.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
/// ```
#[cfg(feature = "chrono")]
pub fn event_time_utc(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    event: SolarEvent,
) -> Result<DateTime<Utc>> {
    let hours = event_hours_utc(
        date.year(),
        date.month(),
        date.day(),
        latitude,
        longitude,
        event,
    )?;
    hours_to_datetime(date, hours)
}

/// Calculate the UTC instant of sunrise for a calendar date.
///
/// # Errors
/// Same as [`event_hours_utc`].
#[cfg(feature = "chrono")]
pub fn sunrise_time_utc(date: NaiveDate, latitude: f64, longitude: f64) -> Result<DateTime<Utc>> {
    event_time_utc(date, latitude, longitude, SolarEvent::Sunrise)
}

/// Calculate the UTC instant of sunset for a calendar date.
///
/// # Errors
/// Same as [`event_hours_utc`].
#[cfg(feature = "chrono")]
pub fn sunset_time_utc(date: NaiveDate, latitude: f64, longitude: f64) -> Result<DateTime<Utc>> {
    event_time_utc(date, latitude, longitude, SolarEvent::Sunset)
}

/// Combine a calculation date with an event time, applying the day offset.
#[cfg(feature = "chrono")]
fn hours_to_datetime(date: NaiveDate, hours: HoursUtc) -> Result<DateTime<Utc>> {
    let (day_offset, hours_in_day) = hours.day_and_hours();

    let mut seconds = (hours_in_day * 3600.0).round() as i64;
    let mut day_offset = i64::from(day_offset);
    // Rounding 23:59:59.5+ lands on the next midnight.
    if seconds >= 86_400 {
        seconds -= 86_400;
        day_offset += 1;
    }

    let event_date = date
        .checked_add_signed(Duration::days(day_offset))
        .ok_or(Error::invalid_date(
            "event instant is outside the supported date range",
        ))?;

    let midnight = event_date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();
    Ok(midnight + Duration::seconds(seconds))
}
