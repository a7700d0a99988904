//! Validated coordinate handle with date defaults and time-zone conversion.
//!
//! [`Sun`] owns a validated latitude/longitude pair and binds the calculator
//! to it. The "today" default is an injected [`Clock`] capability rather than
//! an implicit global, so tests can pin the date.

use crate::almanac;
use crate::error::check_coordinates;
use crate::{Result, SolarEvent};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Source of the current UTC date.
///
/// Implemented by [`SystemClock`] for production use; tests supply a fixed
/// date instead.
pub trait Clock {
    /// Gets the current calendar date in UTC.
    fn today_utc(&self) -> NaiveDate;
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today_utc(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Sunrise/sunset calculator bound to a validated coordinate.
///
/// Coordinates are checked once at construction; every later call is
/// infallible with respect to the coordinate and can only fail with a date
/// validation error or a polar day/night domain error.
///
/// # Example
/// ```
/// use sun_times::Sun;
/// use chrono::{FixedOffset, NaiveDate};
///
/// let sun = Sun::new(51.21, 21.01)?;
/// let date = NaiveDate::from_ymd_opt(2014, 10, 3).unwrap();
///
/// let sunset_utc = sun.sunset_utc(date)?;
///
/// // Warsaw is UTC+2 in October 2014 (CEST).
/// let cest = FixedOffset::east_opt(2 * 3600).unwrap();
/// let sunset_local = sun.sunset_in(date, &cest)?;
/// assert_eq!(sunset_local, sunset_utc);
/// assert_eq!(sunset_local.time().to_string(), "18:10:20");
/// # Ok::<(), sun_times::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sun<C = SystemClock> {
    latitude: f64,
    longitude: f64,
    clock: C,
}

impl Sun {
    /// Creates a calculator for the given coordinate, using the system clock
    /// for the "today" methods.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
    /// coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Self::with_clock(latitude, longitude, SystemClock)
    }
}

impl<C: Clock> Sun<C> {
    /// Creates a calculator with an explicit [`Clock`].
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
    /// coordinates.
    pub fn with_clock(latitude: f64, longitude: f64, clock: C) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
            clock,
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

    /// Calculates the UTC instant of a solar event on the given date.
    ///
    /// # Errors
    /// Returns [`crate::Error::AlwaysAbove`] / [`crate::Error::AlwaysBelow`]
    /// when the event does not occur on that date at this latitude.
    pub fn event_utc(&self, date: NaiveDate, event: SolarEvent) -> Result<DateTime<Utc>> {
        almanac::event_time_utc(date, self.latitude, self.longitude, event)
    }

    /// Calculates the UTC instant of sunrise on the given date.
    ///
    /// # Errors
    /// Same as [`Sun::event_utc`].
    pub fn sunrise_utc(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        self.event_utc(date, SolarEvent::Sunrise)
    }

    /// Calculates the UTC instant of sunset on the given date.
    ///
    /// # Errors
    /// Same as [`Sun::event_utc`].
    pub fn sunset_utc(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        self.event_utc(date, SolarEvent::Sunset)
    }

    /// Calculates today's sunrise, with "today" taken from the clock in UTC.
    ///
    /// # Errors
    /// Same as [`Sun::event_utc`].
    pub fn sunrise_utc_today(&self) -> Result<DateTime<Utc>> {
        self.sunrise_utc(self.clock.today_utc())
    }

    /// Calculates today's sunset, with "today" taken from the clock in UTC.
    ///
    /// # Errors
    /// Same as [`Sun::event_utc`].
    pub fn sunset_utc_today(&self) -> Result<DateTime<Utc>> {
        self.sunset_utc(self.clock.today_utc())
    }

    /// Calculates sunrise on the given date, expressed in another time zone.
    ///
    /// This is pure post-processing of the UTC instant: the pipeline runs
    /// once and the conversion never changes the instant itself.
    ///
    /// # Errors
    /// Same as [`Sun::event_utc`].
    pub fn sunrise_in<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>> {
        Ok(self.sunrise_utc(date)?.with_timezone(tz))
    }

    /// Calculates sunset on the given date, expressed in another time zone.
    ///
    /// # Errors
    /// Same as [`Sun::event_utc`].
    pub fn sunset_in<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>> {
        Ok(self.sunset_utc(date)?.with_timezone(tz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::FixedOffset;

    /// Clock pinned to a fixed date.
    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today_utc(&self) -> NaiveDate {
            self.0
        }
    }

    #[test]
    fn test_construction_validates_coordinates() {
        assert!(Sun::new(51.21, 21.01).is_ok());
        assert!(Sun::new(-90.0, 180.0).is_ok());

        assert_eq!(Sun::new(90.5, 0.0).unwrap_err(), Error::invalid_latitude(90.5));
        assert_eq!(Sun::new(0.0, 180.5).unwrap_err(), Error::invalid_longitude(180.5));
    }

    #[test]
    fn test_accessors() {
        let sun = Sun::new(51.21, 21.01).unwrap();
        assert_eq!(sun.latitude(), 51.21);
        assert_eq!(sun.longitude(), 21.01);
    }

    #[test]
    fn test_today_uses_injected_clock() {
        let date = NaiveDate::from_ymd_opt(2014, 10, 3).unwrap();
        let sun = Sun::with_clock(51.21, 21.01, FixedClock(date)).unwrap();

        assert_eq!(sun.sunrise_utc_today().unwrap(), sun.sunrise_utc(date).unwrap());
        assert_eq!(sun.sunset_utc_today().unwrap(), sun.sunset_utc(date).unwrap());
    }

    #[test]
    fn test_offset_conversion_preserves_instant() {
        let date = NaiveDate::from_ymd_opt(2014, 10, 3).unwrap();
        let sun = Sun::new(51.21, 21.01).unwrap();
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();

        let utc = sun.sunset_utc(date).unwrap();
        let local = sun.sunset_in(date, &cest).unwrap();

        assert_eq!(local, utc);
        assert_eq!(local.naive_local() - utc.naive_utc(), chrono::Duration::hours(2));
    }

    #[test]
    fn test_polar_errors_propagate() {
        let sun = Sun::new(87.55, 0.1).unwrap();
        let date = NaiveDate::from_ymd_opt(2014, 10, 3).unwrap();

        assert_eq!(sun.sunrise_utc(date), Err(Error::AlwaysBelow));
        assert_eq!(sun.sunset_utc(date), Err(Error::AlwaysBelow));
    }
}
