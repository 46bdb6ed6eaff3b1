//! # Solar Almanac
//!
//! A small library for computing the sun's position in the sky and the table of
//! named solar event times (sunrise, sunset, the twilight bounds, golden hour,
//! blue hour, solar noon and nadir) for any location on Earth.
//!
//! The ephemeris is a low-precision analytic model (mean anomaly, equation of
//! center, fixed mean obliquity). Event times come out within a minute or so of
//! high-order models, which is plenty for daylight and twilight scheduling:
//! lighting control, photography planning, outdoor activities.
//!
//! At high latitudes a threshold may never be crossed on a given day (polar day,
//! polar night). That is not an error: the corresponding pair of fields in
//! [`SolarTimes`] is simply absent, while [`SolarTimes::solar_noon`] and
//! [`SolarTimes::nadir`] always exist.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use solar_almanac::Observer;
//!
//! // Prague: 50.0755°N, 14.4378°E
//! let observer = Observer::new(50.0755, 14.4378).unwrap();
//! let instant = Utc.with_ymd_and_hms(2025, 6, 21, 12, 0, 0).unwrap();
//!
//! // Where is the sun right now?
//! let position = observer.sun_position(instant);
//! assert!(position.altitude_degrees() > 0.0);
//! assert!((0.0..360.0).contains(&position.azimuth_degrees()));
//!
//! // When does anything happen today?
//! let times = observer.solar_times(instant).unwrap();
//! let sunrise = times.sunrise.expect("Prague always has a sunrise");
//! let sunset = times.sunset.expect("Prague always has a sunset");
//! assert!(sunrise < times.solar_noon && times.solar_noon < sunset);
//!
//! // Midsummer Prague nights never get astronomically dark.
//! assert!(times.night.is_none());
//! ```
#![no_std]

mod ephemeris;
mod events;
mod math;
mod time;


use chrono::{DateTime, Duration, Utc};

#[allow(unused_imports)]
use core_maths::CoreFloat;

use thiserror::Error;

use crate::math::normalize_degrees_360;

/// An observer location on Earth, validated at construction.
///
/// Angles are stored in radians; the constructor takes degrees, which is
/// what coordinates are quoted in everywhere else.
///
/// # Example
///
/// ```
/// use solar_almanac::{CalculationError, Observer};
///
/// let tromso = Observer::new(69.6492, 18.9553).unwrap();
/// assert!(Observer::new(91.0, 0.0).is_err());
/// assert_eq!(
///     Observer::new(0.0, 181.0).unwrap_err(),
///     CalculationError::LongitudeOutOfRange,
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Observer {
    /// Latitude in radians, positive north.
    latitude: f64,
    /// Longitude in radians, positive east.
    longitude: f64,
}

impl Observer {
    /// Creates an observer from coordinates in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if `latitude_deg` is outside [-90, 90] or
    /// `longitude_deg` is outside [-180, 180]. Non-finite values are
    /// rejected by the same checks, so no NaN ever reaches the solvers.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, CalculationError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(CalculationError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(CalculationError::LongitudeOutOfRange);
        }
        Ok(Self {
            latitude: latitude_deg.to_radians(),
            longitude: longitude_deg.to_radians(),
        })
    }

    /// Latitude in radians, positive north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in radians, positive east.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the sun's horizontal position at the given instant.
    ///
    /// A pure function of the instant and this observer; nothing is
    /// cached, and repeated calls are cheap (a handful of trigonometric
    /// operations).
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use solar_almanac::Observer;
    ///
    /// let observer = Observer::new(50.5, 30.5).unwrap();
    /// let instant = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
    /// let position = observer.sun_position(instant);
    /// // Well before dawn: the sun is far below the horizon.
    /// assert!(position.altitude_degrees() < -30.0);
    /// ```
    pub fn sun_position(&self, instant: DateTime<Utc>) -> SunPosition {
        let lw = -self.longitude;
        let days = time::days_since_j2000(instant);
        let coords = ephemeris::EquatorialCoordinates::new(days);
        let hour_angle = ephemeris::sidereal_time(days, lw) - coords.right_ascension;
        SunPosition {
            azimuth: ephemeris::azimuth(hour_angle, self.latitude, coords.declination),
            altitude: ephemeris::altitude(hour_angle, self.latitude, coords.declination),
        }
    }

    /// Returns the table of solar event times for the UTC calendar day
    /// containing `instant`.
    ///
    /// Only the date component of `instant` matters: any two instants of
    /// the same UTC calendar day produce identical results. The chosen
    /// solar noon is the meridian crossing nearest the middle of that day,
    /// and the nadir precedes it by exactly half a day.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::TimeConversionError`] only when a
    /// computed instant would leave chrono's representable range, i.e. for
    /// inputs at the very edge of that range.
    pub fn solar_times(&self, instant: DateTime<Utc>) -> Result<SolarTimes, CalculationError> {
        events::solar_times(instant, self)
    }
}

/// The sun's position in local horizontal coordinates.
///
/// Raw angles are in radians, with the azimuth measured from true south,
/// positive toward west: the convention the solver works in. The degree
/// accessors are derived views for display purposes, with
/// [`azimuth_degrees`](Self::azimuth_degrees) re-based to the familiar
/// compass convention (0° = north, clockwise).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SunPosition {
    /// Altitude above the horizon in radians, positive up.
    pub altitude: f64,
    /// Azimuth in radians, 0 at true south, increasing toward west.
    pub azimuth: f64,
}

impl SunPosition {
    /// Altitude above the horizon in degrees.
    pub fn altitude_degrees(&self) -> f64 {
        self.altitude.to_degrees()
    }

    /// Compass azimuth in degrees, normalized to [0, 360).
    ///
    /// 0° = north, 90° = east, 180° = south, 270° = west.
    pub fn azimuth_degrees(&self) -> f64 {
        normalize_degrees_360(180.0 + self.azimuth.to_degrees())
    }
}

/// The named solar event instants of one UTC calendar day.
///
/// Constructed by [`Observer::solar_times`]; a plain immutable value
/// record. [`solar_noon`](Self::solar_noon) and [`nadir`](Self::nadir)
/// always exist. Every other field is an independently optional pair with
/// its mirror event: for each altitude threshold either both the rising
/// and the setting instants are present, or both are absent because the
/// sun stays entirely above or entirely below that threshold for the
/// whole day. A missing pair is an ordinary outcome at high latitudes,
/// not a failure.
///
/// When present, events are ordered:
///
/// ```text
/// night_end < nautical_dawn < dawn < sunrise < sunrise_end
///     < solar_noon <
/// sunset_start < sunset < dusk < nautical_dusk < night
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarTimes {
    /// The instant the sun crosses the observer's meridian (solar noon).
    /// Always present.
    pub solar_noon: DateTime<Utc>,
    /// The instant the sun crosses the observer's antimeridian (solar
    /// midnight), exactly half a day before [`solar_noon`](Self::solar_noon).
    /// Always present.
    pub nadir: DateTime<Utc>,

    /// Top of the solar disk touches the horizon (altitude -0.83°, rising).
    pub sunrise: Option<DateTime<Utc>>,
    /// Bottom of the solar disk touches the horizon (altitude -0.83°, setting).
    pub sunset: Option<DateTime<Utc>>,
    /// Solar disk fully above the horizon (altitude -0.3°, rising).
    pub sunrise_end: Option<DateTime<Utc>>,
    /// Solar disk starts touching the horizon (altitude -0.3°, setting).
    pub sunset_start: Option<DateTime<Utc>>,

    /// Civil dawn: morning civil twilight begins (altitude -6°, rising).
    pub dawn: Option<DateTime<Utc>>,
    /// Civil dusk: evening civil twilight ends (altitude -6°, setting).
    pub dusk: Option<DateTime<Utc>>,
    /// Nautical dawn (altitude -12°, rising).
    pub nautical_dawn: Option<DateTime<Utc>>,
    /// Nautical dusk (altitude -12°, setting).
    pub nautical_dusk: Option<DateTime<Utc>>,
    /// Astronomical night ends (altitude -18°, rising).
    pub night_end: Option<DateTime<Utc>>,
    /// Astronomical night begins (altitude -18°, setting).
    pub night: Option<DateTime<Utc>>,

    /// Morning golden hour begins (altitude -4°, rising).
    pub morning_golden_hour_start: Option<DateTime<Utc>>,
    /// Morning golden hour ends (altitude 6°, rising).
    pub morning_golden_hour_end: Option<DateTime<Utc>>,
    /// Evening golden hour begins (altitude 6°, setting).
    pub evening_golden_hour_start: Option<DateTime<Utc>>,
    /// Evening golden hour ends (altitude -4°, setting).
    pub evening_golden_hour_end: Option<DateTime<Utc>>,

    /// Morning blue hour begins; coincides with [`dawn`](Self::dawn).
    /// Present only when the sun traverses the full -6°..-4° band that day.
    pub morning_blue_hour_start: Option<DateTime<Utc>>,
    /// Morning blue hour ends; coincides with
    /// [`morning_golden_hour_start`](Self::morning_golden_hour_start).
    pub morning_blue_hour_end: Option<DateTime<Utc>>,
    /// Evening blue hour begins; coincides with
    /// [`evening_golden_hour_end`](Self::evening_golden_hour_end).
    pub evening_blue_hour_start: Option<DateTime<Utc>>,
    /// Evening blue hour ends; coincides with [`dusk`](Self::dusk).
    pub evening_blue_hour_end: Option<DateTime<Utc>>,
}

impl SolarTimes {
    /// Time from sunrise to sunset, when the day has both.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use solar_almanac::Observer;
    ///
    /// let equator = Observer::new(0.0, 0.0).unwrap();
    /// let instant = Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap();
    /// let times = equator.solar_times(instant).unwrap();
    /// let length = times.day_length().unwrap();
    /// // Equinox at the equator: about twelve hours of daylight.
    /// assert!((length.num_minutes() - 12 * 60).abs() < 15);
    /// ```
    pub fn day_length(&self) -> Option<Duration> {
        Some(self.sunset? - self.sunrise?)
    }
}

/// Errors reported by this crate.
///
/// Domain non-occurrence (a threshold the sun never crosses that day) is
/// deliberately *not* an error: it appears as absent fields in
/// [`SolarTimes`]. Errors are reserved for rejected inputs and for time
/// values that cannot be represented.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    /// Latitude out of valid range [-90°, 90°]
    #[error("Latitude out of range")]
    LatitudeOutOfRange,

    /// Longitude out of valid range [-180°, 180°]
    #[error("Longitude out of range")]
    LongitudeOutOfRange,

    /// Error converting between time representations
    #[error("Time conversion error")]
    TimeConversionError,
}
