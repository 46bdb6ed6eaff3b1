//! Low-precision analytic solar ephemeris.
//!
//! The sun's geocentric equatorial coordinates are derived from its mean
//! anomaly, a three-term equation of center and a fixed mean obliquity.
//! Accuracy is on the order of an arcminute, which keeps derived event
//! times within a minute or so of high-order models: enough for daylight
//! and twilight scheduling, and far cheaper than a full VSOP87 series.

use core::f64::consts::PI;

#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Degrees to radians.
pub(crate) const RAD: f64 = PI / 180.0;

/// Mean obliquity of the ecliptic, in radians.
///
/// Held constant; the secular drift (~47″ per century) stays below the
/// model's accuracy over several centuries around J2000.
pub(crate) const OBLIQUITY: f64 = 23.4397 * RAD;

/// The sun's geocentric equatorial coordinates at one instant.
///
/// Depends only on the instant, never on the observer.
#[derive(Copy, Clone, Debug)]
pub(crate) struct EquatorialCoordinates {
    /// Declination in radians. Bounded by ±[`OBLIQUITY`] by construction.
    pub declination: f64,
    /// Right ascension in radians.
    pub right_ascension: f64,
}

impl EquatorialCoordinates {
    /// Coordinates for the given day offset from J2000.0.
    pub fn new(days: f64) -> Self {
        let ecliptic_lon = ecliptic_longitude(solar_mean_anomaly(days));
        Self {
            declination: declination(ecliptic_lon),
            right_ascension: right_ascension(ecliptic_lon),
        }
    }
}

/// Mean solar anomaly for the given day offset from J2000.0, in radians.
pub(crate) fn solar_mean_anomaly(days: f64) -> f64 {
    RAD * (357.5291 + 0.985_600_28 * days)
}

/// Ecliptic longitude of the sun from its mean anomaly, in radians.
///
/// Mean anomaly plus the equation of center plus the perihelion offset,
/// rotated by π from the earth-centered to the sun-centered direction.
pub(crate) fn ecliptic_longitude(mean_anomaly: f64) -> f64 {
    let center = RAD
        * (1.9148 * mean_anomaly.sin()
            + 0.02 * (2.0 * mean_anomaly).sin()
            + 0.0003 * (3.0 * mean_anomaly).sin());
    let perihelion = RAD * 102.9372;
    mean_anomaly + center + perihelion + PI
}

/// Declination for an ecliptic longitude on the ecliptic plane, in radians.
pub(crate) fn declination(ecliptic_lon: f64) -> f64 {
    (OBLIQUITY.sin() * ecliptic_lon.sin()).asin()
}

/// Right ascension for an ecliptic longitude on the ecliptic plane, in radians.
pub(crate) fn right_ascension(ecliptic_lon: f64) -> f64 {
    (ecliptic_lon.sin() * OBLIQUITY.cos()).atan2(ecliptic_lon.cos())
}

/// Local sidereal time in radians.
///
/// `lw` is the observer's longitude with west positive, the sign
/// convention used throughout the event solver.
pub(crate) fn sidereal_time(days: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.985_623_5 * days) - lw
}

/// Altitude above the horizon, in radians, for hour angle `h`, observer
/// latitude `phi` and solar declination `dec`.
pub(crate) fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Azimuth in radians, measured from true south, positive toward west.
///
/// The formula is degenerate (though still finite in IEEE arithmetic) when
/// the observer stands exactly on a pole: every direction is north (or
/// south), so the returned angle is arbitrary there.
pub(crate) fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}
