//! Solar transit and the threshold-crossing event-time solver.
//!
//! Event instants are solved analytically, not searched: for each altitude
//! threshold the hour angle of the crossing follows from one closed-form
//! expression, and the rising/setting pair falls out symmetrically around
//! the refined transit. A threshold the sun never crosses that day yields
//! no instants at all: that outcome is a normal value here, never an
//! error.

use core::f64::consts::PI;

use chrono::{DateTime, Utc};

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::ephemeris::{self, RAD};
use crate::time::{self, JD0};
use crate::{CalculationError, Observer, SolarTimes};

/// Mean offset of solar transit from the Julian cycle origin, in days.
const J0: f64 = 0.0009;

/// Floor for the hour-angle denominator `cos φ · cos δ`. Below it the
/// observer stands on a pole, the sun holds one altitude all day, and the
/// day is classified from the numerator's sign instead of dividing.
const POLAR_DENOMINATOR_EPS: f64 = 1e-9;

/// One entry of the fixed event table: an altitude threshold and the
/// result fields its rising and setting instants land in.
struct EventThreshold {
    altitude_deg: f64,
    write: fn(&mut SolarTimes, Option<DateTime<Utc>>, Option<DateTime<Utc>>),
}

/// The named altitude thresholds, solved independently per entry.
///
/// -0.83° bakes the standard refraction correction and the solar radius
/// into the horizon crossing; -0.3° marks the solar disk fully above the
/// horizon. The remaining entries are the civil, nautical and
/// astronomical twilight bounds and the golden hour band.
const EVENT_TABLE: [EventThreshold; 7] = [
    EventThreshold {
        altitude_deg: -0.83,
        write: |t, rising, setting| {
            t.sunrise = rising;
            t.sunset = setting;
        },
    },
    EventThreshold {
        altitude_deg: -0.3,
        write: |t, rising, setting| {
            t.sunrise_end = rising;
            t.sunset_start = setting;
        },
    },
    EventThreshold {
        altitude_deg: -6.0,
        write: |t, rising, setting| {
            t.dawn = rising;
            t.dusk = setting;
        },
    },
    EventThreshold {
        altitude_deg: -12.0,
        write: |t, rising, setting| {
            t.nautical_dawn = rising;
            t.nautical_dusk = setting;
        },
    },
    EventThreshold {
        altitude_deg: -18.0,
        write: |t, rising, setting| {
            t.night_end = rising;
            t.night = setting;
        },
    },
    EventThreshold {
        altitude_deg: 6.0,
        write: |t, rising, setting| {
            t.morning_golden_hour_end = rising;
            t.evening_golden_hour_start = setting;
        },
    },
    EventThreshold {
        altitude_deg: -4.0,
        write: |t, rising, setting| {
            t.morning_golden_hour_start = rising;
            t.evening_golden_hour_end = setting;
        },
    },
];

/// Outcome of one threshold solve.
#[derive(Copy, Clone, Debug)]
enum Crossing {
    /// The sun crosses the threshold twice: rising before transit,
    /// setting after, both as Julian Dates.
    Crosses { rising: f64, setting: f64 },
    /// The sun stays above the threshold for the whole day.
    AlwaysAbove,
    /// The sun stays below the threshold for the whole day.
    AlwaysBelow,
}

impl Crossing {
    /// Surface the solve as the rising/setting field pair: both instants
    /// or neither, never one without the other.
    fn into_pair(self) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), CalculationError> {
        match self {
            Crossing::Crosses { rising, setting } => Ok((
                Some(time::from_julian_date(rising)?),
                Some(time::from_julian_date(setting)?),
            )),
            Crossing::AlwaysAbove | Crossing::AlwaysBelow => Ok((None, None)),
        }
    }
}

/// Per-day solar quantities shared by the transit and every threshold
/// solve: the Julian cycle of the anchor day, the ephemeris sampled at
/// approximate transit, and the refined transit itself.
struct SolarDay {
    phi: f64,
    lw: f64,
    cycle: f64,
    mean_anomaly: f64,
    ecliptic_lon: f64,
    declination: f64,
    j_transit: f64,
}

impl SolarDay {
    fn new(anchor: DateTime<Utc>, observer: &Observer) -> Self {
        let phi = observer.latitude;
        let lw = -observer.longitude;
        let days = time::days_since_j2000(anchor);
        let cycle = (days - J0 - lw / (2.0 * PI)).round();
        let ds = approx_transit(0.0, lw, cycle);
        let mean_anomaly = ephemeris::solar_mean_anomaly(ds);
        let ecliptic_lon = ephemeris::ecliptic_longitude(mean_anomaly);
        Self {
            phi,
            lw,
            cycle,
            mean_anomaly,
            ecliptic_lon,
            declination: ephemeris::declination(ecliptic_lon),
            j_transit: refine_transit(ds, mean_anomaly, ecliptic_lon),
        }
    }

    /// Solve one altitude threshold analytically.
    ///
    /// The hour angle of the crossing satisfies
    /// `cos H = (sin h0 - sin φ sin δ) / (cos φ cos δ)`; a quotient
    /// outside [-1, 1] means the sun never reaches (or never leaves) the
    /// threshold that day.
    fn crossings(&self, altitude_deg: f64) -> Crossing {
        let h0 = altitude_deg * RAD;
        let numerator = h0.sin() - self.phi.sin() * self.declination.sin();
        let denominator = self.phi.cos() * self.declination.cos();
        if denominator < POLAR_DENOMINATOR_EPS {
            // Polar observer: the sun circles at a constant altitude of
            // ±declination, so the whole day sits on one side of h0.
            return if numerator > 0.0 {
                Crossing::AlwaysBelow
            } else {
                Crossing::AlwaysAbove
            };
        }
        let cos_h = numerator / denominator;
        if cos_h > 1.0 {
            return Crossing::AlwaysBelow;
        }
        if cos_h < -1.0 {
            return Crossing::AlwaysAbove;
        }
        let ds = approx_transit(cos_h.acos(), self.lw, self.cycle);
        let setting = refine_transit(ds, self.mean_anomaly, self.ecliptic_lon);
        Crossing::Crosses {
            rising: 2.0 * self.j_transit - setting,
            setting,
        }
    }
}

/// Day fraction since J2000.0 at which the sun reaches hour angle `ht`,
/// to first order (refined by [`refine_transit`]).
fn approx_transit(ht: f64, lw: f64, cycle: f64) -> f64 {
    J0 + (ht + lw) / (2.0 * PI) + cycle
}

/// Refine a day-fraction estimate into the Julian Date of the crossing it
/// approximates, via the equation of time implied by the ephemeris.
fn refine_transit(ds: f64, mean_anomaly: f64, ecliptic_lon: f64) -> f64 {
    JD0 + ds + 0.0053 * mean_anomaly.sin() - 0.0069 * (2.0 * ecliptic_lon).sin()
}

/// Build the full event table for the UTC calendar day containing
/// `instant`.
pub(crate) fn solar_times(
    instant: DateTime<Utc>,
    observer: &Observer,
) -> Result<SolarTimes, CalculationError> {
    let anchor = time::utc_noon_anchor(instant)?;
    let day = SolarDay::new(anchor, observer);

    let mut times = SolarTimes {
        solar_noon: time::from_julian_date(day.j_transit)?,
        nadir: time::from_julian_date(day.j_transit - 0.5)?,
        sunrise: None,
        sunset: None,
        sunrise_end: None,
        sunset_start: None,
        dawn: None,
        dusk: None,
        nautical_dawn: None,
        nautical_dusk: None,
        night_end: None,
        night: None,
        morning_golden_hour_start: None,
        morning_golden_hour_end: None,
        evening_golden_hour_start: None,
        evening_golden_hour_end: None,
        morning_blue_hour_start: None,
        morning_blue_hour_end: None,
        evening_blue_hour_start: None,
        evening_blue_hour_end: None,
    };

    for threshold in &EVENT_TABLE {
        let (rising, setting) = day.crossings(threshold.altitude_deg).into_pair()?;
        (threshold.write)(&mut times, rising, setting);
    }

    // Blue hour is the -6°..-4° band, read off the two crossings already
    // solved above. Each field needs both thresholds to cross that day.
    if let (Some(start), Some(end)) = (times.dawn, times.morning_golden_hour_start) {
        times.morning_blue_hour_start = Some(start);
        times.morning_blue_hour_end = Some(end);
    }
    if let (Some(start), Some(end)) = (times.evening_golden_hour_end, times.dusk) {
        times.evening_blue_hour_start = Some(start);
        times.evening_blue_hour_end = Some(end);
    }

    Ok(times)
}
