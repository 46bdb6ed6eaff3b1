use chrono::{DateTime, TimeZone, Utc};
use julian_day_converter::julian_day_to_unix_millis;
use julian_day_converter::unix_millis_to_julian_day;

use crate::CalculationError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 UT).
pub(crate) const JD0: f64 = 2_451_545.0;

/// Convert a UTC instant to a Julian Date.
///
/// The conversion goes through Unix milliseconds, so the round trip with
/// [`from_julian_date`] is exact to the millisecond. The mapping is
/// monotonic: later instants always produce larger Julian Dates.
pub(crate) fn to_julian_date(instant: DateTime<Utc>) -> f64 {
    unix_millis_to_julian_day(instant.timestamp_millis())
}

/// Convert a Julian Date back to a UTC instant.
///
/// Fails only when the Julian Date falls outside chrono's representable
/// range (roughly ±262,000 years from the common era).
pub(crate) fn from_julian_date(julian_date: f64) -> Result<DateTime<Utc>, CalculationError> {
    let unix_millis = julian_day_to_unix_millis(julian_date);
    Utc.timestamp_millis_opt(unix_millis)
        .single()
        .ok_or(CalculationError::TimeConversionError)
}

/// Days (with fraction) since the J2000.0 epoch.
pub(crate) fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    to_julian_date(instant) - JD0
}

/// UTC noon of the instant's UTC calendar date.
///
/// All per-day solar math is anchored here: every instant of one UTC
/// calendar day selects the same Julian cycle, and the chosen transit is
/// the one nearest the middle of that day.
pub(crate) fn utc_noon_anchor(instant: DateTime<Utc>) -> Result<DateTime<Utc>, CalculationError> {
    instant
        .date_naive()
        .and_hms_opt(12, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or(CalculationError::TimeConversionError)
}
