#[allow(unused_imports)]
use core_maths::CoreFloat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::normalize_unit_interval;

/// Julian Day of the J2000.0 epoch.
pub(crate) const J2000_EPOCH_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Last Julian Day of the Julian calendar (1582-10-04).
const GREGORIAN_REFORM_JD: f64 = 2_299_160.0;

/// The time scales one evaluation runs on.
///
/// All values derive from a single Julian Day in UT plus ΔT. The ephemeris
/// variants (`jde`, `jce`, `jme`) drive the periodic-term and nutation
/// series; `jd` and `jc` drive sidereal time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JulianTime {
    /// Julian Day (UT).
    pub jd: f64,
    /// Julian century since J2000.0.
    pub jc: f64,
    /// Julian Ephemeris Day (TT).
    pub jde: f64,
    /// Julian Ephemeris Century since J2000.0.
    pub jce: f64,
    /// Julian Ephemeris Millennium since J2000.0.
    pub jme: f64,
}

impl JulianTime {
    /// Derives every time scale from a Julian Day and ΔT (TT − UT, seconds).
    pub fn new(jd: f64, delta_t: f64) -> Self {
        let jc = julian_century(jd);
        let jde = julian_ephemeris_day(jd, delta_t);
        let jce = julian_ephemeris_century(jde);
        let jme = julian_ephemeris_millennium(jce);
        Self { jd, jc, jde, jce, jme }
    }
}

/// Compute the astronomical Julian Day for a calendar date and local time.
///
/// - `timezone`: hours east of UTC; it is subtracted from `hour` so the
///   result is in UT.
/// - `delta_ut1`: UT1 − UTC in **seconds**, added to `second`.
///
/// January and February count as months 13 and 14 of the previous year.
/// The Gregorian correction applies only after the 1582 calendar reform, so
/// earlier dates stay on the proleptic Julian calendar.
#[allow(clippy::too_many_arguments)]
pub fn julian_day(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
    delta_ut1: f64,
    timezone: f64,
) -> f64 {
    let day_decimal = f64::from(day)
        + (f64::from(hour) - timezone + (f64::from(minute) + (second + delta_ut1) / 60.0) / 60.0) / 24.0;

    let (year, month) = if month < 3 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let mut julian_day = (365.25 * (year + 4716.0)).trunc() + (30.6001 * (month + 1.0)).trunc() + day_decimal - 1524.5;

    if julian_day > GREGORIAN_REFORM_JD {
        let a = (year / 100.0).trunc();
        julian_day += 2.0 - a + (a / 4.0).trunc();
    }
    julian_day
}

/// Julian century (T) from the given Julian Day (JD),
/// measured in Julian centuries since the J2000.0 epoch.
pub(crate) fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_EPOCH_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian Ephemeris Day (JDE) from Julian Day (JD) and ΔT `delta_t`.
///
/// - `julian_day`: Julian Day in UT.
/// - `delta_t`: Difference TT − UT in **seconds** (ΔT).
pub(crate) fn julian_ephemeris_day(julian_day: f64, delta_t: f64) -> f64 {
    julian_day + delta_t / 86_400.0
}

/// Julian Ephemeris Century (JCE) from Julian Ephemeris Day (JDE).
pub(crate) fn julian_ephemeris_century(ephemeris_day: f64) -> f64 {
    (ephemeris_day - J2000_EPOCH_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian Ephemeris Millennium (JME) from Julian Ephemeris Century (JCE).
pub(crate) fn julian_ephemeris_millennium(ephemeris_century: f64) -> f64 {
    ephemeris_century / 10.0
}

/// Normalize a time offset (in minutes) to a small range around zero.
///
/// The input is assumed to be off from the true offset by at most one whole
/// day. Values more than 20 minutes away from zero are shifted by one day
/// (1440 minutes).
pub(crate) fn normalize_time_offset_minutes(minutes: f64) -> f64 {
    if minutes < -20.0 {
        minutes + 1440.0
    } else if minutes > 20.0 {
        minutes - 1440.0
    } else {
        minutes
    }
}

/// Compute the equation of time in minutes.
///
/// # Arguments
///
/// * `mean_longitude_deg` - Mean longitude of the Sun (degrees).
/// * `right_ascension_deg` - Geocentric right ascension of the Sun (degrees).
/// * `nutation_longitude_deg` - Nutation in longitude (degrees).
/// * `true_obliquity_deg` - True obliquity of the ecliptic (degrees).
pub(crate) fn equation_of_time(
    mean_longitude_deg: f64,
    right_ascension_deg: f64,
    nutation_longitude_deg: f64,
    true_obliquity_deg: f64,
) -> f64 {
    normalize_time_offset_minutes(
        4.0 * (mean_longitude_deg - 0.005_718_3 - right_ascension_deg
            + nutation_longitude_deg * true_obliquity_deg.to_radians().cos()),
    )
}

/// Convert a fraction of a UT day to a local hour of the day in [0, 24).
///
/// `timezone` is the offset from UTC in hours; the result wraps around
/// midnight when the offset pushes it past either end of the day.
pub(crate) fn dayfrac_to_local_hr(day_fraction: f64, timezone: f64) -> f64 {
    24.0 * normalize_unit_interval(day_fraction + timezone / 24.0)
}
