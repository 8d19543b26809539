//! Earth's heliocentric position and the Sun's geocentric ecliptic position.

#[allow(unused_imports)]
use core_maths::CoreFloat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::normalize_degrees_360;
use crate::terms::{B_TERMS, L_TERMS, R_TERMS};

/// Scaling factor of the periodic-term amplitudes (10^8).
const EARTH_POSITION_SCALE_FACTOR: f64 = 1.0e8;

/// Earth's position relative to the Sun.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeliocentricPosition {
    /// Heliocentric longitude `L` in degrees, [0, 360).
    pub longitude: f64,
    /// Heliocentric latitude `B` in degrees.
    pub latitude: f64,
    /// Earth–Sun distance `R` in astronomical units.
    pub radius: f64,
}

/// The Sun's position as seen from Earth's centre, in ecliptic coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeocentricPosition {
    /// Geocentric longitude `Θ` in degrees, [0, 360).
    pub longitude: f64,
    /// Geocentric latitude `β` in degrees.
    pub latitude: f64,
}

impl HeliocentricPosition {
    /// Evaluates the L, B and R series at the given Julian ephemeris millennium.
    pub fn at(julian_millennium: f64) -> Self {
        Self {
            longitude: earth_heliocentric_longitude(julian_millennium),
            latitude: earth_heliocentric_latitude(julian_millennium),
            radius: earth_radius_vector(julian_millennium),
        }
    }

    /// Turns the Earth-from-Sun direction around into Sun-from-Earth.
    pub fn geocentric(&self) -> GeocentricPosition {
        GeocentricPosition {
            longitude: geocentric_longitude(self.longitude),
            latitude: geocentric_latitude(self.latitude),
        }
    }
}

/// Sums one sub-series: `Σ A·cos(B + C·jme)`.
pub(crate) fn earth_periodic_term_sum(terms: &[[f64; 3]], julian_millennium: f64) -> f64 {
    terms
        .iter()
        .map(|&[amplitude, phase, frequency]| amplitude * (phase + frequency * julian_millennium).cos())
        .sum()
}

/// Combines the sub-series sums as a power series in `jme`, scaled by 10^-8.
pub(crate) fn earth_values(term_sums: impl Iterator<Item = f64>, julian_millennium: f64) -> f64 {
    let mut power = 1.0;
    let mut sum = 0.0;
    for term_sum in term_sums {
        sum += term_sum * power;
        power *= julian_millennium;
    }
    sum / EARTH_POSITION_SCALE_FACTOR
}

fn evaluate_series(series: &[&[[f64; 3]]], julian_millennium: f64) -> f64 {
    let sums = series
        .iter()
        .map(|terms| earth_periodic_term_sum(terms, julian_millennium));
    earth_values(sums, julian_millennium)
}

/// Earth's heliocentric longitude in degrees, [0, 360).
pub(crate) fn earth_heliocentric_longitude(julian_millennium: f64) -> f64 {
    normalize_degrees_360(evaluate_series(&L_TERMS, julian_millennium).to_degrees())
}

/// Earth's heliocentric latitude in degrees. Not range-limited.
pub(crate) fn earth_heliocentric_latitude(julian_millennium: f64) -> f64 {
    evaluate_series(&B_TERMS, julian_millennium).to_degrees()
}

/// Earth–Sun distance in astronomical units.
pub(crate) fn earth_radius_vector(julian_millennium: f64) -> f64 {
    evaluate_series(&R_TERMS, julian_millennium)
}

/// Geocentric longitude is the heliocentric longitude + 180°.
///
/// The input is already in [0, 360), so a single subtraction is enough.
pub(crate) fn geocentric_longitude(heliocentric_longitude: f64) -> f64 {
    let geocentric = heliocentric_longitude + 180.0;
    if geocentric >= 360.0 {
        geocentric - 360.0
    } else {
        geocentric
    }
}

pub(crate) fn geocentric_latitude(heliocentric_latitude: f64) -> f64 {
    -heliocentric_latitude
}
