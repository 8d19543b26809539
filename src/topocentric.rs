//! From the apparent geocentric Sun to what an observer on the surface sees.
//!
//! Covers aberration and sidereal time, the geocentric equatorial
//! coordinates, then the observer-specific steps: hour angle, parallax,
//! atmospheric refraction, zenith and azimuth.

#[allow(unused_imports)]
use core_maths::CoreFloat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::normalize_degrees_360;
use crate::spa::GeocentricSun;
use crate::time::J2000_EPOCH_JD;
use crate::types::SpaInput;

/// Apparent angular radius of the Sun in degrees.
pub(crate) const SUN_RADIUS: f64 = 0.26667;

const EARTH_EQUATORIAL_RADIUS_METERS: f64 = 6_378_140.0;

/// Ratio of Earth's polar to equatorial radius.
const EARTH_AXIS_RATIO: f64 = 0.996_647_19;

/// Equatorial horizontal parallax at 1 AU, arcseconds.
const SOLAR_PARALLAX_ARCSEC: f64 = 8.794;

/// Constant of annual aberration, arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

// ============================================================================
// Apparent geocentric position
// ============================================================================

/// Aberration correction `Δτ` in degrees for an Earth–Sun distance in AU.
pub(crate) fn aberration_correction(earth_radius_vector: f64) -> f64 {
    -ABERRATION_ARCSEC / (3600.0 * earth_radius_vector)
}

/// Apparent Sun longitude `λ = Θ + Δψ + Δτ` in degrees.
pub(crate) fn apparent_sun_longitude(geocentric_longitude: f64, nutation_longitude: f64, aberration: f64) -> f64 {
    geocentric_longitude + nutation_longitude + aberration
}

/// Greenwich mean sidereal time `ν0` in degrees, [0, 360).
pub(crate) fn greenwich_mean_sidereal_time(julian_day: f64, julian_century: f64) -> f64 {
    normalize_degrees_360(
        280.460_618_37
            + 360.985_647_366_29 * (julian_day - J2000_EPOCH_JD)
            + julian_century * julian_century * (0.000_387_933 - julian_century / 38_710_000.0),
    )
}

/// Greenwich apparent sidereal time `ν` in degrees.
///
/// Not re-limited; `ν0` is in [0, 360) and the nutation term is tiny.
pub(crate) fn greenwich_apparent_sidereal_time(mean_sidereal_time: f64, nutation_longitude: f64, true_obliquity: f64) -> f64 {
    mean_sidereal_time + nutation_longitude * true_obliquity.to_radians().cos()
}

/// Geocentric right ascension `α` in degrees, [0, 360).
pub(crate) fn geocentric_right_ascension(apparent_longitude: f64, true_obliquity: f64, geocentric_latitude: f64) -> f64 {
    let lambda = apparent_longitude.to_radians();
    let epsilon = true_obliquity.to_radians();
    let beta = geocentric_latitude.to_radians();

    normalize_degrees_360(
        (lambda.sin() * epsilon.cos() - beta.tan() * epsilon.sin())
            .atan2(lambda.cos())
            .to_degrees(),
    )
}

/// Geocentric declination `δ` in degrees.
pub(crate) fn geocentric_declination(apparent_longitude: f64, true_obliquity: f64, geocentric_latitude: f64) -> f64 {
    let lambda = apparent_longitude.to_radians();
    let epsilon = true_obliquity.to_radians();
    let beta = geocentric_latitude.to_radians();

    (beta.sin() * epsilon.cos() + beta.cos() * epsilon.sin() * lambda.sin())
        .asin()
        .to_degrees()
}

// ============================================================================
// Observer
// ============================================================================

/// Local hour angle `H` in degrees, [0, 360), measured westward from south.
pub(crate) fn observer_hour_angle(sidereal_time: f64, longitude: f64, right_ascension: f64) -> f64 {
    normalize_degrees_360(sidereal_time + longitude - right_ascension)
}

/// Equatorial horizontal parallax `ξ` in degrees.
pub(crate) fn equatorial_horizontal_parallax(earth_radius_vector: f64) -> f64 {
    SOLAR_PARALLAX_ARCSEC / (3600.0 * earth_radius_vector)
}

/// Parallax in right ascension `Δα` and the topocentric declination `δ′`,
/// both in degrees.
pub(crate) fn right_ascension_parallax_and_declination(
    latitude: f64,
    elevation: f64,
    parallax: f64,
    hour_angle: f64,
    declination: f64,
) -> (f64, f64) {
    let latitude = latitude.to_radians();
    let xi = parallax.to_radians();
    let hour_angle = hour_angle.to_radians();
    let declination = declination.to_radians();

    let u = (EARTH_AXIS_RATIO * latitude.tan()).atan();
    let y = EARTH_AXIS_RATIO * u.sin() + elevation * latitude.sin() / EARTH_EQUATORIAL_RADIUS_METERS;
    let x = u.cos() + elevation * latitude.cos() / EARTH_EQUATORIAL_RADIUS_METERS;

    let denominator = declination.cos() - x * xi.sin() * hour_angle.cos();
    let delta_alpha = (-x * xi.sin() * hour_angle.sin()).atan2(denominator);
    let declination_prime = ((declination.sin() - y * xi.sin()) * delta_alpha.cos()).atan2(denominator);

    (delta_alpha.to_degrees(), declination_prime.to_degrees())
}

/// Topocentric elevation `e0` in degrees, before refraction.
pub(crate) fn topocentric_elevation(latitude: f64, declination_prime: f64, hour_angle_prime: f64) -> f64 {
    let latitude = latitude.to_radians();
    let declination = declination_prime.to_radians();
    let hour_angle = hour_angle_prime.to_radians();

    (latitude.sin() * declination.sin() + latitude.cos() * declination.cos() * hour_angle.cos())
        .asin()
        .to_degrees()
}

/// Bennett's refraction correction `Δe` in degrees.
///
/// Zero once the Sun is entirely below the horizon, i.e. when
/// `e0 < -(SUN_RADIUS + atmos_refract)`.
pub(crate) fn refraction_correction(pressure: f64, temperature: f64, atmos_refract: f64, elevation: f64) -> f64 {
    if elevation >= -(SUN_RADIUS + atmos_refract) {
        (pressure / 1010.0) * (283.0 / (273.0 + temperature)) * 1.02
            / (60.0 * (elevation + 10.3 / (elevation + 5.11)).to_radians().tan())
    } else {
        0.0
    }
}

/// Astronomers' azimuth `Γ` in degrees, westward from south, [0, 360).
pub(crate) fn topocentric_azimuth_astronomical(hour_angle_prime: f64, latitude: f64, declination_prime: f64) -> f64 {
    let hour_angle = hour_angle_prime.to_radians();
    let latitude = latitude.to_radians();
    let declination = declination_prime.to_radians();

    normalize_degrees_360(
        hour_angle
            .sin()
            .atan2(hour_angle.cos() * latitude.sin() - declination.tan() * latitude.cos())
            .to_degrees(),
    )
}

/// Navigators' azimuth `Φ` in degrees, eastward from north, [0, 360).
pub(crate) fn topocentric_azimuth(azimuth_astronomical: f64) -> f64 {
    normalize_degrees_360(azimuth_astronomical + 180.0)
}

/// The Sun as seen by one observer at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopocentricPosition {
    /// Geocentric local hour angle `H`, degrees [0, 360).
    pub observer_hour_angle: f64,
    /// Equatorial horizontal parallax `ξ`, degrees.
    pub parallax: f64,
    /// Parallax in right ascension `Δα`, degrees.
    pub right_ascension_parallax: f64,
    /// Topocentric right ascension `α′`, degrees.
    pub right_ascension: f64,
    /// Topocentric declination `δ′`, degrees.
    pub declination: f64,
    /// Topocentric local hour angle `H′`, degrees.
    pub hour_angle: f64,
    /// Elevation `e0` without refraction, degrees.
    pub elevation_uncorrected: f64,
    /// Refraction correction `Δe`, degrees.
    pub refraction: f64,
    /// Elevation `e` with refraction, degrees.
    pub elevation: f64,
    /// Zenith angle, degrees.
    pub zenith: f64,
    /// Azimuth westward from south, degrees [0, 360).
    pub azimuth_astronomical: f64,
    /// Azimuth eastward from north, degrees [0, 360).
    pub azimuth: f64,
}

impl TopocentricPosition {
    /// Places the observer described by `input` under the apparent Sun.
    pub fn observe(sun: &GeocentricSun, input: &SpaInput) -> Self {
        let observer_hour_angle = observer_hour_angle(sun.sidereal_time, input.longitude, sun.right_ascension);
        let parallax = equatorial_horizontal_parallax(sun.heliocentric.radius);
        let (right_ascension_parallax, declination) = right_ascension_parallax_and_declination(
            input.latitude,
            input.elevation,
            parallax,
            observer_hour_angle,
            sun.declination,
        );

        let right_ascension = sun.right_ascension + right_ascension_parallax;
        let hour_angle = observer_hour_angle - right_ascension_parallax;

        let elevation_uncorrected = topocentric_elevation(input.latitude, declination, hour_angle);
        let refraction = refraction_correction(
            input.pressure,
            input.temperature,
            input.atmos_refract,
            elevation_uncorrected,
        );
        let elevation = elevation_uncorrected + refraction;

        let azimuth_astronomical = topocentric_azimuth_astronomical(hour_angle, input.latitude, declination);

        Self {
            observer_hour_angle,
            parallax,
            right_ascension_parallax,
            right_ascension,
            declination,
            hour_angle,
            elevation_uncorrected,
            refraction,
            elevation,
            zenith: 90.0 - elevation,
            azimuth_astronomical,
            azimuth: topocentric_azimuth(azimuth_astronomical),
        }
    }
}
