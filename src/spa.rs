//! The full pipeline: validation, the date-only geocentric stages, then the
//! observer-specific stages and the optional extensions.

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SpaError;
use crate::heliocentric::{GeocentricPosition, HeliocentricPosition};
use crate::incidence::surface_incidence_angle;
use crate::nutation::{Nutation, Obliquity};
use crate::rts::rise_transit_set;
use crate::time::{julian_day, JulianTime};
use crate::topocentric::{
    aberration_correction, apparent_sun_longitude, geocentric_declination, geocentric_right_ascension,
    greenwich_apparent_sidereal_time, greenwich_mean_sidereal_time, TopocentricPosition,
};
use crate::types::{SpaInput, SpaOutput};
use crate::validate::validate_inputs;

/// The apparent Sun at one instant, independent of the observer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeocentricSun {
    pub time: JulianTime,
    pub heliocentric: HeliocentricPosition,
    pub geocentric: GeocentricPosition,
    pub nutation: Nutation,
    pub obliquity: Obliquity,
    /// Aberration correction `Δτ`, degrees.
    pub aberration: f64,
    /// Apparent Sun longitude `λ`, degrees.
    pub apparent_longitude: f64,
    /// Greenwich mean sidereal time `ν0`, degrees.
    pub mean_sidereal_time: f64,
    /// Greenwich apparent sidereal time `ν`, degrees.
    pub sidereal_time: f64,
    /// Geocentric right ascension `α`, degrees [0, 360).
    pub right_ascension: f64,
    /// Geocentric declination `δ`, degrees.
    pub declination: f64,
}

/// Computes the apparent geocentric Sun for a Julian Day (UT) and ΔT in
/// seconds.
///
/// This is every stage that does not depend on where the observer stands,
/// so one result can be shared across many locations.
pub fn geocentric_sun(jd: f64, delta_t: f64) -> GeocentricSun {
    let time = JulianTime::new(jd, delta_t);

    let heliocentric = HeliocentricPosition::at(time.jme);
    let geocentric = heliocentric.geocentric();

    let nutation = Nutation::at(time.jce);
    let obliquity = Obliquity::at(time.jme, nutation.obliquity);

    let aberration = aberration_correction(heliocentric.radius);
    let apparent_longitude = apparent_sun_longitude(geocentric.longitude, nutation.longitude, aberration);

    let mean_sidereal_time = greenwich_mean_sidereal_time(time.jd, time.jc);
    let sidereal_time =
        greenwich_apparent_sidereal_time(mean_sidereal_time, nutation.longitude, obliquity.true_obliquity);

    GeocentricSun {
        time,
        heliocentric,
        geocentric,
        nutation,
        obliquity,
        aberration,
        apparent_longitude,
        mean_sidereal_time,
        sidereal_time,
        right_ascension: geocentric_right_ascension(
            apparent_longitude,
            obliquity.true_obliquity,
            geocentric.latitude,
        ),
        declination: geocentric_declination(apparent_longitude, obliquity.true_obliquity, geocentric.latitude),
    }
}

fn run_pipeline(input: &SpaInput, jd: f64) -> SpaOutput {
    let sun = geocentric_sun(jd, input.delta_t);
    let topocentric = TopocentricPosition::observe(&sun, input);

    let incidence = input.function.includes_incidence().then(|| {
        surface_incidence_angle(
            topocentric.zenith,
            topocentric.azimuth_astronomical,
            input.slope,
            input.azm_rotation,
        )
    });
    let rise_transit_set = input
        .function
        .includes_rise_transit_set()
        .then(|| rise_transit_set(input, &sun));

    trace!(
        "jd {}: zenith {:.6}°, azimuth {:.6}°",
        jd,
        topocentric.zenith,
        topocentric.azimuth
    );

    SpaOutput {
        sun,
        topocentric,
        incidence,
        rise_transit_set,
    }
}

/// Runs the whole algorithm and reports the validation status next to the
/// output.
///
/// The status is 0 for valid input, otherwise the [`SpaError::code`] of the
/// first violated range. The pipeline runs either way; on failed validation
/// the Julian Day is left at 0, so the outputs are meaningless but defined.
/// Use [`calculate`] to get an error instead.
///
/// # Example
///
/// ```
/// use solar_spa::{evaluate, SpaInput};
///
/// let input = SpaInput {
///     year: 2003,
///     month: 10,
///     day: 17,
///     hour: 12,
///     minute: 30,
///     second: 30.0,
///     timezone: -7.0,
///     ..SpaInput::default()
/// }
/// .with_location(39.742476, -105.1786, 1830.14)
/// .with_atmosphere(820.0, 11.0, 0.5667)
/// .with_time_corrections(0.0, 67.0);
///
/// let (output, status) = evaluate(&input);
/// assert_eq!(status, 0);
/// assert!((output.zenith() - 50.11162).abs() < 1e-4);
/// ```
pub fn evaluate(input: &SpaInput) -> (SpaOutput, i32) {
    let (jd, status) = match validate_inputs(input) {
        Ok(()) => (
            julian_day(
                input.year,
                input.month,
                input.day,
                input.hour,
                input.minute,
                input.second,
                input.delta_ut1,
                input.timezone,
            ),
            0,
        ),
        Err(error) => {
            debug!("invalid input (code {}): {}", error.code(), error);
            (0.0, error.code())
        }
    };

    (run_pipeline(input, jd), status)
}

/// Like [`evaluate`], but rejects invalid input instead of computing with it.
///
/// # Errors
///
/// Returns the first [`SpaError`] reported by
/// [`validate_inputs`](crate::validate_inputs).
pub fn calculate(input: &SpaInput) -> Result<SpaOutput, SpaError> {
    validate_inputs(input)?;
    let jd = julian_day(
        input.year,
        input.month,
        input.day,
        input.hour,
        input.minute,
        input.second,
        input.delta_ut1,
        input.timezone,
    );
    Ok(run_pipeline(input, jd))
}
