#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Angle of incidence of direct sunlight on a tilted surface, in degrees.
///
/// # Arguments
///
/// * `zenith` - Topocentric zenith angle of the Sun (degrees).
/// * `azimuth_astronomical` - Sun azimuth, westward from south (degrees).
/// * `slope` - Surface tilt from the horizontal (degrees).
/// * `azm_rotation` - Surface azimuth rotation, westward from south (degrees).
///
/// # Returns
///
/// The angle between the surface normal and the Sun direction, in [0, 180].
pub(crate) fn surface_incidence_angle(zenith: f64, azimuth_astronomical: f64, slope: f64, azm_rotation: f64) -> f64 {
    let zenith = zenith.to_radians();
    let slope = slope.to_radians();
    let relative_azimuth = (azimuth_astronomical - azm_rotation).to_radians();

    (zenith.cos() * slope.cos() + slope.sin() * zenith.sin() * relative_azimuth.cos())
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}
