//! Equation of time and sunrise, sun transit and sunset.
//!
//! Right ascension and declination are sampled at 0h UT on the day before,
//! the day itself and the day after, then interpolated to each event.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use chrono::NaiveTime;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::{
    normalize_degrees_180, normalize_degrees_180pm, normalize_degrees_360, normalize_unit_interval, polynomial,
};
use crate::spa::{geocentric_sun, GeocentricSun};
use crate::time::{dayfrac_to_local_hr, equation_of_time, julian_day};
use crate::topocentric::{topocentric_elevation, SUN_RADIUS};
use crate::types::SpaInput;

/// Written to every hour-angle and time field when the Sun does not cross
/// the horizon on the requested day.
pub const NO_RISE_SET: f64 = -99_999.0;

/// Earth's rotation rate relative to the Sun, degrees per day fraction.
const SIDEREAL_RATE: f64 = 360.985_647;

/// Sun mean longitude polynomial in `jme`, ascending.
const SUN_MEAN_LONGITUDE_COEFFICIENTS: [f64; 6] = [
    280.466_456_7,
    360_007.698_277_9,
    0.030_320_28,
    1.0 / 49_931.0,
    -1.0 / 15_300.0,
    -1.0 / 2_000_000.0,
];

/// Whether the Sun crosses the horizon on a given day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SunHorizon {
    #[default]
    RisesAndSets,
    /// Midnight sun.
    AlwaysAbove,
    /// Polar night.
    AlwaysBelow,
}

/// Equation of time and the day's rise, transit and set.
///
/// Times are local hours in [0, 24). When the Sun never crosses the horizon,
/// every field except `eot` and `horizon` holds [`NO_RISE_SET`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiseTransitSet {
    /// Equation of time, minutes.
    pub eot: f64,
    /// Local hour angle at sunrise, degrees.
    pub srha: f64,
    /// Local hour angle at sunset, degrees.
    pub ssha: f64,
    /// Sun altitude at transit, degrees.
    pub sta: f64,
    /// Local sun transit time, hours.
    pub suntransit: f64,
    /// Local sunrise time, hours.
    pub sunrise: f64,
    /// Local sunset time, hours.
    pub sunset: f64,
    pub horizon: SunHorizon,
}

/// Result of a solar event calculation (sunrise, sunset or transit).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SolarEventResult {
    /// Event occurs at the given local hour of the day.
    Occurs(f64),
    /// Sun is always above the horizon (midnight sun).
    AllDay,
    /// Sun is always below the horizon (polar night).
    AllNight,
}

impl SolarEventResult {
    /// Converts an occurring event into a wall-clock time, rounded to the
    /// nearest nanosecond.
    ///
    /// # Returns
    ///
    /// - `Some(time)` if the event occurs within the day
    /// - `None` for `AllDay`, `AllNight`, or hours outside [0, 24)
    pub fn local_time(&self) -> Option<NaiveTime> {
        let SolarEventResult::Occurs(hours) = *self else {
            return None;
        };
        if !(0.0..24.0).contains(&hours) {
            return None;
        }

        let nanos = (hours * 3_600.0e9).round() as u64 % 86_400_000_000_000;
        let seconds = (nanos / 1_000_000_000) as u32;
        let subsec = (nanos % 1_000_000_000) as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, subsec)
    }
}

impl RiseTransitSet {
    fn no_crossing(eot: f64, horizon: SunHorizon) -> Self {
        Self {
            eot,
            srha: NO_RISE_SET,
            ssha: NO_RISE_SET,
            sta: NO_RISE_SET,
            suntransit: NO_RISE_SET,
            sunrise: NO_RISE_SET,
            sunset: NO_RISE_SET,
            horizon,
        }
    }

    fn event(&self, hours: f64) -> SolarEventResult {
        match self.horizon {
            SunHorizon::RisesAndSets => SolarEventResult::Occurs(hours),
            SunHorizon::AlwaysAbove => SolarEventResult::AllDay,
            SunHorizon::AlwaysBelow => SolarEventResult::AllNight,
        }
    }

    pub fn sunrise_event(&self) -> SolarEventResult {
        self.event(self.sunrise)
    }

    pub fn sunset_event(&self) -> SolarEventResult {
        self.event(self.sunset)
    }

    pub fn transit_event(&self) -> SolarEventResult {
        self.event(self.suntransit)
    }
}

/// Sun mean longitude `M` in degrees, [0, 360).
pub(crate) fn sun_mean_longitude(julian_millennium: f64) -> f64 {
    normalize_degrees_360(polynomial(&SUN_MEAN_LONGITUDE_COEFFICIENTS, julian_millennium))
}

/// Interpolates a value sampled at day -1, 0 and +1 to day fraction `n`.
///
/// Differences of 2 or more are reduced to their fractional part, which
/// absorbs the right ascension wrapping past 360°.
pub(crate) fn interpolate_day_samples(samples: &[f64; 3], n: f64) -> f64 {
    let mut a = samples[1] - samples[0];
    let mut b = samples[2] - samples[1];
    if a.abs() >= 2.0 {
        a = normalize_unit_interval(a);
    }
    if b.abs() >= 2.0 {
        b = normalize_unit_interval(b);
    }
    samples[1] + n * (a + b + (b - a) * n) / 2.0
}

/// Sun geometry at one of the three events.
#[derive(Copy, Clone)]
struct EventGeometry {
    day_fraction: f64,
    hour_angle: f64,
    declination: f64,
    altitude: f64,
}

impl EventGeometry {
    /// Corrects a rise or set day fraction so the altitude meets `h0_prime`.
    fn horizon_crossing(&self, latitude: f64, h0_prime: f64) -> f64 {
        self.day_fraction
            + (self.altitude - h0_prime)
                / (360.0
                    * self.declination.to_radians().cos()
                    * latitude.to_radians().cos()
                    * self.hour_angle.to_radians().sin())
    }
}

/// Computes the equation of time and the day's rise, transit and set for
/// the observer and date in `input`.
///
/// `sun` is the apparent Sun at the requested instant, used for the
/// equation of time.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(crate) fn rise_transit_set(input: &SpaInput, sun: &GeocentricSun) -> RiseTransitSet {
    let mean_longitude = sun_mean_longitude(sun.time.jme);
    let eot = equation_of_time(
        mean_longitude,
        sun.right_ascension,
        sun.nutation.longitude,
        sun.obliquity.true_obliquity,
    );

    let h0_prime = -(SUN_RADIUS + input.atmos_refract);

    let midnight = julian_day(input.year, input.month, input.day, 0, 0, 0.0, 0.0, 0.0);
    let sidereal_time = geocentric_sun(midnight, input.delta_t).sidereal_time;

    let mut right_ascensions = [0.0; 3];
    let mut declinations = [0.0; 3];
    for (i, offset) in [-1.0, 0.0, 1.0].into_iter().enumerate() {
        let sample = geocentric_sun(midnight + offset, 0.0);
        right_ascensions[i] = sample.right_ascension;
        declinations[i] = sample.declination;
    }

    let transit_approx = (right_ascensions[1] - input.longitude - sidereal_time) / 360.0;

    let latitude = input.latitude.to_radians();
    let declination = declinations[1].to_radians();
    let hour_angle_argument = (h0_prime.to_radians().sin() - latitude.sin() * declination.sin())
        / (latitude.cos() * declination.cos());

    if !(hour_angle_argument.abs() <= 1.0) {
        let horizon = if hour_angle_argument < -1.0 {
            SunHorizon::AlwaysAbove
        } else {
            SunHorizon::AlwaysBelow
        };
        debug!(
            "no sunrise or sunset on {:04}-{:02}-{:02} at latitude {}: {:?}",
            input.year, input.month, input.day, input.latitude, horizon
        );
        return RiseTransitSet::no_crossing(eot, horizon);
    }

    let h0 = normalize_degrees_180(hour_angle_argument.acos().to_degrees());

    // transit, rise, set
    let [transit, rise, set] = [
        normalize_unit_interval(transit_approx),
        normalize_unit_interval(transit_approx - h0 / 360.0),
        normalize_unit_interval(transit_approx + h0 / 360.0),
    ]
    .map(|day_fraction| {
        let event_sidereal_time = sidereal_time + SIDEREAL_RATE * day_fraction;
        let n = day_fraction + input.delta_t / 86_400.0;

        let right_ascension = interpolate_day_samples(&right_ascensions, n);
        let declination = interpolate_day_samples(&declinations, n);
        let hour_angle = normalize_degrees_180pm(event_sidereal_time + input.longitude - right_ascension);

        EventGeometry {
            day_fraction,
            hour_angle,
            declination,
            altitude: topocentric_elevation(input.latitude, declination, hour_angle),
        }
    });

    RiseTransitSet {
        eot,
        srha: rise.hour_angle,
        ssha: set.hour_angle,
        sta: transit.altitude,
        suntransit: dayfrac_to_local_hr(transit.day_fraction - transit.hour_angle / 360.0, input.timezone),
        sunrise: dayfrac_to_local_hr(rise.horizon_crossing(input.latitude, h0_prime), input.timezone),
        sunset: dayfrac_to_local_hr(set.horizon_crossing(input.latitude, h0_prime), input.timezone),
        horizon: SunHorizon::RisesAndSets,
    }
}
