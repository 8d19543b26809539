//! Nutation in longitude and obliquity, and the obliquity of the ecliptic.

#[allow(unused_imports)]
use core_maths::CoreFloat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::{eval_cubic, polynomial};
use crate::terms::{PE_TERMS, Y_TERMS};

/// Units of the nutation coefficients: 0.0001 arcseconds per degree.
const NUTATION_COEFFICIENT_SCALE: f64 = 36_000_000.0;

/// Laskar's polynomial for the mean obliquity, in arcseconds, ascending in
/// `U = jme / 10`.
const MEAN_OBLIQUITY_COEFFICIENTS: [f64; 11] = [
    84_381.448, -4_680.93, -1.55, 1_999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// The five fundamental arguments of the lunisolar nutation series, in degrees.
///
/// None of them are range-limited; the series only uses them inside sines and
/// cosines.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FundamentalArguments {
    /// Mean elongation of the Moon from the Sun (X0).
    pub moon_elongation: f64,
    /// Mean anomaly of the Sun (X1).
    pub sun_anomaly: f64,
    /// Mean anomaly of the Moon (X2).
    pub moon_anomaly: f64,
    /// Moon's argument of latitude (X3).
    pub moon_latitude: f64,
    /// Longitude of the ascending node of the Moon's mean orbit (X4).
    pub moon_ascending_node: f64,
}

impl FundamentalArguments {
    pub fn at(julian_ephemeris_century: f64) -> Self {
        let jce = julian_ephemeris_century;
        Self {
            moon_elongation: eval_cubic(1.0 / 189_474.0, -0.001_914_2, 445_267.111_48, 297.850_36, jce),
            sun_anomaly: eval_cubic(-1.0 / 300_000.0, -0.000_160_3, 35_999.050_34, 357.527_72, jce),
            moon_anomaly: eval_cubic(1.0 / 56_250.0, 0.008_697_2, 477_198.867_398, 134.962_98, jce),
            moon_latitude: eval_cubic(1.0 / 327_270.0, -0.003_682_5, 483_202.017_538, 93.271_91, jce),
            moon_ascending_node: eval_cubic(1.0 / 450_000.0, 0.002_070_8, -1_934.136_261, 125.044_52, jce),
        }
    }

    fn as_array(&self) -> [f64; 5] {
        [
            self.moon_elongation,
            self.sun_anomaly,
            self.moon_anomaly,
            self.moon_latitude,
            self.moon_ascending_node,
        ]
    }
}

/// Nutation at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nutation {
    pub arguments: FundamentalArguments,
    /// Nutation in longitude `Δψ`, degrees.
    pub longitude: f64,
    /// Nutation in obliquity `Δε`, degrees.
    pub obliquity: f64,
}

impl Nutation {
    /// Sums the 63-term series at the given Julian ephemeris century.
    pub fn at(julian_ephemeris_century: f64) -> Self {
        let arguments = FundamentalArguments::at(julian_ephemeris_century);
        let x = arguments.as_array();

        let mut sum_psi = 0.0;
        let mut sum_epsilon = 0.0;
        for (multipliers, &[a, b, c, d]) in Y_TERMS.iter().zip(PE_TERMS.iter()) {
            let argument: f64 = multipliers
                .iter()
                .zip(x.iter())
                .map(|(&multiplier, &value)| value * f64::from(multiplier))
                .sum();
            let argument = argument.to_radians();

            sum_psi += (a + julian_ephemeris_century * b) * argument.sin();
            sum_epsilon += (c + julian_ephemeris_century * d) * argument.cos();
        }

        Self {
            arguments,
            longitude: sum_psi / NUTATION_COEFFICIENT_SCALE,
            obliquity: sum_epsilon / NUTATION_COEFFICIENT_SCALE,
        }
    }
}

/// Obliquity of the ecliptic.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obliquity {
    /// Mean obliquity `ε0` in **arcseconds**.
    pub mean: f64,
    /// True obliquity `ε = ε0/3600 + Δε` in degrees.
    pub true_obliquity: f64,
}

impl Obliquity {
    pub fn at(julian_ephemeris_millennium: f64, nutation_obliquity: f64) -> Self {
        let mean = mean_obliquity(julian_ephemeris_millennium);
        Self {
            mean,
            true_obliquity: true_obliquity(nutation_obliquity, mean),
        }
    }
}

/// Mean obliquity of the ecliptic in arcseconds.
pub(crate) fn mean_obliquity(julian_ephemeris_millennium: f64) -> f64 {
    polynomial(&MEAN_OBLIQUITY_COEFFICIENTS, julian_ephemeris_millennium / 10.0)
}

/// True obliquity in degrees from `Δε` (degrees) and `ε0` (arcseconds).
pub(crate) fn true_obliquity(nutation_obliquity: f64, mean_obliquity: f64) -> f64 {
    nutation_obliquity + mean_obliquity / 3600.0
}
