#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Normalizes an angle in degrees to the range [0, 360).
///
/// Values outside this range wrap around, so `-90.0` becomes `270.0` and
/// `725.0` becomes `5.0`.
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    let turns = degrees / 360.0;
    let mut limited = 360.0 * (turns - turns.floor());
    if limited < 0.0 {
        limited += 360.0;
    }
    // tiny negative inputs round up to a full turn
    if limited >= 360.0 {
        limited = 0.0;
    }
    limited
}

/// Normalizes a signed angle in degrees to the range [-180, 180].
///
/// Used for hour angles, where a position west of the meridian is positive
/// and east of it negative.
pub(crate) fn normalize_degrees_180pm(degrees: f64) -> f64 {
    let turns = degrees / 360.0;
    let mut limited = 360.0 * (turns - turns.floor());
    if limited < -180.0 {
        limited += 360.0;
    } else if limited > 180.0 {
        limited -= 360.0;
    }
    limited
}

/// Normalizes an angle in degrees to the half circle [0, 180).
pub(crate) fn normalize_degrees_180(degrees: f64) -> f64 {
    let half_turns = degrees / 180.0;
    let mut limited = 180.0 * (half_turns - half_turns.floor());
    if limited < 0.0 {
        limited += 180.0;
    }
    limited
}

/// Keeps only the fractional part of `value`, mapping it into [0, 1).
///
/// Fractions of a day are wrapped with this, so `1.25` and `-0.75` both
/// become `0.25`.
pub(crate) fn normalize_unit_interval(value: f64) -> f64 {
    let mut limited = value - value.floor();
    if limited < 0.0 {
        limited += 1.0;
    }
    if limited >= 1.0 {
        limited = 0.0;
    }
    limited
}

/// Evaluate a cubic polynomial at `x`.
///
/// Interprets the arguments as coefficients of:
///
/// \(`a_3` x^3 + `a_2` x^2 + `a_1` x + `a_0`\)
///
/// using Horner's method.
pub(crate) fn eval_cubic(a3: f64, a2: f64, a1: f64, a0: f64, x: f64) -> f64 {
    ((a3 * x + a2) * x + a1) * x + a0
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub(crate) fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result * x + coeff;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_wrap_into_full_circle() {
        assert_eq!(normalize_degrees_360(0.0), 0.0);
        assert_eq!(normalize_degrees_360(360.0), 0.0);
        assert_eq!(normalize_degrees_360(-90.0), 270.0);
        assert!((normalize_degrees_360(725.0) - 5.0).abs() < 1e-12);
        assert!((normalize_degrees_360(-1e-9) - (360.0 - 1e-9)).abs() < 1e-6);
    }

    #[test]
    fn tiny_negatives_never_reach_the_upper_bound() {
        assert_eq!(normalize_degrees_360(-1e-15), 0.0);
        assert_eq!(normalize_unit_interval(-1e-17), 0.0);
        assert!((0.0..1.0).contains(&normalize_unit_interval(-1e-12)));
    }

    #[test]
    fn signed_degrees_stay_within_half_turns() {
        assert_eq!(normalize_degrees_180pm(90.0), 90.0);
        assert_eq!(normalize_degrees_180pm(270.0), -90.0);
        assert_eq!(normalize_degrees_180pm(-90.0), -90.0);
        assert_eq!(normalize_degrees_180pm(180.0), 180.0);
        assert!((normalize_degrees_180pm(-540.5) - 179.5).abs() < 1e-9);
    }

    #[test]
    fn half_circle_wraps_at_180() {
        assert_eq!(normalize_degrees_180(90.0), 90.0);
        assert_eq!(normalize_degrees_180(180.0), 0.0);
        assert!((normalize_degrees_180(-30.0) - 150.0).abs() < 1e-12);
    }

    #[test]
    fn unit_interval_keeps_fraction() {
        assert_eq!(normalize_unit_interval(1.25), 0.25);
        assert_eq!(normalize_unit_interval(-0.75), 0.25);
        assert_eq!(normalize_unit_interval(0.0), 0.0);
        assert_eq!(normalize_unit_interval(3.0), 0.0);
    }

    #[test]
    fn horner_forms_agree() {
        let x = 0.37;
        let cubic = eval_cubic(2.0, -1.0, 0.5, 3.0, x);
        let general = polynomial(&[3.0, 0.5, -1.0, 2.0], x);
        assert!((cubic - general).abs() < 1e-12);
        assert_eq!(polynomial(&[], x), 0.0);
        assert_eq!(polynomial(&[4.0], x), 4.0);
    }
}
