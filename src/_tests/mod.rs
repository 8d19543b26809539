#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]
mod polar_tests;
#[cfg(feature = "serde")]
mod serde_tests;

use chrono::Timelike;
#[allow(unused_imports)]
use core_maths::CoreFloat;
use proptest::prelude::*;
use serde::Deserialize;
use std::format;

use crate::{calculate, evaluate, geocentric_sun, SpaFunction, SpaInput, SunHorizon};

/// Published NREL example: 2003-10-17 12:30:30 UTC-7 at Golden, Colorado.
pub(super) fn nrel_reference_input() -> SpaInput {
    SpaInput {
        year: 2003,
        month: 10,
        day: 17,
        hour: 12,
        minute: 30,
        second: 30.0,
        timezone: -7.0,
        ..SpaInput::default()
    }
    .with_location(39.742476, -105.1786, 1830.14)
    .with_atmosphere(820.0, 11.0, 0.5667)
    .with_surface(30.0, -10.0)
    .with_time_corrections(0.0, 67.0)
    .with_function(SpaFunction::All)
}

fn assert_close(name: &str, actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{name}: expected {expected}, got {actual} (diff {})",
        (actual - expected).abs()
    );
}

/// Smallest difference between two angles in degrees.
fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

#[test]
fn nrel_reference_intermediate_values() {
    let (output, status) = evaluate(&nrel_reference_input());
    assert_eq!(status, 0);

    let sun = &output.sun;
    assert_close("jd", sun.time.jd, 2_452_930.312_847, 1e-6);
    assert_close("L", sun.heliocentric.longitude, 24.018_261_7, 1e-6);
    assert_close("B", sun.heliocentric.latitude, -0.000_101_1, 1e-7);
    assert_close("R", sun.heliocentric.radius, 0.996_542, 1e-6);
    assert_close("theta", sun.geocentric.longitude, 204.018_261_7, 1e-6);
    assert_close("beta", sun.geocentric.latitude, 0.000_101_1, 1e-7);
    assert_close("delta psi", sun.nutation.longitude, -0.003_998_40, 1e-8);
    assert_close("delta epsilon", sun.nutation.obliquity, 0.001_666_57, 1e-8);
    assert_close("epsilon", sun.obliquity.true_obliquity, 23.440_465, 1e-6);
    assert_close("lambda", sun.apparent_longitude, 204.008_552, 1e-6);
    assert_close("nu", sun.sidereal_time, 318.511_910, 1e-6);
    assert_close("alpha", sun.right_ascension, 202.227_408, 1e-6);
    assert_close("delta", sun.declination, -9.314_340, 1e-6);

    let topo = &output.topocentric;
    assert_close("H", topo.observer_hour_angle, 11.105_902, 1e-6);
    assert_close("delta prime", topo.declination, -9.316_179, 1e-6);
    assert_close("alpha prime", topo.right_ascension, 202.227_039, 1e-6);
    assert_close("H prime", topo.hour_angle, 11.106_271, 1e-6);
    assert_close("e0", topo.elevation_uncorrected, 39.872_046, 1e-6);
    assert_close("delta e", topo.refraction, 0.016_332, 1e-6);
    assert_close("e", topo.elevation, 39.888_378, 1e-6);
}

#[test]
fn nrel_reference_outputs() {
    let (output, status) = evaluate(&nrel_reference_input());
    assert_eq!(status, 0);

    assert_close("zenith", output.zenith(), 50.111_62, 1e-4);
    assert_close("azimuth", output.azimuth(), 194.340_24, 1e-4);
    assert_close("azimuth astro", output.azimuth_astronomical(), 14.340_24, 1e-4);
    assert_close("incidence", output.incidence.unwrap(), 25.187_00, 1e-4);

    let rts = output.rise_transit_set.unwrap();
    assert_eq!(rts.horizon, SunHorizon::RisesAndSets);
    assert_close("eot", rts.eot, 14.641_503, 1e-4);
    assert_close("srha", rts.srha, -83.496_338, 1e-5);
    assert_close("ssha", rts.ssha, 83.524_274, 1e-5);
    assert_close("sta", rts.sta, 40.954_407, 1e-5);
    // Times within about a second of 11:46:04.97, 06:12:43 and 17:20:19
    assert_close("suntransit", rts.suntransit, 11.768_045, 1e-5);
    assert_close("sunrise", rts.sunrise, 6.212_067, 1e-5);
    assert_close("sunset", rts.sunset, 17.338_667, 1e-5);

    let sunrise = rts.sunrise_event().local_time().unwrap();
    assert_eq!((sunrise.hour(), sunrise.minute(), sunrise.second()), (6, 12, 43));
}

#[test]
fn optional_outputs_follow_the_function_selector() {
    let input = nrel_reference_input();

    let (output, _) = evaluate(&input.with_function(SpaFunction::ZenithAzimuth));
    assert!(output.incidence.is_none());
    assert!(output.rise_transit_set.is_none());

    let (output, _) = evaluate(&input.with_function(SpaFunction::ZenithAzimuthIncidence));
    assert!(output.incidence.is_some());
    assert!(output.rise_transit_set.is_none());

    let (output, _) = evaluate(&input.with_function(SpaFunction::ZenithAzimuthRiseTransitSet));
    assert!(output.incidence.is_none());
    assert!(output.rise_transit_set.is_some());

    // The core position does not depend on the selector.
    let (all, _) = evaluate(&input);
    assert_eq!(output.topocentric, all.topocentric);
}

#[test]
fn invalid_input_still_runs_from_julian_day_zero() {
    let mut input = nrel_reference_input();
    input.year = 6001;

    let (output, status) = evaluate(&input);
    assert_eq!(status, 1);
    assert_eq!(output.sun.time.jd, 0.0);
    assert_eq!(output.sun, geocentric_sun(0.0, input.delta_t));
    assert!(output.zenith().is_finite());
}

#[test]
fn from_datetime_copies_calendar_and_offset() {
    use chrono::{FixedOffset, TimeZone};

    let offset = FixedOffset::west_opt(7 * 3600).unwrap();
    let datetime = offset.with_ymd_and_hms(2003, 10, 17, 12, 30, 30).unwrap();
    let input = SpaInput::from_datetime(&datetime)
        .with_location(39.742476, -105.1786, 1830.14)
        .with_atmosphere(820.0, 11.0, 0.5667)
        .with_surface(30.0, -10.0)
        .with_time_corrections(0.0, 67.0);

    assert_eq!(input, nrel_reference_input());
}

#[test]
fn from_datetime_keeps_fractional_seconds() {
    use chrono::{TimeZone, Utc};

    let datetime = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
    let input = SpaInput::from_datetime(&datetime);
    assert_eq!(input.timezone, 0.0);
    assert_eq!(input.second, 20.25);
}

#[derive(Debug, Deserialize)]
struct ReferencePositionRow {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
    timezone: f64,
    delta_t: f64,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    pressure: f64,
    temperature: f64,
    zenith: f64,
    azimuth: f64,
}

/// Positions from published SPA reference data, within 0.001°.
#[test]
fn reference_positions_dataset() {
    let csv_path = concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/reference_positions.csv");
    let mut rdr = csv::Reader::from_path(csv_path).expect("Failed to open CSV file");

    let mut rows = 0;
    for (idx, result) in rdr.deserialize().enumerate() {
        let row: ReferencePositionRow = result.expect("Failed to deserialize CSV record");
        let input = SpaInput {
            year: row.year,
            month: row.month,
            day: row.day,
            hour: row.hour,
            minute: row.minute,
            second: row.second,
            timezone: row.timezone,
            ..SpaInput::default()
        }
        .with_location(row.latitude, row.longitude, row.elevation)
        .with_atmosphere(row.pressure, row.temperature, 0.5667)
        .with_time_corrections(0.0, row.delta_t)
        .with_function(SpaFunction::ZenithAzimuth);

        let output = calculate(&input).unwrap_or_else(|e| panic!("Row {}: {e}", idx + 2));
        assert!(
            (output.zenith() - row.zenith).abs() < 0.001,
            "Row {}: zenith expected {}, got {}",
            idx + 2,
            row.zenith,
            output.zenith()
        );
        assert!(
            angular_difference(output.azimuth(), row.azimuth) < 0.001,
            "Row {}: azimuth expected {}, got {}",
            idx + 2,
            row.azimuth,
            output.azimuth()
        );
        rows += 1;
    }
    assert!(rows > 0, "no rows in {csv_path}");
}

fn any_valid_input() -> impl Strategy<Value = SpaInput> {
    (
        (-2000i32..=6000, 1i32..=12, 1i32..=28, 0i32..=23, 0i32..=59, 0.0..60.0f64),
        (-180.0..=180.0f64, -89.9..=89.9f64, -400.0..=5000.0f64),
        (-0.99..=0.99f64, -8000.0..=8000.0f64, -12.0..=14.0f64),
        (800.0..=1100.0f64, -40.0..=50.0f64, 0.5..=0.6f64),
        (-90.0..=90.0f64, -180.0..=180.0f64),
    )
        .prop_map(
            |(
                (year, month, day, hour, minute, second),
                (longitude, latitude, elevation),
                (delta_ut1, delta_t, timezone),
                (pressure, temperature, atmos_refract),
                (slope, azm_rotation),
            )| {
                SpaInput {
                    year,
                    month,
                    day,
                    hour,
                    minute,
                    second,
                    timezone,
                    ..SpaInput::default()
                }
                .with_location(latitude, longitude, elevation)
                .with_atmosphere(pressure, temperature, atmos_refract)
                .with_surface(slope, azm_rotation)
                .with_time_corrections(delta_ut1, delta_t)
            },
        )
}

proptest! {
    #[test]
    fn angles_stay_in_range(input in any_valid_input()) {
        let (output, status) = evaluate(&input);
        prop_assert_eq!(status, 0);

        prop_assert!((0.0..360.0).contains(&output.azimuth()), "azimuth {}", output.azimuth());
        prop_assert!(
            (0.0..360.0).contains(&output.azimuth_astronomical()),
            "astronomical azimuth {}",
            output.azimuth_astronomical()
        );
        prop_assert!((0.0..=180.0).contains(&output.zenith()), "zenith {}", output.zenith());
        prop_assert!((0.0..360.0).contains(&output.sun.right_ascension));
        prop_assert!((0.0..360.0).contains(&output.sun.heliocentric.longitude));

        let incidence = output.incidence.unwrap();
        prop_assert!((0.0..=180.0).contains(&incidence), "incidence {}", incidence);
    }

    #[test]
    fn rise_transit_set_stays_in_range(input in any_valid_input()) {
        let rts = evaluate(&input).0.rise_transit_set.unwrap();
        prop_assert!((-20.0..=20.0).contains(&rts.eot), "eot {}", rts.eot);

        if rts.horizon == SunHorizon::RisesAndSets {
            for (name, hours) in [("sunrise", rts.sunrise), ("suntransit", rts.suntransit), ("sunset", rts.sunset)] {
                prop_assert!((0.0..24.0).contains(&hours), "{} {}", name, hours);
            }
            prop_assert!((-180.0..=180.0).contains(&rts.srha), "srha {}", rts.srha);
            prop_assert!((-180.0..=180.0).contains(&rts.ssha), "ssha {}", rts.ssha);
        }
    }

    #[test]
    fn elevation_changes_smoothly_minute_to_minute(input in any_valid_input()) {
        let later = SpaInput { minute: input.minute.max(1), ..input };
        let earlier = SpaInput { minute: later.minute - 1, ..later };

        let before = evaluate(&earlier).0.topocentric.elevation_uncorrected;
        let after = evaluate(&later).0.topocentric.elevation_uncorrected;
        // Earth turns about 0.25° per minute.
        prop_assert!((after - before).abs() <= 0.26, "{} -> {}", before, after);
    }

    #[test]
    fn evaluation_is_deterministic(input in any_valid_input(), other in any_valid_input()) {
        let first = evaluate(&input);
        let _ = evaluate(&other);
        let second = evaluate(&input);
        prop_assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    #[test]
    fn strict_and_lenient_modes_agree(input in any_valid_input()) {
        let (lenient, status) = evaluate(&input);
        prop_assert_eq!(status, 0);
        prop_assert_eq!(calculate(&input), Ok(lenient));
    }
}
