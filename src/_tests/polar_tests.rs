use crate::{evaluate, SolarEventResult, SpaFunction, SpaInput, SunHorizon, NO_RISE_SET};

fn arctic_noon(latitude: f64, month: i32, day: i32) -> SpaInput {
    SpaInput {
        year: 2024,
        month,
        day,
        hour: 12,
        timezone: 1.0,
        ..SpaInput::default()
    }
    .with_location(latitude, 20.0, 0.0)
    .with_time_corrections(0.0, 69.0)
    .with_function(SpaFunction::ZenithAzimuthRiseTransitSet)
}

fn assert_sentinels(input: &SpaInput, horizon: SunHorizon) {
    let (output, status) = evaluate(input);
    assert_eq!(status, 0, "polar days are not an input error");

    let rts = output.rise_transit_set.unwrap();
    assert_eq!(rts.horizon, horizon);
    for value in [rts.srha, rts.ssha, rts.sta, rts.suntransit, rts.sunrise, rts.sunset] {
        assert_eq!(value, NO_RISE_SET);
    }
    assert!(rts.eot.abs() < 20.0, "eot is still computed: {}", rts.eot);
}

#[test]
fn polar_night_in_the_north() {
    assert_sentinels(&arctic_noon(80.0, 12, 21), SunHorizon::AlwaysBelow);
    assert_sentinels(&arctic_noon(70.0, 12, 21), SunHorizon::AlwaysBelow);
    assert_sentinels(&arctic_noon(69.0, 12, 10), SunHorizon::AlwaysBelow);
}

#[test]
fn midnight_sun_in_the_north() {
    assert_sentinels(&arctic_noon(80.0, 6, 21), SunHorizon::AlwaysAbove);
    assert_sentinels(&arctic_noon(90.0, 6, 21), SunHorizon::AlwaysAbove);
}

#[test]
fn seasons_are_swapped_in_the_south() {
    assert_sentinels(&arctic_noon(-80.0, 6, 21), SunHorizon::AlwaysBelow);
    assert_sentinels(&arctic_noon(-80.0, 12, 21), SunHorizon::AlwaysAbove);
}

#[test]
fn events_report_all_day_and_all_night() {
    let rts = evaluate(&arctic_noon(80.0, 6, 21)).0.rise_transit_set.unwrap();
    assert_eq!(rts.sunrise_event(), SolarEventResult::AllDay);
    assert_eq!(rts.sunset_event().local_time(), None);

    let rts = evaluate(&arctic_noon(80.0, 12, 21)).0.rise_transit_set.unwrap();
    assert_eq!(rts.sunset_event(), SolarEventResult::AllNight);
    assert_eq!(rts.transit_event(), SolarEventResult::AllNight);
}

#[test]
fn position_is_still_computed_on_polar_days() {
    let (output, _) = evaluate(&arctic_noon(80.0, 12, 21));
    assert!(output.zenith() > 90.0, "sun below the horizon: {}", output.zenith());

    let (output, _) = evaluate(&arctic_noon(80.0, 6, 21));
    assert!(output.zenith() < 90.0, "sun above the horizon: {}", output.zenith());
}

#[test]
fn sun_still_rises_just_outside_the_polar_circle() {
    let rts = evaluate(&arctic_noon(65.0, 6, 21)).0.rise_transit_set.unwrap();
    assert_eq!(rts.horizon, SunHorizon::RisesAndSets);
    assert!((rts.sunrise - 0.684_081).abs() < 1e-4, "sunrise {}", rts.sunrise);
    assert!((rts.sunset - 22.716_951).abs() < 1e-4, "sunset {}", rts.sunset);
}

#[test]
fn undefined_hour_angle_falls_back_to_sentinels() {
    let mut input = arctic_noon(45.0, 3, 20);
    input.latitude = f64::NAN;

    let (output, status) = evaluate(&input);
    assert_eq!(status, 10);
    let rts = output.rise_transit_set.unwrap();
    assert_eq!(rts.horizon, SunHorizon::AlwaysBelow);
    assert_eq!(rts.sunrise, NO_RISE_SET);
    assert_eq!(rts.suntransit, NO_RISE_SET);
}
