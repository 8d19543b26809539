#![allow(missing_docs)]
use solar_spa::{evaluate, SolarEventResult, SpaFunction, SpaInput};

fn describe(event: SolarEventResult) -> String {
    match event {
        SolarEventResult::Occurs(hours) => match event.local_time() {
            Some(time) => format!("{time} ({hours:.6} h)"),
            None => format!("{hours:.6} h"),
        },
        SolarEventResult::AllDay => "sun never sets (midnight sun)".to_string(),
        SolarEventResult::AllNight => "sun never rises (polar night)".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=trace shows the per-evaluation trace.
    env_logger::init();

    // Golden, Colorado on 2003-10-17 at 12:30:30 MST, the published example
    let input = SpaInput {
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
    .with_function(SpaFunction::All);

    let (output, status) = evaluate(&input);
    if status != 0 {
        return Err(format!("SPA error code {status}").into());
    }

    let sun = &output.sun;
    let topo = &output.topocentric;
    println!("Solar Position Algorithm - NREL reference example");
    println!("{:=<60}", "");
    println!("Julian Day:                  {:.6}", sun.time.jd);
    println!("L (heliocentric longitude):  {:.6}°", sun.heliocentric.longitude);
    println!("B (heliocentric latitude):   {:.6}°", sun.heliocentric.latitude);
    println!("R (radius vector):           {:.6} AU", sun.heliocentric.radius);
    println!("Δψ (nutation in longitude):  {:.6}°", sun.nutation.longitude);
    println!("Δε (nutation in obliquity):  {:.6}°", sun.nutation.obliquity);
    println!("ε (true obliquity):          {:.6}°", sun.obliquity.true_obliquity);
    println!("α (right ascension):         {:.6}°", sun.right_ascension);
    println!("δ (declination):             {:.6}°", sun.declination);
    println!("H′ (topocentric hour angle): {:.6}°", topo.hour_angle);
    println!("δ′ (topocentric declination): {:.6}°", topo.declination);
    println!("{:-<60}", "");
    println!("Zenith:    {:.6}°", output.zenith());
    println!("Azimuth:   {:.6}°", output.azimuth());
    if let Some(incidence) = output.incidence {
        println!("Incidence: {incidence:.6}°");
    }

    if let Some(rts) = output.rise_transit_set {
        println!("{:-<60}", "");
        println!("Equation of time: {:.6} min", rts.eot);
        println!("Sunrise:          {}", describe(rts.sunrise_event()));
        println!("Sun transit:      {}", describe(rts.transit_event()));
        println!("Sunset:           {}", describe(rts.sunset_event()));
    }

    // Svalbard at the winter solstice
    let polar = SpaInput {
        month: 12,
        day: 21,
        timezone: 1.0,
        ..input
    }
    .with_location(78.22, 15.65, 0.0);
    let (output, _) = evaluate(&polar);
    if let Some(rts) = output.rise_transit_set {
        println!("{:=<60}", "");
        println!("Longyearbyen, 2003-12-21: {}", describe(rts.sunrise_event()));
    }

    Ok(())
}
