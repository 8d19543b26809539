use std::string::String;

use super::nrel_reference_input;
use crate::{evaluate, SpaFunction, SpaInput, SpaOutput};

#[test]
fn observer_settings_load_from_json() {
    let json = r#"{
        "latitude": 39.742476,
        "longitude": -105.1786,
        "elevation": 1830.14,
        "pressure": 820.0,
        "temperature": 11.0,
        "function": "ZenithAzimuth"
    }"#;
    let input: SpaInput = serde_json::from_str(json).unwrap();

    assert_eq!(input.latitude, 39.742476);
    assert_eq!(input.function, SpaFunction::ZenithAzimuth);
    // Missing fields fall back to the defaults.
    assert_eq!(input.atmos_refract, SpaInput::default().atmos_refract);
    assert_eq!(input.year, 2000);
}

#[test]
fn output_survives_a_json_round_trip() {
    let (output, _) = evaluate(&nrel_reference_input());
    let json: String = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"rise_transit_set\""));
    assert!(json.contains("\"RisesAndSets\""));

    let restored: SpaOutput = serde_json::from_str(&json).unwrap();
    assert!((restored.zenith() - output.zenith()).abs() < 1e-9);
    assert_eq!(restored.rise_transit_set.map(|r| r.horizon), output.rise_transit_set.map(|r| r.horizon));
}
