use planetary::RocheFormula;

use crate::{GenerationConfig, GenerationError};

#[test]
fn test_defaults_enable_gases_and_moons() {
    let config = GenerationConfig::default();
    assert!(config.do_gases);
    assert!(config.do_moons);
    assert!(!config.random_tilt);
    assert_eq!(config.max_sequential_failures, 1000);
    assert_eq!(config.roche_formula, RocheFormula::Doubled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_split_into_stage_options() {
    let config = GenerationConfig::default().without_moons().with_random_tilt();

    let accretion = config.accretion();
    assert!(!accretion.capture_moons);
    assert_eq!(accretion.max_sequential_failures, 1000);

    let planet = config.planet_options();
    assert!(!planet.do_moons);
    assert!(planet.do_gases);
    assert!(planet.random_tilt);

    let planet = GenerationConfig::default().without_gases().planet_options();
    assert!(!planet.do_gases);
    assert!(planet.do_moons);
}

#[test]
fn test_zero_failure_budget_is_rejected() {
    let config = GenerationConfig {
        max_sequential_failures: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(GenerationError::InvalidConfig(_))
    ));
}

#[test]
fn test_moon_eccentricity_must_be_bound() {
    for e in [-0.1, 1.0, f64::NAN] {
        let config = GenerationConfig {
            moon_eccentricity_max: e,
            ..Default::default()
        };
        assert!(config.validate().is_err(), "accepted {e}");
    }
}

#[test]
fn test_partial_json_fills_defaults() {
    let config: GenerationConfig =
        serde_json::from_str(r#"{"doMoons": false, "rocheFormula": "classical"}"#).unwrap();

    assert!(!config.do_moons);
    assert!(config.do_gases);
    assert_eq!(config.roche_formula, RocheFormula::Classical);
    assert_eq!(config.max_sequential_failures, 1000);
}
