use approx::assert_relative_eq;
use units::{Length, Mass, Temperature, Time};

use crate::diagnostic::Diagnostic;
use crate::planet::{Rotation, SurfaceConditions};

#[test]
fn synchronous_rotation_is_locked() {
    let year = Time::from_days(88.0);
    let rotation = Rotation {
        day: year,
        resonant: false,
    };
    assert!(rotation.is_locked_to(year));
}

#[test]
fn resonance_counts_as_locked() {
    let rotation = Rotation {
        day: Time::from_days(58.6),
        resonant: true,
    };
    assert!(rotation.is_locked_to(Time::from_days(88.0)));
}

#[test]
fn locking_compares_whole_hours() {
    let year = Time::from_hours(100.4);
    let close = Rotation {
        day: Time::from_hours(100.9),
        resonant: false,
    };
    let apart = Rotation {
        day: Time::from_hours(101.1),
        resonant: false,
    };
    assert!(close.is_locked_to(year));
    assert!(!apart.is_locked_to(year));
}

#[test]
fn gas_giant_surface_placeholders() {
    let t = Temperature::from_kelvin(120.0);
    let surface = SurfaceConditions::gas_giant(0.5, t, Temperature::from_kelvin(110.0));

    assert!(!surface.pressure.is_finite());
    assert!(!surface.boiling_point.is_finite());
    assert!(!surface.greenhouse_effect);
    assert_eq!(surface.hydrosphere, 1.0);
    assert_eq!(surface.cloud_cover, 1.0);
    assert_eq!(surface.ice_cover, 0.0);
    assert_eq!(surface.estimated_temp, t);
}

#[test]
fn gas_giant_surface_survives_json() {
    let surface = SurfaceConditions::gas_giant(
        0.5,
        Temperature::from_kelvin(120.0),
        Temperature::from_kelvin(120.0),
    );

    let json = serde_json::to_string(&surface).unwrap();
    assert!(!json.contains("null"));

    let back: SurfaceConditions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, surface);
}

#[test]
fn diagnostics_describe_themselves() {
    let unstable = Diagnostic::UnstableMoonOrbit {
        roche_limit: Length::from_km(10_000.0),
        hill_sphere: Length::from_km(20_000.0),
    };
    let text = unstable.to_string();
    assert!(text.contains("15000"), "{text}");
    assert!(text.contains("10000"), "{text}");

    let json = serde_json::to_value(&unstable).unwrap();
    assert_eq!(json["kind"], "unstableMoonOrbit");
}

#[test]
fn mass_display_picks_a_readable_unit() {
    assert!(Mass::from_earth_masses(1.0).to_string().ends_with("M⊕"));
    assert!(Mass::from_jupiter_masses(1.0).to_string().ends_with("M♃"));
    assert_relative_eq!(Mass::from_earth_masses(1.0).to_earth_masses(), 1.0, max_relative = 1e-12);
}
