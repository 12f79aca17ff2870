//! Tests for the surface climate formulas

use approx::assert_relative_eq;
use units::{Acceleration, Length, Mass, Pressure, Temperature, Velocity};

use crate::climate::{
    boiling_point, cloud_fraction, effective_temperature, estimated_temperature,
    greenhouse_rise, greenhouse_triggered, hydro_fraction, ice_fraction, opacity, planet_albedo,
    surface_pressure, volatile_inventory,
};
use crate::physics::OrbitalZone;

fn one_au() -> Length {
    Length::from_au(1.0)
}

fn earth_radius() -> Length {
    Length::from_earth_radii(1.0)
}

// =============================================================================
// Temperatures
// =============================================================================

#[test]
fn earth_effective_and_estimated_temperatures() {
    assert_relative_eq!(
        effective_temperature(one_au(), one_au(), 0.3).to_kelvin(),
        250.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        estimated_temperature(one_au(), one_au(), 0.3).to_kelvin(),
        287.15,
        max_relative = 1e-12
    );
}

#[test]
fn brighter_surfaces_are_cooler() {
    let dark = effective_temperature(one_au(), one_au(), 0.1);
    let bright = effective_temperature(one_au(), one_au(), 0.6);
    assert!(dark > bright);
}

#[test]
fn greenhouse_trigger_inside_point_nine_au() {
    assert!(greenhouse_triggered(one_au(), Length::from_au(0.72)));
    assert!(!greenhouse_triggered(one_au(), one_au()));
}

// =============================================================================
// Volatiles and pressure
// =============================================================================

#[test]
fn earth_volatile_inventory() {
    let inventory = volatile_inventory(
        Mass::from_earth_masses(1.0),
        Velocity::from_km_per_sec(11.2),
        Velocity::from_meters_per_sec(1065.0),
        1.0,
        OrbitalZone::Inner,
        false,
        false,
    );
    assert_relative_eq!(inventory, 1000.0, max_relative = 1e-9);
}

#[test]
fn greenhouse_keeps_the_whole_inventory() {
    let inventory = volatile_inventory(
        Mass::from_earth_masses(1.0),
        Velocity::from_km_per_sec(11.2),
        Velocity::from_meters_per_sec(1065.0),
        1.0,
        OrbitalZone::Inner,
        true,
        false,
    );
    assert_relative_eq!(inventory, 140_000.0, max_relative = 1e-9);
}

#[test]
fn no_inventory_without_nitrogen() {
    let inventory = volatile_inventory(
        Mass::from_earth_masses(0.01),
        Velocity::from_km_per_sec(2.4),
        Velocity::from_meters_per_sec(1065.0),
        1.0,
        OrbitalZone::Inner,
        true,
        true,
    );
    assert_eq!(inventory, 0.0);
}

#[test]
fn earth_surface_pressure() {
    let pressure = surface_pressure(1000.0, earth_radius(), Acceleration::from_earth_gravities(1.0));
    assert_relative_eq!(pressure.to_atm(), 1.0, max_relative = 1e-6);
}

#[test]
fn water_boils_near_373_k_at_one_atmosphere() {
    let boil = boiling_point(Pressure::from_atm(1.0));
    assert_relative_eq!(boil.to_kelvin(), 373.3, epsilon = 0.1);
}

#[test]
fn boiling_point_in_a_vacuum_is_zero() {
    assert_eq!(boiling_point(Pressure::zero()), Temperature::zero());
}

#[test]
fn boiling_point_rises_with_pressure() {
    let low = boiling_point(Pressure::from_atm(0.1));
    let high = boiling_point(Pressure::from_atm(90.0));
    assert!(low < high);
}

// =============================================================================
// Water, clouds and ice
// =============================================================================

#[test]
fn earth_oceans_cover_71_percent() {
    assert_relative_eq!(hydro_fraction(1000.0, earth_radius()), 0.71, max_relative = 1e-9);
}

#[test]
fn hydrosphere_is_capped_at_one() {
    assert_eq!(hydro_fraction(140_000.0, earth_radius()), 1.0);
}

#[test]
fn earth_is_about_half_cloudy() {
    let clouds = cloud_fraction(Temperature::from_kelvin(287.15), 6.3, 0.71);
    assert_relative_eq!(clouds, 0.5, epsilon = 0.01);
}

#[test]
fn no_clouds_without_water_vapour() {
    assert_eq!(cloud_fraction(Temperature::from_kelvin(300.0), 20.0, 0.9), 0.0);
}

#[test]
fn ice_fraction_bounds() {
    // Earth: a little ice
    let earth = ice_fraction(0.71, Temperature::from_kelvin(287.15));
    assert!(earth > 0.0 && earth < 0.05);

    // Cold world: capped at 1.5 × the water there is
    assert_relative_eq!(ice_fraction(0.1, Temperature::from_kelvin(100.0)), 0.15, max_relative = 1e-12);

    // Hot world: none
    assert_eq!(ice_fraction(0.7, Temperature::from_kelvin(400.0)), 0.0);
}

// =============================================================================
// Albedo and greenhouse
// =============================================================================

#[test]
fn airless_bare_rock_albedo() {
    assert_relative_eq!(planet_albedo(0.0, 0.0, 0.0, Pressure::zero()), 0.07, max_relative = 1e-12);
}

#[test]
fn full_cloud_cover_reflects_like_cloud() {
    assert_relative_eq!(planet_albedo(0.5, 1.0, 0.0, Pressure::from_atm(1.0)), 0.52, max_relative = 1e-12);
}

#[test]
fn earthlike_albedo() {
    let albedo = planet_albedo(0.71, 0.5, 0.02, Pressure::from_atm(1.0));
    assert_relative_eq!(albedo, 0.3, epsilon = 0.02);
}

#[test]
fn opacity_by_weight_and_pressure() {
    assert_relative_eq!(opacity(6.3, Pressure::from_atm(1.0)), 3.0);
    assert_relative_eq!(opacity(25.0, Pressure::from_atm(1.0)), 1.0);
    assert_relative_eq!(opacity(25.0, Pressure::from_atm(90.0)), 8.333);
    assert_eq!(opacity(150.0, Pressure::from_atm(1.0)), 0.0);
}

#[test]
fn no_greenhouse_rise_without_air() {
    let rise = greenhouse_rise(3.0, Temperature::from_kelvin(250.0), Pressure::zero());
    assert_eq!(rise, Temperature::zero());
}

#[test]
fn thicker_air_traps_more_heat() {
    let thin = greenhouse_rise(1.0, Temperature::from_kelvin(250.0), Pressure::from_atm(0.1));
    let thick = greenhouse_rise(1.0, Temperature::from_kelvin(250.0), Pressure::from_atm(10.0));
    assert!(thin < thick);
}
