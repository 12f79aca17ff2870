//! Tests for the temperature range and the surface temperature iteration

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::Star;
use units::{Length, Mass, Pressure, Temperature, Time};

use protodisk::{Orbit, OrbitingBody, Protoplanet, StellarContext};

use crate::constants::MAX_TEMPERATURE_ITERATIONS;
use crate::generation::{PlanetOptions, generate_planet};
use crate::temperature::{ClimateInputs, initial_conditions, iterate_surface_temp, temperature_range};

fn sun() -> Star {
    Star::new(Mass::from_solar_masses(1.0), Time::from_gyr(4.6)).unwrap()
}

/// Climate inputs of a dust-only body, taken from the full pipeline
fn climate_inputs(earth_masses: f64, a_au: f64, eccentricity: f64) -> ClimateInputs {
    let star = sun();
    let body = OrbitingBody::new(
        Orbit::new(Length::from_au(a_au), eccentricity),
        Mass::from_earth_masses(earth_masses),
        Mass::zero(),
    );
    let protoplanet = Protoplanet::new(body, StellarContext::from(&star));
    let mut rng = ChaChaRng::seed_from_u64(0);
    let planet = generate_planet(&protoplanet, &star, &PlanetOptions::default(), false, &mut rng);

    ClimateInputs {
        orbit: planet.orbit,
        bulk: planet.bulk,
        rotation: planet.rotation,
        r_ecosphere: star.r_ecosphere(),
        stellar_mass_ratio: star.mass_ratio(),
    }
}

// =============================================================================
// Temperature range
// =============================================================================

#[test]
fn range_brackets_the_mean() {
    let t = Temperature::from_kelvin(288.0);
    let range = temperature_range(t, Pressure::from_atm(1.0), Time::from_hours(24.0), 23.4, 0.0167);

    assert!(range.low < t && t < range.high);
    assert!(range.min <= range.low);
    assert!(range.max >= range.high);
}

#[test]
fn range_stays_inside_the_soft_limits() {
    let t = Temperature::from_kelvin(250.0);
    let day = Time::from_hours(2000.0);
    let range = temperature_range(t, Pressure::zero(), day, 0.0, 0.3);

    let ceiling = 250.0 + 250.0_f64.sqrt() * 10.0;
    let floor = 250.0 / (2000.0_f64 + 24.0).sqrt();
    for value in [range.high, range.low, range.max, range.min] {
        let k = value.to_kelvin();
        assert!(k >= floor && k <= ceiling, "{k} outside [{floor}, {ceiling}]");
    }
}

#[test]
fn thick_air_evens_out_day_and_night() {
    let t = Temperature::from_kelvin(288.0);
    let day = Time::from_hours(100.0);
    let thin = temperature_range(t, Pressure::from_atm(0.01), day, 23.4, 0.0);
    let thick = temperature_range(t, Pressure::from_atm(90.0), day, 23.4, 0.0);

    let spread = |r: crate::temperature::TemperatureRange| (r.high - r.low).to_kelvin();
    assert!(spread(thick) < spread(thin));
}

// =============================================================================
// Iteration
// =============================================================================

#[test]
fn initial_conditions_of_earth() {
    let inputs = climate_inputs(1.0, 1.0, 0.0167);
    let start = initial_conditions(&inputs);

    assert!(!start.greenhouse_effect);
    assert_relative_eq!(start.volatile_gas_inventory, 1000.0, max_relative = 1e-6);
    assert_relative_eq!(start.pressure.to_atm(), 1.0, max_relative = 0.01);
    assert_relative_eq!(start.estimated_temp.to_kelvin(), 287.15, max_relative = 1e-9);
}

#[test]
fn earth_settles_near_its_real_climate() {
    let inputs = climate_inputs(1.0, 1.0, 0.0167);
    let solution = iterate_surface_temp(&inputs, initial_conditions(&inputs));
    let c = solution.conditions;

    assert!(solution.converged);
    assert_relative_eq!(c.surface_temp.to_kelvin(), 287.1, epsilon = 1.0);
    assert_relative_eq!(c.hydrosphere, 0.71, epsilon = 0.01);
    assert_relative_eq!(c.cloud_cover, 0.5, epsilon = 0.02);
    assert_relative_eq!(c.albedo, 0.3, epsilon = 0.01);
    assert!(c.greenhouse_rise.to_kelvin().abs() < 1.0);
}

#[test]
fn venus_runs_away() {
    let inputs = climate_inputs(0.815, 0.723, 0.007);
    let solution = iterate_surface_temp(&inputs, initial_conditions(&inputs));
    let c = solution.conditions;

    assert!(c.greenhouse_effect);
    assert!(c.surface_temp.to_kelvin() > 700.0);
    assert_eq!(c.hydrosphere, 0.0);
    assert_eq!(c.cloud_cover, 1.0);
    assert!(c.max_temp > c.boiling_point);
}

#[test]
fn iteration_converges_or_hits_the_round_limit() {
    for a_au in [0.3, 0.5, 0.7, 0.9, 1.0, 1.2, 1.5, 2.0, 3.0, 5.0] {
        for earth_masses in [0.1, 0.5, 1.0, 3.0] {
            let inputs = climate_inputs(earth_masses, a_au, 0.05);
            let solution = iterate_surface_temp(&inputs, initial_conditions(&inputs));

            assert!(solution.iterations <= MAX_TEMPERATURE_ITERATIONS);
            assert!(
                solution.converged || solution.iterations == MAX_TEMPERATURE_ITERATIONS,
                "{earth_masses} M⊕ at {a_au} AU"
            );
            assert!(solution.conditions.surface_temp.to_kelvin() > 0.0);
        }
    }
}
