use approx::assert_relative_eq;
use units::{Length, Mass};

use super::{Orbit, OrbitingBody, Planetesimal, Planetoid, Protomoon, StellarContext};

fn sun() -> StellarContext {
    StellarContext {
        mass: Mass::from_solar_masses(1.0),
        luminosity_ratio: 1.0,
    }
}

fn planetesimal(a: f64, earth_masses: f64) -> Planetesimal {
    Planetesimal::new(
        OrbitingBody::new(
            Orbit::new(Length::from_au(a), 0.05),
            Mass::from_earth_masses(earth_masses),
            Mass::from_earth_masses(earth_masses / 10.0),
        ),
        sun(),
    )
}

#[test]
fn promotion_keeps_orbit_and_mass() {
    let seed = planetesimal(2.0, 0.5);
    let mass = seed.mass();
    let orbit = seed.orbit();

    let planet = seed.into_protoplanet();
    assert_eq!(planet.mass(), mass);
    assert_eq!(planet.orbit(), orbit);
    assert!(planet.moons.is_empty());
}

#[test]
fn captured_moons_add_up() {
    let mut planet = planetesimal(2.0, 10.0).into_protoplanet();
    assert_eq!(planet.mass_of_moons(), Mass::zero());

    planet.add_moon(planetesimal(2.0, 0.1).into_protomoon());
    planet.add_moon(planetesimal(2.0, 0.2).into_protomoon());
    assert_relative_eq!(planet.mass_of_moons().to_earth_masses(), 0.33, epsilon = 1e-9);
}

#[test]
fn protomoon_borrows_host_orbit() {
    let moon = Protomoon {
        dust_mass: Mass::from_earth_masses(0.01),
        gas_mass: Mass::zero(),
    };
    let orbit = Orbit::new(Length::from_au(5.2), 0.05);
    let stand_in = moon.at_host_orbit(orbit, sun());
    assert_eq!(stand_in.orbit(), orbit);
    assert_eq!(stand_in.mass(), moon.mass());
}

#[test]
fn gas_giant_threshold_is_critical_mass() {
    let small = planetesimal(1.0, 0.1);
    assert!(!small.is_gas_giant());

    let big = planetesimal(5.0, 20.0);
    assert!(big.mass() > big.critical_mass());
    assert!(big.is_gas_giant());
}
