use approx::assert_relative_eq;
use stellar::Star;
use units::{Length, Mass, Time};

use super::CircumstellarDisk;
use crate::bodies::{Orbit, OrbitingBody, Planetesimal, Planetoid, StellarContext};
use crate::constants::{ALPHA, DUST_DENSITY_COEFF, PROTOPLANET_MASS};

fn star(mass: f64) -> Star {
    Star::new(Mass::from_solar_masses(mass), Time::from_gyr(4.6)).unwrap()
}

fn seed(star: &Star, a: f64, e: f64) -> Planetesimal {
    Planetesimal::new(
        OrbitingBody::new(
            Orbit::new(Length::from_au(a), e),
            Mass::from_solar_masses(PROTOPLANET_MASS),
            Mass::zero(),
        ),
        StellarContext::from(star),
    )
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn new_disk_is_one_lane_out_to_the_dust_limit() {
    let disk = CircumstellarDisk::new(&star(1.0));
    assert_eq!(disk.lanes().len(), 1);
    let lane = disk.lanes()[0];
    assert_eq!(lane.inner, Length::zero());
    assert_relative_eq!(lane.outer.to_au(), 200.0);
    assert!(lane.dust_present && lane.gas_present);
    assert!(disk.dust_left());
}

#[test]
fn m_dwarf_disk_is_scaled_down() {
    let disk = CircumstellarDisk::new(&star(0.2));
    let scale = 0.2_f64.powf(1.0 / 3.0);

    assert_relative_eq!(disk.lanes()[0].outer.to_au(), 200.0 * scale, max_relative = 1e-12);
    assert_relative_eq!(disk.planet_inner_bound().to_au(), 0.3 * scale, max_relative = 1e-12);
    assert_relative_eq!(disk.planet_outer_bound().to_au(), 50.0 * scale, max_relative = 1e-12);
}

#[test]
fn dust_density_decays_outward() {
    let disk = CircumstellarDisk::new(&star(1.0));
    assert_relative_eq!(
        disk.dust_density(Length::from_au(1.0)),
        DUST_DENSITY_COEFF * (-ALPHA).exp()
    );
    assert!(disk.dust_density(Length::from_au(5.0)) < disk.dust_density(Length::from_au(1.0)));

    let heavy = CircumstellarDisk::new(&star(4.0));
    assert_relative_eq!(
        heavy.dust_density(Length::from_au(1.0)),
        2.0 * disk.dust_density(Length::from_au(1.0))
    );
}

#[test]
fn dust_available_only_where_dusty_lanes_overlap() {
    let sun = star(1.0);
    let disk = CircumstellarDisk::with_dust_bounds(&sun, Length::from_au(1.0), Length::from_au(10.0));

    assert!(disk.dust_available(Length::from_au(2.0), Length::from_au(3.0)));
    assert!(disk.dust_available(Length::from_au(0.5), Length::from_au(20.0)));
    assert!(!disk.dust_available(Length::from_au(10.0), Length::from_au(12.0)));
    assert!(!disk.dust_available(Length::from_au(0.1), Length::from_au(1.0)));
}

// ============================================================================
// Accretion
// ============================================================================

#[test]
fn a_seed_in_the_dust_grows_and_clears_its_lane() {
    let sun = star(1.0);
    let mut disk = CircumstellarDisk::new(&sun);
    let mut body = seed(&sun, 1.0, 0.1);

    disk.accrete_dust(&mut body);

    assert!(body.mass().to_solar_masses() > PROTOPLANET_MASS);
    assert!(!disk.dust_available(body.inner_effect_limit(), body.outer_effect_limit()));
    assert_eq!(disk.lanes().len(), 3);
    assert!(disk.dust_left());
}

#[test]
fn collect_dust_is_zero_in_cleared_lanes() {
    let sun = star(1.0);
    let mut disk = CircumstellarDisk::new(&sun);
    let mut first = seed(&sun, 1.0, 0.1);
    disk.accrete_dust(&mut first);

    let second = seed(&sun, 1.0, 0.05);
    let (dust, gas) = disk.collect_dust(&second);
    assert_eq!(dust, Mass::zero());
    assert_eq!(gas, Mass::zero());
}

#[test]
fn a_seed_outside_all_dust_keeps_its_seed_mass() {
    let sun = star(1.0);
    let mut disk =
        CircumstellarDisk::with_dust_bounds(&sun, Length::from_au(10.0), Length::from_au(20.0));
    let mut body = seed(&sun, 1.0, 0.0);

    disk.accrete_dust(&mut body);

    assert_relative_eq!(body.mass().to_solar_masses(), PROTOPLANET_MASS);
    assert_eq!(body.body.gas_mass, Mass::zero());
    assert_eq!(disk.lanes().len(), 1);
}

#[test]
fn small_bodies_collect_no_gas() {
    let sun = star(1.0);
    let disk = CircumstellarDisk::new(&sun);
    let body = seed(&sun, 1.0, 0.0);
    assert!(body.mass() < body.critical_mass());

    let (dust, gas) = disk.collect_dust(&body);
    assert!(dust > Mass::zero());
    assert_eq!(gas, Mass::zero());
}

#[test]
fn bodies_above_critical_mass_collect_gas() {
    let sun = star(1.0);
    let disk = CircumstellarDisk::new(&sun);
    let mut body = seed(&sun, 5.0, 0.0);
    body.body.dust_mass = Mass::from_earth_masses(15.0);
    assert!(body.mass() > body.critical_mass());

    let (dust, gas) = disk.collect_dust(&body);
    assert!(gas > dust, "gas {gas:?} should dominate dust {dust:?}");
}

#[test]
fn accretion_never_makes_a_body_lighter() {
    let sun = star(1.0);
    let mut disk = CircumstellarDisk::new(&sun);
    let mut body = seed(&sun, 2.0, 0.05);
    body.body.dust_mass = Mass::from_earth_masses(50.0);
    let before = body.mass();

    disk.accrete_dust(&mut body);
    assert!(body.mass() >= before);
}
