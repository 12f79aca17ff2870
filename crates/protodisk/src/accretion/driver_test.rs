use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::Star;
use units::{Length, Mass, Time};

use super::{AccretionConfig, generate_planetary_masses, random_planetesimal, run_accretion};
use crate::bodies::Planetoid;
use crate::constants::{MAX_SEED_ECCENTRICITY, PROTOPLANET_MASS};
use crate::disk::CircumstellarDisk;

fn star(mass: f64) -> Star {
    Star::new(Mass::from_solar_masses(mass), Time::from_gyr(4.6)).unwrap()
}

#[test]
fn default_config() {
    let config = AccretionConfig::default();
    assert_eq!(config.max_sequential_failures, 1000);
    assert!(config.capture_moons);
    assert!(!config.without_moons().capture_moons);
}

#[test]
fn config_fills_missing_fields_from_defaults() {
    let config: AccretionConfig = serde_json::from_str(r#"{"captureMoons": false}"#).unwrap();
    assert_eq!(config.max_sequential_failures, 1000);
    assert!(!config.capture_moons);
}

#[test]
fn seeds_land_between_the_planet_bounds() {
    let disk = CircumstellarDisk::new(&star(1.0));
    let mut rng = ChaChaRng::seed_from_u64(7);

    for _ in 0..1000 {
        let seed = random_planetesimal(&disk, &mut rng);
        let a = seed.orbit().semi_major_axis;
        assert!(a >= disk.planet_inner_bound() && a < disk.planet_outer_bound());
        assert!((0.0..=MAX_SEED_ECCENTRICITY).contains(&seed.orbit().eccentricity));
        assert_eq!(seed.mass(), Mass::from_solar_masses(PROTOPLANET_MASS));
        assert_eq!(seed.body.gas_mass, Mass::zero());
    }
}

#[test]
fn sun_like_disk_accretes_sorted_protoplanets() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let planets = generate_planetary_masses(&star(1.0), &AccretionConfig::default(), &mut rng);

    assert!(!planets.is_empty());
    for planet in &planets {
        assert!(planet.mass() > Mass::from_solar_masses(PROTOPLANET_MASS));
        assert!(planet.orbit().semi_major_axis > Length::zero());
    }
    for pair in planets.windows(2) {
        assert!(pair[0].orbit().semi_major_axis <= pair[1].orbit().semi_major_axis);
    }
}

#[test]
fn same_seed_same_system() {
    let config = AccretionConfig::default();
    let first = generate_planetary_masses(&star(1.0), &config, &mut ChaChaRng::seed_from_u64(3));
    let second = generate_planetary_masses(&star(1.0), &config, &mut ChaChaRng::seed_from_u64(3));
    assert_eq!(first, second);
}

#[test]
fn moons_off_means_no_moons() {
    let config = AccretionConfig::default().without_moons();
    for seed in 0..5 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let planets = generate_planetary_masses(&star(1.0), &config, &mut rng);
        assert!(planets.iter().all(|p| p.moons.is_empty()));
    }
}

#[test]
fn zero_failure_budget_injects_nothing() {
    let config = AccretionConfig {
        max_sequential_failures: 0,
        ..AccretionConfig::default()
    };
    let mut disk = CircumstellarDisk::new(&star(1.0));
    let mut rng = ChaChaRng::seed_from_u64(1);

    assert!(run_accretion(&mut disk, &config, &mut rng).is_empty());
    assert_eq!(disk.lanes().len(), 1);
}

#[test]
fn disk_out_of_reach_gives_up_empty() {
    let sun = star(1.0);
    let mut disk =
        CircumstellarDisk::with_dust_bounds(&sun, Length::from_au(150.0), Length::from_au(200.0));
    let mut rng = ChaChaRng::seed_from_u64(9);

    let planets = run_accretion(&mut disk, &AccretionConfig::default(), &mut rng);

    assert!(planets.is_empty());
    assert!(disk.dust_left());
}
