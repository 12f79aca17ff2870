//! End-to-end generation runs.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::Star;
use units::{Mass, Time};

use planetary::PlanetType;
use protodisk::{CircumstellarDisk, Orbit, OrbitingBody, Planetesimal, Planetoid, StellarContext};
use star_system::{GenerationConfig, generate_system, generate_systems};

fn star(mass: f64) -> Star {
    Star::new(Mass::from_solar_masses(mass), Time::from_gyr(4.6)).unwrap()
}

#[test]
fn sun_like_system_has_classified_planets() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let system = generate_system(&star(1.0), &GenerationConfig::default(), &mut rng).unwrap();

    assert!(!system.planets.is_empty());
    assert!(
        system
            .planets
            .iter()
            .any(|p| p.planet_type != PlanetType::Unknown)
    );
    for planet in system.planets.iter().chain(system.planets.iter().flat_map(|p| &p.moons)) {
        assert!(planet.mass() > Mass::zero());
        assert!(planet.radius().to_km() > 0.0, "{:?}", planet.planet_type);
    }
}

#[test]
fn m_dwarf_planets_stay_inside_the_scaled_disk() {
    let dwarf = star(0.2);
    let limit = 200.0 * 0.2_f64.powf(1.0 / 3.0);
    let disk = CircumstellarDisk::new(&dwarf);
    assert!((disk.lanes()[0].outer.to_au() - limit).abs() < 1e-9);

    let mut rng = ChaChaRng::seed_from_u64(8);
    let system = generate_system(&dwarf, &GenerationConfig::default(), &mut rng).unwrap();
    assert!(
        system
            .planets
            .iter()
            .all(|p| p.semi_major_axis().to_au() < limit)
    );
}

#[test]
fn disabling_moons_leaves_no_moons() {
    let config = GenerationConfig::default().without_moons();
    for seed in 0..5 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let system = generate_system(&star(1.0), &config, &mut rng).unwrap();
        assert_eq!(system.moon_count(), 0, "seed {seed}");
    }
}

#[test]
fn seed_beyond_the_dust_keeps_its_mass() {
    let sun = star(1.0);
    let mut disk = CircumstellarDisk::new(&sun);
    let outside = disk.lanes()[0].outer * 4.0;
    let seed_mass = Mass::from_solar_masses(1e-15);
    let mut seed = Planetesimal::new(
        OrbitingBody::new(Orbit::new(outside, 0.0), seed_mass, Mass::zero()),
        StellarContext::from(&sun),
    );

    assert!(!disk.dust_available(seed.inner_effect_limit(), seed.outer_effect_limit()));
    disk.accrete_dust(&mut seed);
    assert_eq!(seed.mass(), seed_mass);
}

#[test]
fn batch_of_field_stars_completes() {
    let mut rng = ChaChaRng::seed_from_u64(17);
    let stars: Vec<Star> = (0..6)
        .map(|_| stellar::random_field_star(&mut rng, 1.5))
        .collect();
    let results = generate_systems(&stars, &GenerationConfig::default(), 1);

    assert_eq!(results.len(), 6);
    assert!(results.iter().all(Result::is_ok));
}
