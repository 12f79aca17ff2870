use log::info;
use rand::Rng;
use stellar::Star;
use units::{Length, Mass};

use super::{AccretionConfig, coalesce_planetesimal};
use crate::bodies::{Orbit, OrbitingBody, Planetesimal, Planetoid, Protoplanet};
use crate::constants::{ECCENTRICITY_COEFF, MAX_SEED_ECCENTRICITY, PROTOPLANET_MASS};
use crate::disk::CircumstellarDisk;

/// Draws a seed somewhere between the disk's planet bounds.
///
/// The semi-major axis is uniform; the eccentricity is `1 - U^0.077`, which
/// piles up near zero with a long tail, capped at 0.99.
pub fn random_planetesimal(disk: &CircumstellarDisk, rng: &mut impl Rng) -> Planetesimal {
    let a = rng.random_range(disk.planet_inner_bound().to_au()..disk.planet_outer_bound().to_au());
    let u: f64 = rng.random();
    let e = (1.0 - u.powf(ECCENTRICITY_COEFF)).min(MAX_SEED_ECCENTRICITY);

    Planetesimal::new(
        OrbitingBody::new(
            Orbit::new(Length::from_au(a), e),
            Mass::from_solar_masses(PROTOPLANET_MASS),
            Mass::zero(),
        ),
        *disk.star(),
    )
}

/// Injects seeds into `disk` until it runs dry or the failure cap is hit.
///
/// Returns the surviving protoplanets sorted by semi-major axis.
pub fn run_accretion(
    disk: &mut CircumstellarDisk,
    config: &AccretionConfig,
    rng: &mut impl Rng,
) -> Vec<Protoplanet> {
    let mut planets: Vec<Protoplanet> = Vec::new();
    let mut sequential_failures = 0;
    let seed_mass = Mass::from_solar_masses(PROTOPLANET_MASS);

    while disk.dust_left() && sequential_failures < config.max_sequential_failures {
        let mut candidate = random_planetesimal(disk, rng);

        if !disk.dust_available(candidate.inner_effect_limit(), candidate.outer_effect_limit()) {
            sequential_failures += 1;
            continue;
        }
        sequential_failures = 0;

        info!(
            "injecting planetesimal at {:.3} AU (e = {:.3})",
            candidate.orbit().semi_major_axis.to_au(),
            candidate.orbit().eccentricity
        );
        disk.accrete_dust(&mut candidate);

        if candidate.mass() > seed_mass {
            coalesce_planetesimal(disk, &mut planets, candidate, config.capture_moons);
        } else {
            info!("planetesimal failed to grow; its zone is already swept");
        }
    }

    if sequential_failures >= config.max_sequential_failures {
        info!("gave up after {sequential_failures} injections found no dust");
    }

    planets.sort_by(|a, b| {
        a.orbit()
            .semi_major_axis
            .to_au()
            .total_cmp(&b.orbit().semi_major_axis.to_au())
    });
    planets
}

/// Builds a fresh disk around `star` and accretes it into protoplanets.
pub fn generate_planetary_masses(
    star: &Star,
    config: &AccretionConfig,
    rng: &mut impl Rng,
) -> Vec<Protoplanet> {
    let mut disk = CircumstellarDisk::new(star);
    let planets = run_accretion(&mut disk, config, rng);

    info!(
        "accretion around {} produced {} protoplanets and {} moons",
        star.display_name(),
        planets.len(),
        planets.iter().map(|p| p.moons.len()).sum::<usize>()
    );
    planets
}
