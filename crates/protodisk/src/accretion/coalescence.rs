use log::info;
use units::Length;

use crate::bodies::{Orbit, Planetesimal, Planetoid, Protoplanet};
use crate::constants::{MAX_MOON_MASS_FRACTION, MOON_MAX_EARTH_MASSES, MOON_MIN_EARTH_MASSES};
use crate::disk::CircumstellarDisk;

/// How a grown seed was resolved against the existing protoplanets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoalescenceOutcome {
    /// No neighbour's zone overlapped; the seed joined the list.
    NewProtoplanet,
    /// Absorbed into `planets[index]`.
    Merged { index: usize },
    /// Captured as a moon of `planets[index]`.
    MoonCaptured { index: usize },
}

/// Resolves `candidate` against `planets`, the first overlapping body wins.
///
/// `index` in the outcome refers to `planets` as passed in; new protoplanets
/// are appended, so earlier indices stay valid.
pub fn coalesce_planetesimal(
    disk: &mut CircumstellarDisk,
    planets: &mut Vec<Protoplanet>,
    candidate: Planetesimal,
    capture_moons: bool,
) -> CoalescenceOutcome {
    let Some(index) = planets
        .iter()
        .position(|planet| orbits_overlap(planet, &candidate))
    else {
        info!(
            "new protoplanet at {:.3} AU with mass {}",
            candidate.orbit().semi_major_axis.to_au(),
            candidate.mass()
        );
        planets.push(candidate.into_protoplanet());
        return CoalescenceOutcome::NewProtoplanet;
    };

    let host = &mut planets[index];
    let orbit = merged_orbit(&*host, &candidate);

    if capture_moons {
        if can_capture(host, &candidate) {
            info!(
                "moon captured at {:.3} AU: planet {}, moon {}",
                host.orbit().semi_major_axis.to_au(),
                host.mass(),
                candidate.mass()
            );
            host.add_moon(candidate.into_protomoon());
            return CoalescenceOutcome::MoonCaptured { index };
        }
        if candidate.mass() < candidate.critical_mass() {
            info!(
                "no moon captured at {:.3} AU; the bodies collide",
                host.orbit().semi_major_axis.to_au()
            );
        }
    }

    info!("collision between planetesimals, merging into a new orbit");

    disk.accrete_dust(host);
    host.body.orbit = orbit;
    host.body.dust_mass += candidate.body.dust_mass;
    host.body.gas_mass += candidate.body.gas_mass;

    info!(
        "conglomerate is now {} at {:.3} AU",
        host.mass(),
        host.orbit().semi_major_axis.to_au()
    );
    CoalescenceOutcome::Merged { index }
}

/// True if either body's gravitational reach spans the gap between them.
///
/// Each reach runs from the semi-major axis out to the apoapsis (or in to the
/// periapsis) stretched by the body's reduced mass, on the side facing the
/// other body.
pub(crate) fn orbits_overlap(existing: &Protoplanet, candidate: &Planetesimal) -> bool {
    let planet = existing.orbit();
    let seed = candidate.orbit();
    let planet_mu = existing.reduced_mass();
    let seed_mu = candidate.reduced_mass();

    let diff = (planet.semi_major_axis - seed.semi_major_axis).to_au();
    let (dist1, dist2) = if diff > 0.0 {
        (
            seed.apoapsis().to_au() * (1.0 + seed_mu) - seed.semi_major_axis.to_au(),
            planet.semi_major_axis.to_au() - planet.periapsis().to_au() * (1.0 - planet_mu),
        )
    } else {
        (
            seed.semi_major_axis.to_au() - seed.periapsis().to_au() * (1.0 - seed_mu),
            planet.apoapsis().to_au() * (1.0 + planet_mu) - planet.semi_major_axis.to_au(),
        )
    };

    diff.abs() <= dist1.abs() || diff.abs() <= dist2.abs()
}

/// Orbit of the merged body.
///
/// The semi-major axis is the mass-weighted harmonic mean. The eccentricity
/// comes from combining the angular momenta; the candidate's term takes a
/// fourth root of `1 - e²` rather than a square root, as in StarGen. Values
/// outside `[0, 1)` collapse to a circular orbit.
pub(crate) fn merged_orbit(existing: &impl Planetoid, candidate: &impl Planetoid) -> Orbit {
    let m1 = existing.mass().to_solar_masses();
    let m2 = candidate.mass().to_solar_masses();
    let Orbit {
        semi_major_axis: a1,
        eccentricity: e1,
    } = existing.orbit();
    let Orbit {
        semi_major_axis: a2,
        eccentricity: e2,
    } = candidate.orbit();
    let (a1, a2) = (a1.to_au(), a2.to_au());

    let a = (m1 + m2) / (m1 / a1 + m2 / a2);

    let momentum = m1 * a1.sqrt() * (1.0 - e1 * e1).sqrt()
        + m2 * a2.sqrt() * (1.0 - e2 * e2).sqrt().sqrt();
    let temp = 1.0 - (momentum / ((m1 + m2) * a2.sqrt())).powi(2);
    let temp = if (0.0..1.0).contains(&temp) { temp } else { 0.0 };

    Orbit::new(Length::from_au(a), temp.sqrt())
}

/// Whether `host` can hold on to `candidate` as a moon.
pub(crate) fn can_capture(host: &Protoplanet, candidate: &Planetesimal) -> bool {
    let mass = candidate.mass();
    let earth_masses = mass.to_earth_masses();

    mass < candidate.critical_mass()
        && earth_masses > MOON_MIN_EARTH_MASSES
        && earth_masses < MOON_MAX_EARTH_MASSES
        && host.mass_of_moons() < host.mass() * MAX_MOON_MASS_FRACTION
        && host.mass() > mass
}
