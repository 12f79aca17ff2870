//! Planet derivation pipeline
//!
//! Turns a protoplanet left over from accretion into a fully described
//! [`Planet`]. The stages run in a fixed order because each reads the
//! results of the ones before it:
//!
//! 1. orbit: tilt, zone and period
//! 2. bulk: exosphere, provisional gas giant size, retained gases
//! 3. gas giant test; rocky bodies are resized and lose light gases
//! 4. rotation and escape velocity
//! 5. surface: placeholders for giants, climate iteration and
//!    classification for everything else
//! 6. moons, run through the same pipeline and placed around the host

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Mass, Time};

use protodisk::{Orbit, OrbitingBody, Protoplanet};

use crate::atmosphere::calculate_gases;
use crate::climate::estimated_temperature;
use crate::constants::{
    ACCRETED_GAS_FRACTION, EARTH_ALBEDO, EARTH_AVERAGE_TEMP, FREEZING_POINT_OF_WATER,
    MIN_MOON_EARTH_MASSES,
};
use crate::gas::{HELIUM, MOL_HYDROGEN, MOL_NITROGEN};
use crate::moon::{RocheFormula, hill_sphere, place_moon, roche_limit};
use crate::physics::{
    OrbitalZone, SpinInputs, day_length, empirical_density, escape_velocity,
    exospheric_temperature, gas_life, kothari_radius, min_molecular_weight, rms_velocity,
    surface_acceleration, volume_density, volume_radius,
};
use crate::planet::{BulkProperties, OrbitalProfile, Planet, Rotation, SurfaceConditions};
use crate::planet_type::{ClassificationInputs, PlanetType, classify_rocky};
use crate::temperature::{ClimateInputs, initial_conditions, iterate_surface_temp};
use crate::variation::{gas_giant_albedo, random_axial_tilt};

/// Share of accreted gas assumed to be hydrogen
const HYDROGEN_SHARE: f64 = 0.85;

/// Share of the non-hydrogen gas assumed to be helium
const HELIUM_SHARE: f64 = 0.999;

/// Switches and tunables for the planet pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanetOptions {
    /// Work out atmospheric composition for bodies that can hold one
    pub do_gases: bool,
    /// Derive and place captured moons
    pub do_moons: bool,
    /// Random axial tilt; zero otherwise
    pub random_tilt: bool,
    pub roche_formula: RocheFormula,
    /// Moon eccentricities are drawn from `[0, moon_eccentricity_max]`
    pub moon_eccentricity_max: f64,
}

impl Default for PlanetOptions {
    fn default() -> Self {
        Self {
            do_gases: true,
            do_moons: true,
            random_tilt: false,
            roche_formula: RocheFormula::Doubled,
            moon_eccentricity_max: 0.2,
        }
    }
}

/// Derives a planet (or, with `is_moon`, a moon) from `protoplanet`.
///
/// Moons of a protoplanet are derived only when the body itself is not a
/// moon and [`PlanetOptions::do_moons`] is set.
pub fn generate_planet(
    protoplanet: &Protoplanet,
    star: &Star,
    options: &PlanetOptions,
    is_moon: bool,
    rng: &mut impl Rng,
) -> Planet {
    let body = &protoplanet.body;
    let orbit = orbital_profile(body, star, options, rng);

    let mut bulk = provisional_bulk(body, star, &orbit);
    let giant = PlanetType::gas_giant(bulk.mass, bulk.gas_fraction(), bulk.min_molecular_weight);

    if giant.is_none() {
        settle_rocky(&mut bulk, orbit.zone);
        lose_light_gases(&mut bulk, star.age);
    }

    let rotation = day_length(&SpinInputs {
        mass: bulk.mass,
        radius: bulk.radius,
        density: bulk.density,
        semi_major_axis: orbit.orbit.semi_major_axis,
        eccentricity: orbit.orbit.eccentricity,
        year: orbit.period,
        gas_giant: giant.is_some(),
        stellar_mass_ratio: star.mass_ratio(),
        stellar_age: star.age,
    });
    bulk.escape_velocity = escape_velocity(bulk.mass, bulk.radius);
    bulk.min_molecular_weight =
        min_molecular_weight(bulk.exospheric_temp, bulk.surface_accel, bulk.radius, star.age);

    let mut planet = match giant {
        Some(planet_type) => gas_giant(orbit, bulk, rotation, planet_type, star, is_moon, rng),
        None => rocky(orbit, bulk, rotation, star, options, is_moon),
    };

    if options.do_moons && !is_moon {
        planet.moons = protoplanet
            .moons
            .iter()
            .filter(|moon| moon.mass().to_earth_masses() > MIN_MOON_EARTH_MASSES)
            .map(|protomoon| {
                let moon = protomoon.at_host_orbit(body.orbit, protoplanet.host);
                generate_planet(&moon, star, options, true, &mut *rng)
            })
            .collect();

        let hill = hill_sphere(orbit.orbit.semi_major_axis, planet.mass(), star.mass);
        for (index, moon) in planet.moons.iter_mut().enumerate() {
            place_around_host(moon, &planet.bulk, hill, options, rng);
            info!(
                "moon #{} of the {} planet at {:.3} AU: {}, a = {:.0} km, e = {:.3}",
                index + 1,
                planet.bulk.mass,
                orbit.orbit.semi_major_axis.to_au(),
                moon.bulk.mass,
                moon.orbit.orbit.semi_major_axis.to_km(),
                moon.orbit.orbit.eccentricity
            );
        }
    }

    planet
}

// =============================================================================
// Stages
// =============================================================================

fn orbital_profile(
    body: &OrbitingBody,
    star: &Star,
    options: &PlanetOptions,
    rng: &mut impl Rng,
) -> OrbitalProfile {
    let a = body.orbit.semi_major_axis;
    let axial_tilt = if options.random_tilt {
        random_axial_tilt(a, rng)
    } else {
        0.0
    };

    OrbitalProfile {
        orbit: body.orbit,
        zone: OrbitalZone::from_distance(a, star.luminosity_ratio()),
        period: body.orbit.period(star.mass, body.mass()),
        axial_tilt,
    }
}

/// Sizes the body as if it were a gas giant, which is what the gas giant
/// test needs to know whether it keeps helium.
fn provisional_bulk(body: &OrbitingBody, star: &Star, orbit: &OrbitalProfile) -> BulkProperties {
    let a = orbit.orbit.semi_major_axis;
    let r_ecosphere = star.r_ecosphere();
    let mass = body.mass();

    let exospheric_temp = exospheric_temperature(a, r_ecosphere);
    let density = empirical_density(mass, a, r_ecosphere, true);
    let radius = volume_radius(mass, density);
    let surface_accel = surface_acceleration(mass, radius);

    BulkProperties {
        dust_mass: body.dust_mass,
        gas_mass: body.gas_mass,
        mass,
        core_radius: kothari_radius(body.dust_mass, false, orbit.zone),
        radius,
        density,
        surface_accel,
        escape_velocity: escape_velocity(mass, radius),
        rms_velocity: rms_velocity(MOL_NITROGEN, exospheric_temp),
        exospheric_temp,
        min_molecular_weight: min_molecular_weight(
            exospheric_temp,
            surface_accel,
            radius,
            star.age,
        ),
    }
}

fn settle_rocky(bulk: &mut BulkProperties, zone: OrbitalZone) {
    bulk.radius = kothari_radius(bulk.mass, false, zone);
    bulk.density = volume_density(bulk.mass, bulk.radius);
    bulk.surface_accel = surface_acceleration(bulk.mass, bulk.radius);
}

/// Boils off accreted hydrogen, then helium, when their escape lifetime is
/// shorter than the star's age.
fn lose_light_gases(bulk: &mut BulkProperties, age: Time) {
    if bulk.gas_fraction() <= ACCRETED_GAS_FRACTION {
        return;
    }

    let h2_mass = bulk.gas_mass * HYDROGEN_SHARE;
    let he_mass = (bulk.gas_mass - h2_mass) * HELIUM_SHARE;

    for (weight, species_mass) in [(MOL_HYDROGEN, h2_mass), (HELIUM, he_mass)] {
        let life = gas_life(weight, bulk.exospheric_temp, bulk.surface_accel, bulk.radius);
        if life < age {
            let loss: Mass = species_mass * (1.0 - (-(age / life)).exp());
            bulk.gas_mass -= loss;
            bulk.mass -= loss;
            bulk.surface_accel = surface_acceleration(bulk.mass, bulk.radius);
            debug!("losing {} of gas with molecular weight {}", loss, weight);
        }
    }
}

fn gas_giant(
    orbit: OrbitalProfile,
    bulk: BulkProperties,
    rotation: Rotation,
    planet_type: PlanetType,
    star: &Star,
    is_moon: bool,
    rng: &mut impl Rng,
) -> Planet {
    let a = orbit.orbit.semi_major_axis;
    let albedo = gas_giant_albedo(rng);
    let estimated = estimated_temperature(star.r_ecosphere(), a, albedo);
    let terrestrial = estimated_temperature(star.r_ecosphere(), a, EARTH_ALBEDO);

    let t = terrestrial.to_kelvin();
    if (FREEZING_POINT_OF_WATER..=EARTH_AVERAGE_TEMP + 10.0).contains(&t)
        && star.age.to_years() > 2.0e9
    {
        info!(
            "{} ({}, {:.1} Gyr old) at {:.3} AU with earth-like temperature ({:.1} K)",
            planet_type,
            bulk.mass,
            star.age.to_gyr(),
            a.to_au(),
            t
        );
    }

    Planet {
        orbit,
        bulk,
        rotation,
        surface: SurfaceConditions::gas_giant(albedo, estimated, terrestrial),
        atmosphere: None,
        planet_type,
        is_moon,
        moons: Vec::new(),
        diagnostics: Vec::new(),
    }
}

fn rocky(
    orbit: OrbitalProfile,
    bulk: BulkProperties,
    rotation: Rotation,
    star: &Star,
    options: &PlanetOptions,
    is_moon: bool,
) -> Planet {
    let inputs = ClimateInputs {
        orbit,
        bulk,
        rotation,
        r_ecosphere: star.r_ecosphere(),
        stellar_mass_ratio: star.mass_ratio(),
    };
    let solution = iterate_surface_temp(&inputs, initial_conditions(&inputs));
    if !solution.converged {
        debug!(
            "surface temperature at {:.3} AU still moving after {} rounds",
            orbit.orbit.semi_major_axis.to_au(),
            solution.iterations
        );
    }
    let mut surface = solution.conditions;

    let mut atmosphere = if options.do_gases
        && surface.max_temp.to_kelvin() >= FREEZING_POINT_OF_WATER
        && surface.min_temp <= surface.boiling_point
    {
        calculate_gases(&bulk, &surface, star.age)
    } else {
        None
    };

    let classification = classify_rocky(&ClassificationInputs {
        mass: bulk.mass,
        is_moon,
        pressure: surface.pressure,
        min_molecular_weight: bulk.min_molecular_weight,
        tidally_locked: rotation.is_locked_to(orbit.period),
        hydrosphere: surface.hydrosphere,
        ice_cover: surface.ice_cover,
        surface_temp: surface.surface_temp,
        max_temp: surface.max_temp,
        boiling_point: surface.boiling_point,
        gas_fraction: bulk.gas_fraction(),
    });

    surface.ice_cover = classification.ice_cover;
    if classification.clears_atmosphere {
        atmosphere = None;
    }

    let mut diagnostics = Vec::new();
    if let Some(diagnostic) = classification.diagnostic {
        warn!(
            "{} at {:.3} AU: {}",
            bulk.mass,
            orbit.orbit.semi_major_axis.to_au(),
            diagnostic
        );
        diagnostics.push(diagnostic);
    }

    Planet {
        orbit,
        bulk,
        rotation,
        surface,
        atmosphere,
        planet_type: classification.planet_type,
        is_moon,
        moons: Vec::new(),
        diagnostics,
    }
}

/// Moves a moon off its host's orbit into a slot between the host's Roche
/// limit and Hill sphere, or flags it when there is no room.
fn place_around_host(
    moon: &mut Planet,
    host: &BulkProperties,
    hill: Length,
    options: &PlanetOptions,
    rng: &mut impl Rng,
) {
    let roche = roche_limit(
        host.radius,
        host.density,
        moon.bulk.density,
        options.roche_formula,
    );

    match place_moon(roche, hill, options.moon_eccentricity_max, rng) {
        Ok(orbit) => moon.orbit.orbit = orbit,
        Err(diagnostic) => {
            warn!("{} moon: {}", moon.bulk.mass, diagnostic);
            moon.orbit.orbit = Orbit::degenerate();
            moon.diagnostics.push(diagnostic);
        }
    }
}
