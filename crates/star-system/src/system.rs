//! A star and the planets that formed around it.

use log::info;
use planetary::{Breathability, Planet, generate_planet};
use protodisk::{Planetoid, generate_planetary_masses};
use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::Star;
use units::Mass;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::metadata::SystemMetadata;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarSystem {
    pub star: Star,
    /// Ordered by semi-major axis, innermost first
    pub planets: Vec<Planet>,
    pub metadata: SystemMetadata,
}

impl StellarSystem {
    pub fn new(star: Star, mut planets: Vec<Planet>, metadata: SystemMetadata) -> Self {
        planets.sort_by(|a, b| {
            a.semi_major_axis()
                .to_au()
                .total_cmp(&b.semi_major_axis().to_au())
        });
        Self {
            star,
            planets,
            metadata,
        }
    }

    pub fn innermost_planet(&self) -> Option<&Planet> {
        self.planets.first()
    }

    pub fn outermost_planet(&self) -> Option<&Planet> {
        self.planets.last()
    }

    /// Planets and moons with air a human could breathe
    pub fn habitable_candidates(&self) -> Vec<&Planet> {
        self.planets
            .iter()
            .flat_map(|p| std::iter::once(p).chain(p.moons.iter()))
            .filter(|p| p.breathability() == Breathability::Breathable)
            .collect()
    }

    pub fn moon_count(&self) -> usize {
        self.planets.iter().map(|p| p.moons.len()).sum()
    }

    /// Planets plus their moons
    pub fn total_planetary_mass(&self) -> Mass {
        self.planets
            .iter()
            .map(|p| p.mass() + p.moons.iter().map(Planet::mass).sum::<Mass>())
            .sum()
    }
}

/// Accretes a disk around `star` and derives every surviving body.
///
/// Fails only on a bad `config`; a disk that forms nothing gives an empty
/// system.
pub fn generate_system(
    star: &Star,
    config: &GenerationConfig,
    rng: &mut impl Rng,
) -> Result<StellarSystem, GenerationError> {
    config.validate()?;
    let metadata = SystemMetadata::from_rng(rng);
    Ok(assemble(star, config, metadata, rng))
}

/// Generates the system a name stands for: the same name always yields the
/// same system for the same star and config.
pub fn generate_named_system(
    star: &Star,
    config: &GenerationConfig,
    name: &str,
) -> Result<StellarSystem, GenerationError> {
    config.validate()?;
    let metadata = SystemMetadata::from_seed_name(name).with_name(name);
    let mut rng = metadata.rng();
    Ok(assemble(star, config, metadata, &mut rng))
}

fn assemble(
    star: &Star,
    config: &GenerationConfig,
    metadata: SystemMetadata,
    rng: &mut impl Rng,
) -> StellarSystem {
    let options = config.planet_options();
    let planets: Vec<Planet> = generate_planetary_masses(star, &config.accretion(), rng)
        .iter()
        .filter(|p| p.mass() > Mass::zero())
        .map(|p| generate_planet(p, star, &options, false, &mut *rng))
        .collect();

    let system = StellarSystem::new(star.clone(), planets, metadata);
    info!(
        "{} around {}: {} planets, {} moons, {} habitable candidates",
        system.metadata.display_name(),
        star.display_name(),
        system.planets.len(),
        system.moon_count(),
        system.habitable_candidates().len()
    );
    system
}
