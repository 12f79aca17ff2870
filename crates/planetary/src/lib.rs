//! Planet derivation for accreted planetary systems
//!
//! Takes the protoplanets left by [`protodisk`] and works out what kind of
//! world each one became: size and density, how long it keeps its gases,
//! its day, its climate, what its air is made of and what type of planet
//! that adds up to. Captured moons go through the same pipeline.
//!
//! # References
//! - Fogg, M. J. (1985) "Extra-Solar Planetary Systems: A Microcomputer Simulation", JBIS 38
//! - Dole, S. H. (1964) "Habitable Planets for Man"
//! - Burrows, Sheffield & Burdick, StarGen enviro.c

pub mod atmosphere;
pub mod climate;
pub mod constants;
pub mod diagnostic;
pub mod gas;
pub mod generation;
pub mod moon;
pub mod physics;
pub mod planet;
pub mod planet_type;
pub mod temperature;
pub mod variation;

// Re-export key types at crate root
pub use atmosphere::{AtmosphericGas, Breathability, breathability, calculate_gases};
pub use diagnostic::Diagnostic;
pub use gas::Gas;
pub use generation::{PlanetOptions, generate_planet};
pub use moon::RocheFormula;
pub use physics::OrbitalZone;
pub use planet::{BulkProperties, OrbitalProfile, Planet, Rotation, SurfaceConditions};
pub use planet_type::PlanetType;
pub use temperature::{TemperatureSolution, iterate_surface_temp};

#[cfg(test)]
mod climate_test;
#[cfg(test)]
mod gas_test;
#[cfg(test)]
mod planet_test;
#[cfg(test)]
mod temperature_test;
