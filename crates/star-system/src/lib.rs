//! Whole planetary systems: a star, its accreted planets and their moons.
//!
//! This crate wires the stages together. [`generate_system`] runs accretion
//! around a [`Star`](stellar::Star) and derives every surviving protoplanet;
//! [`generate_systems`] does the same for many stars in parallel.
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand_chacha::ChaChaRng;
//! use star_system::{GenerationConfig, generate_system};
//! use stellar::Star;
//! use units::{Mass, Time};
//!
//! let sun = Star::new(Mass::from_solar_masses(1.0), Time::from_gyr(4.6)).unwrap();
//! let mut rng = ChaChaRng::seed_from_u64(42);
//! let system = generate_system(&sun, &GenerationConfig::default(), &mut rng).unwrap();
//! println!("{} planets", system.planets.len());
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod metadata;
pub mod system;

pub use batch::generate_systems;
pub use config::GenerationConfig;
pub use error::GenerationError;
pub use metadata::SystemMetadata;
pub use system::{StellarSystem, generate_named_system, generate_system};

// Re-export planetary types for convenience
pub use planetary::{Breathability, Diagnostic, Planet, PlanetType};

#[cfg(test)]
mod config_test;
