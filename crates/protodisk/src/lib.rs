//! Dole/Fogg planetesimal accretion in a dust-lane disk.
//!
//! A disk starts as a single lane of dust and gas reaching out to the star's
//! dust limit. Seeds are injected at random orbits, sweep up the material
//! inside their effect limits and either merge with an existing protoplanet,
//! get captured as its moon, or become a new protoplanet. The lanes they
//! swept are cleared, so later seeds find less and less to eat until the
//! disk runs dry.
//!
//! # References
//! - Dole, S. H. (1970) "Computer Simulation of the Formation of Planetary Systems", Icarus 13
//! - Fogg, M. J. (1985) "Extra-Solar Planetary Systems: A Microcomputer Simulation", JBIS 38
//! - Burrows, Sheffield & Burdick, StarGen accrete.c

pub mod accretion;
pub mod bodies;
pub mod constants;
pub mod disk;

pub use accretion::{
    AccretionConfig, CoalescenceOutcome, coalesce_planetesimal, generate_planetary_masses,
    random_planetesimal, run_accretion,
};
pub use bodies::{
    Orbit, OrbitingBody, Planetesimal, Planetoid, Protomoon, Protoplanet, StellarContext,
};
pub use disk::{CircumstellarDisk, DustLane, repartition};
