//! The injection loop that turns a dusty disk into protoplanets.
//!
//! Seeds are dropped at random orbits until the disk runs out of dust or too
//! many seeds in a row land where there is nothing left to sweep. Each seed
//! that grows is resolved against the existing protoplanets: it merges into
//! the first whose zone it overlaps, is captured as that body's moon, or
//! becomes a protoplanet of its own.

mod coalescence;
mod config;
mod driver;

#[cfg(test)]
mod driver_test;

pub use coalescence::{CoalescenceOutcome, coalesce_planetesimal};
pub use config::AccretionConfig;
pub use driver::{generate_planetary_masses, random_planetesimal, run_accretion};
