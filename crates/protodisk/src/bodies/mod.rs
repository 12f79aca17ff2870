//! Bodies taking part in accretion.
//!
//! All roles share an [`OrbitingBody`] (orbit plus dust and gas mass) and
//! differ only in what they are attached to:
//!
//! - [`Planetesimal`]: a freshly injected seed, still sweeping the disk
//! - [`Protoplanet`]: a seed that survived and did not merge, carrying moons
//! - [`Protomoon`]: a seed captured by a protoplanet; it has no orbit of its
//!   own until the host's radius and density are known
//!
//! The derived quantities the disk needs (reduced mass, effect limits,
//! critical mass) come from the [`Planetoid`] trait.

mod orbit;
mod planetoid;
mod roles;

#[cfg(test)]
mod roles_test;

pub use orbit::Orbit;
pub use planetoid::{OrbitingBody, Planetoid, StellarContext};
pub use roles::{Planetesimal, Protomoon, Protoplanet};
