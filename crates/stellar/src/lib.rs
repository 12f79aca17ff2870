//! Host star model for planetary system generation.
//!
//! A [`Star`] is described by its mass and age; everything the accretion and
//! environment stages need (luminosity, ecosphere radius, dust limit,
//! main-sequence lifetime) is derived from those two numbers.

pub mod error;
pub mod sampling;
pub mod spectral;
pub mod star;

#[cfg(test)]
mod sampling_test;
#[cfg(test)]
mod spectral_test;

pub use error::StellarError;
pub use sampling::{random_field_star, random_star, sample_mass_kroupa};
pub use spectral::{SpectralClass, SpectralType};
pub use star::Star;
