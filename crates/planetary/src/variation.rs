//! Random draws used while deriving a planet
//!
//! Everything takes the caller's RNG so a seeded generator reproduces the
//! same system.

use rand::Rng;
use units::Length;

use crate::constants::{EARTH_AXIAL_TILT, GAS_GIANT_ALBEDO};

/// A value drawn uniformly from `x ± dx`.
pub fn about(x: f64, dx: f64, rng: &mut impl Rng) -> f64 {
    rng.random_range(x - dx..=x + dx)
}

/// Axial tilt in whole degrees, growing slowly with distance from the star.
pub fn random_axial_tilt(a: Length, rng: &mut impl Rng) -> f64 {
    let tilt = (a.to_au().powf(0.2) * about(EARTH_AXIAL_TILT, 0.4, rng)).trunc();
    tilt.rem_euclid(360.0)
}

/// Bond albedo of a gas giant's cloud tops.
pub fn gas_giant_albedo(rng: &mut impl Rng) -> f64 {
    about(GAS_GIANT_ALBEDO, 0.1, rng)
}
