//! Accretion model constants.
//!
//! Masses are in solar masses and distances in AU unless noted.

/// Seed mass of an injected planetesimal (M☉)
pub const PROTOPLANET_MASS: f64 = 1.0e-15;

/// Dust density scale in M☉/AU³
pub const DUST_DENSITY_COEFF: f64 = 2.0e-3;

/// Radial falloff of the dust density
pub const ALPHA: f64 = 5.0;

/// Root taken of the orbital distance in the dust density falloff
pub const N: f64 = 3.0;

/// Exponent in `e = 1 - U^ECCENTRICITY_COEFF` for seed eccentricities
pub const ECCENTRICITY_COEFF: f64 = 0.077;

pub const MAX_SEED_ECCENTRICITY: f64 = 0.99;

/// Critical mass scale for gas accretion (M☉)
pub const B: f64 = 1.2e-5;

/// Ratio of gas to dust in the primordial disk
pub const GAS_DUST_RATIO: f64 = 50.0;

/// Eccentricity of dust particles, widening a body's effect limits
pub const DISK_ECCENTRICITY: f64 = 0.2;

/// Accretion stops once a pass adds less than this fraction of the mass
pub const ACCRETION_CONVERGENCE: f64 = 1.0e-4;

/// Seed orbits are drawn between these bounds, scaled by M^(1/3) (AU)
pub const PLANET_INNER_BOUND_AU: f64 = 0.3;
pub const PLANET_OUTER_BOUND_AU: f64 = 50.0;

/// Injection attempts in a row that find no dust before the disk is given up on
pub const MAX_SEQUENTIAL_FAILURES: usize = 1000;

/// Captured moons must fall in this Earth-mass window
pub const MOON_MIN_EARTH_MASSES: f64 = 1.0e-4;
pub const MOON_MAX_EARTH_MASSES: f64 = 2.5;

/// A host stops capturing once its moons weigh this fraction of its own mass
pub const MAX_MOON_MASS_FRACTION: f64 = 0.05;
