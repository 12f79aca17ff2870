//! Physical and empirical constants for the environment formulas.
//!
//! The formulas are Fogg's (1985) as extended by Burdick in StarGen; most
//! constants below are calibrated so an Earth analogue comes out Earth-like
//! rather than derived from first principles.

// =============================================================================
// Universal
// =============================================================================

/// Gravitational constant (cm³ g⁻¹ s⁻²)
pub const GRAV_CONSTANT: f64 = 6.672e-8;

/// Molar gas constant (J kmol⁻¹ K⁻¹), so RMS speeds come out in m/s for
/// weights in g/mol
pub const MOLAR_GAS_CONST: f64 = 8314.41;

// =============================================================================
// Earth calibration
// =============================================================================

pub const EARTH_DENSITY: f64 = 5.52; // g/cm³
pub const EARTH_AXIAL_TILT: f64 = 23.4; // degrees
pub const EARTH_EXOSPHERE_TEMP: f64 = 1273.0; // K
pub const EARTH_EFFECTIVE_TEMP: f64 = 250.0; // K
pub const EARTH_AVERAGE_TEMP: f64 = 287.15; // K
pub const EARTH_ALBEDO: f64 = 0.3;
pub const EARTH_SURF_PRES_MB: f64 = 1013.25;

/// Water mass per unit of Earth's surface (g/km²)
pub const EARTH_WATER_MASS_PER_AREA: f64 = 3.83e15;

/// Convection factor in Hart's greenhouse equation
pub const EARTH_CONVECTION_FACTOR: f64 = 0.43;

/// Spin-down of Earth's rotation by solar tides (rad/s per year)
pub const CHANGE_IN_EARTH_ANG_VEL: f64 = -1.3e-15;

/// Dole's rotation constant (cm² s⁻² g⁻¹)
pub const J: f64 = 1.46e-19;

// =============================================================================
// Thresholds
// =============================================================================

pub const FREEZING_POINT_OF_WATER: f64 = 273.15; // K

/// Escape to RMS velocity ratio a body needs to hold on to a gas
pub const GAS_RETENTION_THRESHOLD: f64 = 6.0;

/// Bodies below this many Earth masses with no air are asteroids
pub const ASTEROID_MASS_LIMIT: f64 = 0.001;

/// Lifetimes past this many years count as infinite
pub const GAS_LIFE_CEILING_YEARS: f64 = 2.0e10;

/// Gas mass fraction above which a body counts as having accreted gas
pub const ACCRETED_GAS_FRACTION: f64 = 1.0e-6;

// =============================================================================
// Clouds and albedo
// =============================================================================

/// Surface area covered by one kg of cloud (km²/kg)
pub const CLOUD_COVERAGE_FACTOR: f64 = 1.839e-8;

/// Cloud vapour growth with temperature (K⁻¹), Hart's Q₂
pub const Q2_36: f64 = 0.0698;

pub const ICE_ALBEDO: f64 = 0.7;
pub const CLOUD_ALBEDO: f64 = 0.52;
pub const GAS_GIANT_ALBEDO: f64 = 0.5;
pub const AIRLESS_ICE_ALBEDO: f64 = 0.5;
pub const GREENHOUSE_TRIGGER_ALBEDO: f64 = 0.20;
pub const ROCKY_ALBEDO: f64 = 0.15;
pub const ROCKY_AIRLESS_ALBEDO: f64 = 0.07;
pub const WATER_ALBEDO: f64 = 0.04;

// =============================================================================
// Iteration limits
// =============================================================================

/// Rounds of the surface temperature iteration after the seeding pass
pub const MAX_TEMPERATURE_ITERATIONS: usize = 26;

/// The surface temperature iteration stops once a round moves it less than this (K)
pub const TEMPERATURE_CONVERGENCE: f64 = 0.25;

/// Halvings and doublings allowed in the minimum molecular weight search
pub const MAX_WEIGHT_SEARCH_LOOPS: usize = 25;

// =============================================================================
// Moons
// =============================================================================

/// Protomoons lighter than this (Earth masses) are not turned into moons
pub const MIN_MOON_EARTH_MASSES: f64 = 1.0e-6;
