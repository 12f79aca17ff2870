//! The planet record, assembled from the results of each pipeline stage.
//!
//! Each stage of [`crate::generation::generate_planet`] produces one of the
//! structs below; later stages read the earlier ones, and [`Planet`] holds
//! them side by side once the body is fully described.

use serde::{Deserialize, Serialize};
use units::{Acceleration, Density, Length, Mass, Pressure, Temperature, Time, Velocity};

use protodisk::Orbit;

use crate::atmosphere::{AtmosphericGas, Breathability, breathability};
use crate::diagnostic::Diagnostic;
use crate::physics::OrbitalZone;
use crate::planet_type::PlanetType;

/// Where the body is and how it moves around its star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalProfile {
    pub orbit: Orbit,
    pub zone: OrbitalZone,
    /// Orbital period about the star (for moons, the host's)
    pub period: Time,
    /// Axial tilt in degrees
    pub axial_tilt: f64,
}

/// Mass, size and the quantities that follow from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkProperties {
    pub dust_mass: Mass,
    pub gas_mass: Mass,
    pub mass: Mass,
    /// Radius of the rocky core alone
    pub core_radius: Length,
    pub radius: Length,
    pub density: Density,
    pub surface_accel: Acceleration,
    pub escape_velocity: Velocity,
    /// RMS speed of N₂ in the exosphere
    pub rms_velocity: Velocity,
    pub exospheric_temp: Temperature,
    /// Lightest molecule (g/mol) retained over the star's age
    pub min_molecular_weight: f64,
}

impl BulkProperties {
    pub fn gas_fraction(&self) -> f64 {
        self.gas_mass / self.mass
    }

    /// Surface gravity in Earth gravities
    pub fn surface_gravity(&self) -> f64 {
        self.surface_accel.to_earth_gravities()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub day: Time,
    /// Locked into a spin-orbit resonance rather than synchronously
    pub resonant: bool,
}

impl Rotation {
    /// Whether one face stays towards the star: the day matches `year` to
    /// the whole hour, or the body is in resonance.
    pub fn is_locked_to(&self, year: Time) -> bool {
        self.resonant || self.day.to_hours() as i64 == year.to_hours() as i64
    }
}

/// Surface and climate, as left by the temperature iteration.
///
/// Gas giants have no surface; their pressure, boiling point and surface
/// temperature are infinite and only the estimated temperatures are
/// meaningful. Infinite values serialize as `"Infinity"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceConditions {
    #[serde(with = "units::non_finite")]
    pub volatile_gas_inventory: f64,
    pub pressure: Pressure,
    pub greenhouse_effect: bool,
    pub boiling_point: Temperature,
    pub albedo: f64,
    pub surface_temp: Temperature,
    pub high_temp: Temperature,
    pub low_temp: Temperature,
    pub max_temp: Temperature,
    pub min_temp: Temperature,
    pub greenhouse_rise: Temperature,
    pub hydrosphere: f64,
    pub cloud_cover: f64,
    pub ice_cover: f64,
    /// Mean temperature at the body's own albedo, no greenhouse
    pub estimated_temp: Temperature,
    /// Mean temperature an Earth-albedo surface would have at this orbit
    pub estimated_terrestrial_temp: Temperature,
}

impl SurfaceConditions {
    /// Placeholder values for a body without a solid surface.
    pub fn gas_giant(albedo: f64, estimated_temp: Temperature, estimated_terrestrial_temp: Temperature) -> Self {
        Self {
            volatile_gas_inventory: f64::INFINITY,
            pressure: Pressure::infinite(),
            greenhouse_effect: false,
            boiling_point: Temperature::infinite(),
            albedo,
            surface_temp: Temperature::infinite(),
            high_temp: Temperature::zero(),
            low_temp: Temperature::zero(),
            max_temp: Temperature::zero(),
            min_temp: Temperature::zero(),
            greenhouse_rise: Temperature::zero(),
            hydrosphere: 1.0,
            cloud_cover: 1.0,
            ice_cover: 0.0,
            estimated_temp,
            estimated_terrestrial_temp,
        }
    }
}

/// A fully derived planet or moon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub orbit: OrbitalProfile,
    pub bulk: BulkProperties,
    pub rotation: Rotation,
    pub surface: SurfaceConditions,
    /// Gases and their partial pressures, most abundant first
    pub atmosphere: Option<Vec<AtmosphericGas>>,
    pub planet_type: PlanetType,
    pub is_moon: bool,
    pub moons: Vec<Planet>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Planet {
    pub fn mass(&self) -> Mass {
        self.bulk.mass
    }

    pub fn radius(&self) -> Length {
        self.bulk.radius
    }

    pub fn semi_major_axis(&self) -> Length {
        self.orbit.orbit.semi_major_axis
    }

    pub fn is_gas_giant(&self) -> bool {
        self.planet_type.is_gas_giant()
    }

    pub fn is_tidally_locked(&self) -> bool {
        self.rotation.is_locked_to(self.orbit.period)
    }

    pub fn breathability(&self) -> Breathability {
        match &self.atmosphere {
            Some(gases) => breathability(gases, self.surface.pressure),
            None => Breathability::None,
        }
    }

    pub fn has_unstable_orbit(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::UnstableMoonOrbit { .. }))
    }
}
