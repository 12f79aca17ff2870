//! Planet types and the decision tree that assigns them.
//!
//! Gas giants are recognised early, from mass and retained gas alone; every
//! other body is classified once its climate is known.

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Mass, Pressure, Temperature};

use crate::constants::{ASTEROID_MASS_LIMIT, FREEZING_POINT_OF_WATER};
use crate::diagnostic::Diagnostic;
use crate::gas::{HELIUM, MOL_HYDROGEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetType {
    /// No rule matched; see the planet's diagnostics
    Unknown,
    /// Airless rock
    Rock,
    /// Hot enough to boil its oceans away
    Venusian,
    /// Some open water
    Terrestrial,
    /// Mostly rock with a thick hydrogen envelope
    SubSubGasGiant,
    /// Gas-rich, under 20 Earth masses
    SubGasGiant,
    GasGiant,
    /// Thin, dry atmosphere
    Martian,
    /// Ocean world, 95 % or more water
    Water,
    /// Frozen surface
    Ice,
    /// Airless body below 0.001 Earth masses
    Asteroids,
    /// One face to the star, or in a spin-orbit resonance
    TidallyLocked,
}

impl PlanetType {
    pub fn is_gas_giant(self) -> bool {
        matches!(
            self,
            PlanetType::SubSubGasGiant | PlanetType::SubGasGiant | PlanetType::GasGiant
        )
    }

    /// The gas giant type of a body, if it is one.
    ///
    /// A body heavier than Earth with over 5 % gas that keeps helium is a
    /// giant: sub-sub under 20 % gas, sub under 20 Earth masses, full
    /// otherwise.
    pub fn gas_giant(mass: Mass, gas_fraction: f64, min_molecular_weight: f64) -> Option<Self> {
        let earth_masses = mass.to_earth_masses();
        if earth_masses <= 1.0 || gas_fraction <= 0.05 || min_molecular_weight > HELIUM {
            return None;
        }

        Some(if gas_fraction < 0.20 {
            PlanetType::SubSubGasGiant
        } else if earth_masses < 20.0 {
            PlanetType::SubGasGiant
        } else {
            PlanetType::GasGiant
        })
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlanetType::Unknown => "Unknown",
            PlanetType::Rock => "Rock",
            PlanetType::Venusian => "Venusian",
            PlanetType::Terrestrial => "Terrestrial",
            PlanetType::SubSubGasGiant => "Gas Dwarf",
            PlanetType::SubGasGiant => "Sub Jovian",
            PlanetType::GasGiant => "Jovian",
            PlanetType::Martian => "Martian",
            PlanetType::Water => "Water",
            PlanetType::Ice => "Ice",
            PlanetType::Asteroids => "Asteroids",
            PlanetType::TidallyLocked => "Tidally Locked",
        };
        f.write_str(name)
    }
}

/// Everything the rocky-body decision tree looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationInputs {
    pub mass: Mass,
    pub is_moon: bool,
    pub pressure: Pressure,
    pub min_molecular_weight: f64,
    pub tidally_locked: bool,
    pub hydrosphere: f64,
    pub ice_cover: f64,
    pub surface_temp: Temperature,
    pub max_temp: Temperature,
    pub boiling_point: Temperature,
    pub gas_fraction: f64,
}

/// Outcome of classifying a rocky body
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub planet_type: PlanetType,
    /// Ice cover to record, which the ice world rule can force to 1
    pub ice_cover: f64,
    /// A body that turns out to hold hydrogen at high pressure loses its
    /// computed atmosphere
    pub clears_atmosphere: bool,
    pub diagnostic: Option<Diagnostic>,
}

/// Assigns a type to a body that failed the gas giant test.
///
/// The order of the checks matters: airless bodies first, then hydrogen
/// envelopes, then tidal locking, water and ice dominance, and the dry
/// fallbacks.
pub fn classify_rocky(inputs: &ClassificationInputs) -> Classification {
    let settled = |planet_type| Classification {
        planet_type,
        ice_cover: inputs.ice_cover,
        clears_atmosphere: false,
        diagnostic: None,
    };

    let pressure_mb = inputs.pressure.to_millibars();

    if pressure_mb < 1.0 {
        return if !inputs.is_moon && inputs.mass.to_earth_masses() < ASTEROID_MASS_LIMIT {
            settled(PlanetType::Asteroids)
        } else {
            settled(PlanetType::Rock)
        };
    }

    if pressure_mb > 6000.0 && inputs.min_molecular_weight <= MOL_HYDROGEN {
        return Classification {
            clears_atmosphere: true,
            ..settled(PlanetType::SubSubGasGiant)
        };
    }

    if inputs.tidally_locked {
        return settled(PlanetType::TidallyLocked);
    }
    if inputs.hydrosphere >= 0.95 {
        return settled(PlanetType::Water);
    }
    if inputs.ice_cover >= 0.95 {
        return settled(PlanetType::Ice);
    }
    if inputs.hydrosphere > 0.05 {
        return settled(PlanetType::Terrestrial);
    }
    if inputs.max_temp > inputs.boiling_point {
        return settled(PlanetType::Venusian);
    }
    if inputs.gas_fraction > 0.0001 {
        return Classification {
            ice_cover: 1.0,
            ..settled(PlanetType::Ice)
        };
    }
    if pressure_mb <= 250.0 {
        return settled(PlanetType::Martian);
    }
    if inputs.surface_temp.to_kelvin() < FREEZING_POINT_OF_WATER {
        return settled(PlanetType::Ice);
    }

    Classification {
        diagnostic: Some(Diagnostic::Unclassified {
            pressure: inputs.pressure,
            hydrosphere: inputs.hydrosphere,
            ice_cover: inputs.ice_cover,
            surface_temp: inputs.surface_temp,
            max_temp: inputs.max_temp,
            boiling_point: inputs.boiling_point,
            gas_fraction: inputs.gas_fraction,
        }),
        ..settled(PlanetType::Unknown)
    }
}
