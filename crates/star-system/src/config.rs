//! Top-level switches for system generation.
//!
//! [`GenerationConfig`] is the one struct callers fill in (or deserialize);
//! it is split into the narrower option structs the accretion and planet
//! stages take.

use planetary::{PlanetOptions, RocheFormula};
use protodisk::AccretionConfig;
use protodisk::constants::MAX_SEQUENTIAL_FAILURES;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    /// Work out atmospheric composition
    pub do_gases: bool,
    /// Capture and derive moons
    pub do_moons: bool,
    /// Random axial tilts instead of upright spin axes
    pub random_tilt: bool,
    /// Seeds in a row that may miss all dust before accretion stops
    pub max_sequential_failures: usize,
    pub roche_formula: RocheFormula,
    /// Upper bound for moon eccentricities, in `[0, 1)`
    pub moon_eccentricity_max: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let planet = PlanetOptions::default();
        Self {
            do_gases: planet.do_gases,
            do_moons: planet.do_moons,
            random_tilt: planet.random_tilt,
            max_sequential_failures: MAX_SEQUENTIAL_FAILURES,
            roche_formula: planet.roche_formula,
            moon_eccentricity_max: planet.moon_eccentricity_max,
        }
    }
}

impl GenerationConfig {
    pub fn without_moons(self) -> Self {
        Self {
            do_moons: false,
            ..self
        }
    }

    pub fn without_gases(self) -> Self {
        Self {
            do_gases: false,
            ..self
        }
    }

    pub fn with_random_tilt(self) -> Self {
        Self {
            random_tilt: true,
            ..self
        }
    }

    /// Rejects tunables the generators cannot work with.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_sequential_failures == 0 {
            return Err(GenerationError::InvalidConfig(
                "maxSequentialFailures must be at least 1".to_string(),
            ));
        }
        let e = self.moon_eccentricity_max;
        if !e.is_finite() || !(0.0..1.0).contains(&e) {
            return Err(GenerationError::InvalidConfig(format!(
                "moonEccentricityMax must lie in [0, 1) (got {e})"
            )));
        }
        Ok(())
    }

    pub fn accretion(&self) -> AccretionConfig {
        AccretionConfig {
            max_sequential_failures: self.max_sequential_failures,
            capture_moons: self.do_moons,
        }
    }

    pub fn planet_options(&self) -> PlanetOptions {
        PlanetOptions {
            do_gases: self.do_gases,
            do_moons: self.do_moons,
            random_tilt: self.random_tilt,
            roche_formula: self.roche_formula,
            moon_eccentricity_max: self.moon_eccentricity_max,
        }
    }
}
