use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Mass};

use super::Orbit;
use crate::constants::{B, DISK_ECCENTRICITY};

/// The parts of the host star a body's derived quantities depend on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarContext {
    pub mass: Mass,
    pub luminosity_ratio: f64,
}

impl From<&Star> for StellarContext {
    fn from(star: &Star) -> Self {
        Self {
            mass: star.mass,
            luminosity_ratio: star.luminosity_ratio(),
        }
    }
}

/// Orbit plus accreted dust and gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitingBody {
    pub orbit: Orbit,
    pub dust_mass: Mass,
    pub gas_mass: Mass,
}

impl OrbitingBody {
    pub fn new(orbit: Orbit, dust_mass: Mass, gas_mass: Mass) -> Self {
        Self {
            orbit,
            dust_mass,
            gas_mass,
        }
    }

    pub fn mass(&self) -> Mass {
        self.dust_mass + self.gas_mass
    }

    /// Dole's `(m / (M + m))^(1/4)`, the fraction of the orbit's
    /// neighbourhood the body's gravity reaches into.
    pub fn reduced_mass(&self, star_mass: Mass) -> f64 {
        let m = self.mass();
        (m / (star_mass + m)).powf(0.25)
    }

    /// Innermost distance at which the body sweeps dust
    pub fn inner_effect_limit(&self) -> Length {
        self.orbit.periapsis() / (1.0 + DISK_ECCENTRICITY)
    }

    /// Outermost distance at which the body sweeps dust
    pub fn outer_effect_limit(&self) -> Length {
        self.orbit.apoapsis() / (1.0 - DISK_ECCENTRICITY)
    }

    /// Mass above which the body starts pulling in gas as well as dust.
    ///
    /// `B · (periapsis · √L)^-0.75` solar masses: bodies closer to a brighter
    /// star need to be heavier before they hold on to gas.
    pub fn critical_mass(&self, luminosity_ratio: f64) -> Mass {
        let temp = self.orbit.periapsis().to_au() * luminosity_ratio.sqrt();
        Mass::from_solar_masses(B * temp.powf(-0.75))
    }
}

/// A body orbiting a known star.
///
/// Implementors only hand out their [`OrbitingBody`] and host; every derived
/// quantity the disk reads is provided here.
pub trait Planetoid {
    fn body(&self) -> &OrbitingBody;

    fn body_mut(&mut self) -> &mut OrbitingBody;

    fn host(&self) -> &StellarContext;

    fn orbit(&self) -> Orbit {
        self.body().orbit
    }

    fn mass(&self) -> Mass {
        self.body().mass()
    }

    fn reduced_mass(&self) -> f64 {
        self.body().reduced_mass(self.host().mass)
    }

    fn inner_effect_limit(&self) -> Length {
        self.body().inner_effect_limit()
    }

    fn outer_effect_limit(&self) -> Length {
        self.body().outer_effect_limit()
    }

    fn critical_mass(&self) -> Mass {
        self.body().critical_mass(self.host().luminosity_ratio)
    }

    /// Above its critical mass a body is a gas giant in the making and
    /// strips the gas from the lanes it sweeps.
    fn is_gas_giant(&self) -> bool {
        self.mass() > self.critical_mass()
    }
}
