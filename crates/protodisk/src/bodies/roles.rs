use serde::{Deserialize, Serialize};
use units::Mass;

use super::{Orbit, OrbitingBody, Planetoid, StellarContext};

/// A seed injected into the disk; transient until it merges, is captured,
/// or becomes a [`Protoplanet`].
#[derive(Debug, Clone, PartialEq)]
pub struct Planetesimal {
    pub body: OrbitingBody,
    pub host: StellarContext,
}

impl Planetesimal {
    pub fn new(body: OrbitingBody, host: StellarContext) -> Self {
        Self { body, host }
    }

    pub fn into_protoplanet(self) -> Protoplanet {
        Protoplanet {
            body: self.body,
            host: self.host,
            moons: Vec::new(),
        }
    }

    /// Drops the orbit; a captured moon is placed once its host is built.
    pub fn into_protomoon(self) -> Protomoon {
        Protomoon {
            dust_mass: self.body.dust_mass,
            gas_mass: self.body.gas_mass,
        }
    }
}

impl Planetoid for Planetesimal {
    fn body(&self) -> &OrbitingBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut OrbitingBody {
        &mut self.body
    }

    fn host(&self) -> &StellarContext {
        &self.host
    }
}

/// A body that survived accretion, with any moons it captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protoplanet {
    pub body: OrbitingBody,
    pub host: StellarContext,
    pub moons: Vec<Protomoon>,
}

impl Protoplanet {
    pub fn new(body: OrbitingBody, host: StellarContext) -> Self {
        Self {
            body,
            host,
            moons: Vec::new(),
        }
    }

    pub fn add_moon(&mut self, moon: Protomoon) {
        self.moons.push(moon);
    }

    pub fn mass_of_moons(&self) -> Mass {
        self.moons.iter().map(Protomoon::mass).sum()
    }
}

impl Planetoid for Protoplanet {
    fn body(&self) -> &OrbitingBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut OrbitingBody {
        &mut self.body
    }

    fn host(&self) -> &StellarContext {
        &self.host
    }
}

/// A captured seed waiting for its host to be built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protomoon {
    pub dust_mass: Mass,
    pub gas_mass: Mass,
}

impl Protomoon {
    pub fn mass(&self) -> Mass {
        self.dust_mass + self.gas_mass
    }

    /// Treats the moon as a moonless protoplanet sharing its host's orbit, so
    /// the planet pipeline can derive its physical properties.
    pub fn at_host_orbit(&self, orbit: Orbit, host: StellarContext) -> Protoplanet {
        Protoplanet::new(OrbitingBody::new(orbit, self.dust_mass, self.gas_mass), host)
    }
}
