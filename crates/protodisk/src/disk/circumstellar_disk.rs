use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Mass};

use super::dust_lane::{DustLane, repartition};
use crate::bodies::{Planetoid, StellarContext};
use crate::constants::{
    ACCRETION_CONVERGENCE, ALPHA, DUST_DENSITY_COEFF, GAS_DUST_RATIO, N, PLANET_INNER_BOUND_AU,
    PLANET_OUTER_BOUND_AU,
};

/// Dust and gas left around a star, as a sorted partition of lanes.
///
/// Only the accretion loop mutates a disk; once a lane loses its dust it
/// never gets it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircumstellarDisk {
    star: StellarContext,
    lanes: Vec<DustLane>,
}

impl CircumstellarDisk {
    /// A full disk from the star out to its dust limit.
    pub fn new(star: &Star) -> Self {
        Self::with_dust_bounds(star, Length::zero(), star.stellar_dust_limit())
    }

    /// A disk whose initial dust and gas span `[inner, outer]`.
    pub fn with_dust_bounds(star: &Star, inner: Length, outer: Length) -> Self {
        Self {
            star: StellarContext::from(star),
            lanes: vec![DustLane::new(inner, outer, true, true)],
        }
    }

    pub fn star(&self) -> &StellarContext {
        &self.star
    }

    pub fn lanes(&self) -> &[DustLane] {
        &self.lanes
    }

    /// Innermost orbit a seed may be injected at, `0.3 · M^(1/3)` AU
    pub fn planet_inner_bound(&self) -> Length {
        Length::from_au(PLANET_INNER_BOUND_AU * self.star.mass.to_solar_masses().cbrt())
    }

    /// Outermost orbit a seed may be injected at, `50 · M^(1/3)` AU
    pub fn planet_outer_bound(&self) -> Length {
        Length::from_au(PLANET_OUTER_BOUND_AU * self.star.mass.to_solar_masses().cbrt())
    }

    /// Dust density at distance `a`, in M☉/AU³.
    pub fn dust_density(&self, a: Length) -> f64 {
        DUST_DENSITY_COEFF
            * self.star.mass.sqrt()
            * (-ALPHA * a.to_au().powf(1.0 / N)).exp()
    }

    /// True while any lane still holds dust.
    pub fn dust_left(&self) -> bool {
        self.lanes.iter().any(|lane| lane.dust_present)
    }

    /// True if some dusty lane overlaps `[inner, outer)`.
    pub fn dust_available(&self, inner: Length, outer: Length) -> bool {
        self.lanes
            .iter()
            .any(|lane| lane.dust_present && lane.overlaps(inner, outer))
    }

    /// Dust and gas a body would hold after sweeping its effect limits once.
    ///
    /// The result is the body's new total, not an increment.
    pub fn collect_dust(&self, body: &impl Planetoid) -> (Mass, Mass) {
        let inner = body.inner_effect_limit();
        let outer = body.outer_effect_limit();
        let orbit = body.orbit();
        let a = orbit.semi_major_axis.to_au();
        let reduced_mass = body.reduced_mass();
        let mass = body.mass();
        let critical_mass = body.critical_mass();
        let bandwidth = (outer - inner).to_au();

        let mut dust = 0.0;
        let mut gas = 0.0;

        for lane in self.lanes.iter().filter(|lane| lane.overlaps(inner, outer)) {
            if !lane.dust_present {
                continue;
            }

            let dust_density = self.dust_density(orbit.semi_major_axis);
            let gas_density = if mass < critical_mass || !lane.gas_present {
                0.0
            } else {
                (GAS_DUST_RATIO - 1.0) * dust_density
                    / (1.0 + (critical_mass / mass).sqrt() * (GAS_DUST_RATIO - 1.0))
            };

            let width = (lane.outer.min(outer) - lane.inner.max(inner)).to_au();
            let temp1 = (outer - lane.outer).to_au().max(0.0);
            let temp2 = (lane.inner - inner).to_au().max(0.0);

            let swept = 4.0 * PI * a * a * reduced_mass
                * (1.0 - orbit.eccentricity * (temp1 - temp2) / bandwidth);
            let volume = swept * width;

            dust += volume * dust_density;
            gas += volume * gas_density;
        }

        (Mass::from_solar_masses(dust), Mass::from_solar_masses(gas))
    }

    /// Clears the lanes swept by `body`.
    pub fn update_dust_lanes(&mut self, body: &impl Planetoid) {
        self.lanes = repartition(
            &self.lanes,
            body.inner_effect_limit(),
            body.outer_effect_limit(),
            body.is_gas_giant(),
        );
    }

    /// Grows `body` until a pass adds less than 0.01 % of its mass, then
    /// clears the lanes it swept.
    ///
    /// Each pass replaces the body's dust and gas with the collected totals.
    /// A pass that would leave the body lighter than it already is leaves it
    /// untouched, so a seed with no dust in reach keeps its seed mass and a
    /// host re-sweeping an already cleared zone keeps what it has.
    pub fn accrete_dust(&mut self, body: &mut impl Planetoid) {
        let mut last_mass = body.mass();

        loop {
            let (dust, gas) = self.collect_dust(body);
            if dust + gas >= body.mass() {
                let swept = body.body_mut();
                swept.dust_mass = dust;
                swept.gas_mass = gas;
            }

            let growth = body.mass() - last_mass;
            debug!(
                "accretion pass at {:.3} AU: {} (+{:.4}%)",
                body.orbit().semi_major_axis.to_au(),
                body.mass(),
                100.0 * (growth / last_mass)
            );

            // Negated so a NaN growth also stops the loop.
            if !(growth.to_solar_masses() >= ACCRETION_CONVERGENCE * last_mass.to_solar_masses()) {
                break;
            }
            last_mass = body.mass();
        }

        debug!("accretion halted at {}", body.mass());
        self.update_dust_lanes(body);
    }
}
