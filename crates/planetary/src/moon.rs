//! Where a captured moon ends up around its host
//!
//! A moon needs room between the host's Roche limit, inside which tides
//! would tear it apart, and the edge of the host's Hill sphere, beyond
//! which the star would pull it away. Moons are placed between 1.5 Roche
//! limits and half the Hill radius.

use rand::Rng;
use serde::{Deserialize, Serialize};
use units::{Density, Length, Mass};

use protodisk::Orbit;

use crate::diagnostic::Diagnostic;

/// Which Roche limit to use for the inner edge of the moon zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RocheFormula {
    /// `R · (2ρ_p/ρ_m)^(1/3)`
    #[default]
    Doubled,
    /// Rigid-body limit, `2.44 · R · (ρ_p/ρ_m)^(1/3)`
    Classical,
}

pub fn roche_limit(
    host_radius: Length,
    host_density: Density,
    moon_density: Density,
    formula: RocheFormula,
) -> Length {
    let ratio = host_density / moon_density;
    match formula {
        RocheFormula::Doubled => host_radius * (2.0 * ratio).cbrt(),
        RocheFormula::Classical => host_radius * (2.44 * ratio.cbrt()),
    }
}

/// Hill radius `a · (m / 3M)^(1/3)` of a host orbiting at `a`.
pub fn hill_sphere(a: Length, host_mass: Mass, star_mass: Mass) -> Length {
    a * (host_mass / (star_mass * 3.0)).cbrt()
}

/// A random orbit between 1.5 Roche limits and half the Hill radius, with
/// eccentricity up to `max_eccentricity`.
///
/// When that band is empty the moon has nowhere stable to go and the
/// reason is returned instead.
pub fn place_moon(
    roche_limit: Length,
    hill_sphere: Length,
    max_eccentricity: f64,
    rng: &mut impl Rng,
) -> Result<Orbit, Diagnostic> {
    let inner = (roche_limit * 1.5).to_km();
    let outer = (hill_sphere / 2.0).to_km();

    if inner >= outer {
        return Err(Diagnostic::UnstableMoonOrbit {
            roche_limit,
            hill_sphere,
        });
    }

    let a = Length::from_km(rng.random_range(inner..=outer));
    let e = rng.random_range(0.0..=max_eccentricity);
    Ok(Orbit::new(a, e))
}
