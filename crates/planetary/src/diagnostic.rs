use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Length, Pressure, Temperature};

/// Something unusual the pipeline noticed about a body.
///
/// Diagnostics never stop generation; they are attached to the planet so
/// callers can filter or report on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// No planet type rule matched; carries the inputs the rules looked at.
    #[serde(rename_all = "camelCase")]
    Unclassified {
        pressure: Pressure,
        hydrosphere: f64,
        ice_cover: f64,
        surface_temp: Temperature,
        max_temp: Temperature,
        boiling_point: Temperature,
        gas_fraction: f64,
    },
    /// The moon's Roche limit leaves no room inside its host's Hill sphere;
    /// the moon is given a zero orbit.
    #[serde(rename_all = "camelCase")]
    UnstableMoonOrbit {
        roche_limit: Length,
        hill_sphere: Length,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unclassified {
                pressure,
                hydrosphere,
                ice_cover,
                surface_temp,
                max_temp,
                boiling_point,
                gas_fraction,
            } => write!(
                f,
                "unclassified: p = {:.1} mb, water = {:.2}, ice = {:.2}, T = {:.1} K (max {:.1} K, boil {:.1} K), gas = {:.2e}",
                pressure.to_millibars(),
                hydrosphere,
                ice_cover,
                surface_temp.to_kelvin(),
                max_temp.to_kelvin(),
                boiling_point.to_kelvin(),
                gas_fraction
            ),
            Diagnostic::UnstableMoonOrbit {
                roche_limit,
                hill_sphere,
            } => write!(
                f,
                "no stable moon orbit: 1.5 × Roche limit {:.0} km is outside half the Hill sphere {:.0} km",
                1.5 * roche_limit.to_km(),
                hill_sphere.to_km() / 2.0
            ),
        }
    }
}
