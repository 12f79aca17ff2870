//! Atmospheric composition and breathability
//!
//! Each gas in the table is kept if it stays gaseous at the body's night-side
//! temperature and is heavy enough not to have escaped. Its share then decays
//! with the star's age: fast molecules leak away, reactive ones get locked
//! into the crust. The surviving amounts are normalised to the surface
//! pressure.
//!
//! # References
//! - Dole, S. H. (1964) "Habitable Planets for Man", pp. 14-18
//! - Burdick, J. StarGen `calculate_gases`

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Pressure, Time};

use crate::gas::{Gas, H2O_ASSUMED_PRESSURE_MMHG, MAX_O2_IPP_MMHG, MIN_O2_IPP_MMHG};
use crate::physics::rms_velocity;
use crate::planet::{BulkProperties, SurfaceConditions};

/// One gas and its share of the surface pressure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphericGas {
    pub gas: Gas,
    pub partial_pressure: Pressure,
}

/// Composition of the atmosphere over `surface`, most abundant gas first.
///
/// `None` for airless bodies and for bodies where every gas has frozen out,
/// escaped or reacted away.
pub fn calculate_gases(
    bulk: &BulkProperties,
    surface: &SurfaceConditions,
    stellar_age: Time,
) -> Option<Vec<AtmosphericGas>> {
    if surface.pressure.to_millibars() <= 0.0 {
        return None;
    }

    let bars = surface.pressure.to_bars();
    let amounts: Vec<(Gas, f64)> = Gas::ALL
        .into_iter()
        .filter_map(|gas| {
            let amount = gas_amount(gas, bulk, surface, bars, stellar_age);
            (amount > 0.0).then_some((gas, amount))
        })
        .collect();

    let total: f64 = amounts.iter().map(|(_, amount)| amount).sum();
    if amounts.is_empty() || total <= 0.0 {
        return None;
    }

    let mut gases: Vec<AtmosphericGas> = amounts
        .into_iter()
        .map(|(gas, amount)| AtmosphericGas {
            gas,
            partial_pressure: surface.pressure * (amount / total),
        })
        .collect();
    gases.sort_by(|a, b| {
        b.partial_pressure
            .to_millibars()
            .total_cmp(&a.partial_pressure.to_millibars())
    });

    Some(gases)
}

/// Unnormalised amount of `gas`; zero if it is excluded.
fn gas_amount(
    gas: Gas,
    bulk: &BulkProperties,
    surface: &SurfaceConditions,
    bars: f64,
    stellar_age: Time,
) -> f64 {
    let props = gas.properties();

    // Boiling point of the gas shifted to the surface pressure
    let yp = props.boil / (373.0 * ((bars + 0.001).ln() / -5050.5 + 1.0 / 373.0));
    let condensed = !(yp >= 0.0 && yp < surface.low_temp.to_kelvin());
    if condensed || props.weight < bulk.min_molecular_weight {
        return 0.0;
    }

    let age_gyr = stellar_age.to_gyr();
    let v_rms = rms_velocity(props.weight, bulk.exospheric_temp);
    let retained = (1.0 / (1.0 + v_rms / bulk.escape_velocity)).powf(age_gyr);
    let decay = 1.0 / (1.0 + props.reactivity);

    let temperate = age_gyr > 2.0
        && surface.surface_temp.to_kelvin() > 270.0
        && surface.surface_temp.to_kelvin() < 400.0;

    let mut abundance = props.abunds;
    let reactivity = match gas {
        Gas::Argon => 0.15 * age_gyr / 4.0,
        Gas::Helium => {
            abundance *= 0.001 + bulk.gas_fraction();
            decay.powf(age_gyr / 2.0 * (0.75 + bars))
        }
        Gas::Oxygen if temperate => decay.powf((age_gyr / 2.0).powf(0.25) * (0.89 + bars / 4.0)),
        Gas::CarbonDioxide if temperate => {
            decay.powf((age_gyr / 2.0).sqrt() * (0.75 + bars)) * 1.5
        }
        _ => decay.powf(age_gyr / 2.0 * (0.75 + bars)),
    };

    let fraction = 1.0 - bulk.min_molecular_weight / props.weight;

    abundance * retained * reactivity * fraction
}

/// Partial pressure of a gas as inhaled, after the airways have humidified
/// the air (Dole p. 14).
pub fn inspired_partial_pressure(surface_pressure: Pressure, gas_pressure: Pressure) -> Pressure {
    let water = Pressure::from_mmhg(H2O_ASSUMED_PRESSURE_MMHG);
    let fraction = gas_pressure / surface_pressure;
    Pressure::from_millibars((surface_pressure.to_millibars() - water.to_millibars()) * fraction)
}

/// Whether a human could breathe an atmosphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Breathability {
    /// No atmosphere at all
    None,
    Breathable,
    /// Harmless, but too little or too much oxygen
    Unbreathable,
    /// Some gas is above its toxic limit
    Poisonous,
}

impl fmt::Display for Breathability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            Breathability::None => "none",
            Breathability::Breathable => "breathable",
            Breathability::Unbreathable => "unbreathable",
            Breathability::Poisonous => "poisonous",
        };
        f.write_str(phrase)
    }
}

/// Dole's breathability test (pp. 15-18): any gas above its maximum
/// inspired partial pressure poisons the air; otherwise it is breathable
/// when the inspired oxygen falls within the 72-400 mmHg window.
pub fn breathability(gases: &[AtmosphericGas], surface_pressure: Pressure) -> Breathability {
    if gases.is_empty() {
        return Breathability::None;
    }

    let mut oxygen_ok = false;
    for entry in gases {
        let ipp = inspired_partial_pressure(surface_pressure, entry.partial_pressure);

        if let Some(limit) = entry.gas.max_inspired_pressure() {
            if ipp > limit {
                return Breathability::Poisonous;
            }
        }

        if entry.gas == Gas::Oxygen {
            let mmhg = ipp.to_mmhg();
            oxygen_ok = (MIN_O2_IPP_MMHG..=MAX_O2_IPP_MMHG).contains(&mmhg);
        }
    }

    if oxygen_ok {
        Breathability::Breathable
    } else {
        Breathability::Unbreathable
    }
}
