//! Gases an atmosphere can hold, with the properties the composition model reads.
//!
//! Values follow the StarGen gas table. Abundances are relative solar
//! (`abunds`) and terrestrial (`abunde`) values; reactivity feeds the
//! per-gas decay in [`crate::atmosphere`].

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Pressure, Temperature};

/// Weight of atomic hydrogen (g/mol), the lightest thing a body can retain
pub const ATOMIC_HYDROGEN: f64 = 1.0;
pub const MOL_HYDROGEN: f64 = 2.0;
pub const HELIUM: f64 = 4.0;
pub const WATER_VAPOR: f64 = 18.0;
pub const MOL_NITROGEN: f64 = 28.0;

/// Inspired oxygen pressure window a human can breathe (mmHg)
pub const MIN_O2_IPP_MMHG: f64 = 72.0;
pub const MAX_O2_IPP_MMHG: f64 = 400.0;

/// Water vapour pressure in the airways (mmHg), Dole p. 15
pub const H2O_ASSUMED_PRESSURE_MMHG: f64 = 47.0;

/// A gas in the composition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gas {
    Hydrogen,
    Helium,
    Nitrogen,
    Oxygen,
    Neon,
    Argon,
    Krypton,
    Xenon,
    Ammonia,
    Water,
    CarbonDioxide,
    Ozone,
    Methane,
}

/// Physical properties of one [`Gas`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Molecular weight (g/mol)
    pub weight: f64,
    /// Melting point (K)
    pub melt: f64,
    /// Boiling point at 1 bar (K)
    pub boil: f64,
    /// Density (g/cm³)
    pub density: f64,
    pub abunde: f64,
    pub abunds: f64,
    pub reactivity: f64,
    /// Highest inspired partial pressure a human tolerates (mb); `None` when
    /// the gas has no toxic limit
    pub max_ipp: Option<f64>,
}

/// Parts per million of an Earth atmosphere, in millibars
const fn ppm(value: f64) -> f64 {
    value * 1013.25 / 1.0e6
}

const fn mmhg(value: f64) -> f64 {
    value * 1.33322
}

impl Gas {
    /// Every gas, in table order
    pub const ALL: [Gas; 13] = [
        Gas::Hydrogen,
        Gas::Helium,
        Gas::Nitrogen,
        Gas::Oxygen,
        Gas::Neon,
        Gas::Argon,
        Gas::Krypton,
        Gas::Xenon,
        Gas::Ammonia,
        Gas::Water,
        Gas::CarbonDioxide,
        Gas::Ozone,
        Gas::Methane,
    ];

    pub fn properties(self) -> &'static GasProperties {
        match self {
            Gas::Hydrogen => &HYDROGEN,
            Gas::Helium => &HELIUM_GAS,
            Gas::Nitrogen => &NITROGEN,
            Gas::Oxygen => &OXYGEN,
            Gas::Neon => &NEON,
            Gas::Argon => &ARGON,
            Gas::Krypton => &KRYPTON,
            Gas::Xenon => &XENON,
            Gas::Ammonia => &AMMONIA,
            Gas::Water => &WATER,
            Gas::CarbonDioxide => &CARBON_DIOXIDE,
            Gas::Ozone => &OZONE,
            Gas::Methane => &METHANE,
        }
    }

    pub fn symbol(self) -> &'static str {
        self.properties().symbol
    }

    pub fn weight(self) -> f64 {
        self.properties().weight
    }

    pub fn boiling_point(self) -> Temperature {
        Temperature::from_kelvin(self.properties().boil)
    }

    /// Toxic limit on the inspired partial pressure; `None` never limits.
    pub fn max_inspired_pressure(self) -> Option<Pressure> {
        self.properties().max_ipp.map(Pressure::from_millibars)
    }

    pub fn from_symbol(symbol: &str) -> Option<Gas> {
        Gas::ALL.into_iter().find(|gas| gas.symbol() == symbol)
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.properties().name)
    }
}

const HYDROGEN: GasProperties = GasProperties {
    symbol: "H",
    name: "Hydrogen",
    weight: 1.0079,
    melt: 14.06,
    boil: 20.40,
    density: 8.99e-05,
    abunde: 0.00125893,
    abunds: 27925.4,
    reactivity: 1.0,
    max_ipp: None,
};

const HELIUM_GAS: GasProperties = GasProperties {
    symbol: "He",
    name: "Helium",
    weight: 4.0026,
    melt: 3.46,
    boil: 4.20,
    density: 0.0001787,
    abunde: 7.94328e-09,
    abunds: 2722.7,
    reactivity: 0.0,
    max_ipp: Some(mmhg(61000.0)),
};

const NITROGEN: GasProperties = GasProperties {
    symbol: "N",
    name: "Nitrogen",
    weight: 14.0067,
    melt: 63.34,
    boil: 77.40,
    density: 0.0012506,
    abunde: 1.99526e-05,
    abunds: 3.13329,
    reactivity: 0.0,
    max_ipp: Some(mmhg(2330.0)),
};

const OXYGEN: GasProperties = GasProperties {
    symbol: "O",
    name: "Oxygen",
    weight: 15.9994,
    melt: 54.80,
    boil: 90.20,
    density: 0.001429,
    abunde: 0.501187,
    abunds: 23.8232,
    reactivity: 10.0,
    max_ipp: Some(mmhg(MAX_O2_IPP_MMHG)),
};

const NEON: GasProperties = GasProperties {
    symbol: "Ne",
    name: "Neon",
    weight: 20.1700,
    melt: 24.53,
    boil: 27.10,
    density: 0.0009,
    abunde: 5.01187e-09,
    abunds: 3.4435e-5,
    reactivity: 0.0,
    max_ipp: Some(mmhg(3900.0)),
};

const ARGON: GasProperties = GasProperties {
    symbol: "Ar",
    name: "Argon",
    weight: 39.9480,
    melt: 84.00,
    boil: 87.30,
    density: 0.0017824,
    abunde: 3.16228e-06,
    abunds: 0.100925,
    reactivity: 0.0,
    max_ipp: Some(mmhg(1220.0)),
};

const KRYPTON: GasProperties = GasProperties {
    symbol: "Kr",
    name: "Krypton",
    weight: 83.8000,
    melt: 116.60,
    boil: 119.70,
    density: 0.003708,
    abunde: 1e-10,
    abunds: 4.4978e-05,
    reactivity: 0.0,
    max_ipp: Some(mmhg(350.0)),
};

const XENON: GasProperties = GasProperties {
    symbol: "Xe",
    name: "Xenon",
    weight: 131.3000,
    melt: 161.30,
    boil: 165.00,
    density: 0.00588,
    abunde: 3.16228e-11,
    abunds: 4.69894e-06,
    reactivity: 0.0,
    max_ipp: Some(mmhg(160.0)),
};

const AMMONIA: GasProperties = GasProperties {
    symbol: "NH3",
    name: "Ammonia",
    weight: 17.0000,
    melt: 195.46,
    boil: 239.66,
    density: 0.001,
    abunde: 0.002,
    abunds: 0.0001,
    reactivity: 1.0,
    max_ipp: Some(ppm(100.0)),
};

const WATER: GasProperties = GasProperties {
    symbol: "H2O",
    name: "Water",
    weight: 18.0000,
    melt: 273.16,
    boil: 373.16,
    density: 1.000,
    abunde: 0.03,
    abunds: 0.001,
    reactivity: 0.0,
    max_ipp: None,
};

const CARBON_DIOXIDE: GasProperties = GasProperties {
    symbol: "CO2",
    name: "Carbon Dioxide",
    weight: 44.0000,
    melt: 194.66,
    boil: 194.66,
    density: 0.001,
    abunde: 0.01,
    abunds: 0.0005,
    reactivity: 0.0,
    max_ipp: Some(mmhg(7.0)),
};

const OZONE: GasProperties = GasProperties {
    symbol: "O3",
    name: "Ozone",
    weight: 48.0000,
    melt: 80.16,
    boil: 161.16,
    density: 0.001,
    abunde: 0.001,
    abunds: 0.000001,
    reactivity: 2.0,
    max_ipp: Some(ppm(0.1)),
};

const METHANE: GasProperties = GasProperties {
    symbol: "CH4",
    name: "Methane",
    weight: 16.0000,
    melt: 90.16,
    boil: 109.16,
    density: 0.010,
    abunde: 0.005,
    abunds: 0.0001,
    reactivity: 1.0,
    max_ipp: Some(ppm(50000.0)),
};
