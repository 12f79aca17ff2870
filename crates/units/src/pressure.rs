use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul};

const MILLIBARS_PER_BAR: f64 = 1000.0;
const MILLIBARS_PER_ATM: f64 = 1013.25;
const MILLIBARS_PER_MMHG: f64 = 1.33322;
const DYN_PER_CM2_PER_MILLIBAR: f64 = 1000.0;

/// A pressure with millibars as the base unit.
///
/// Planet classification thresholds (1 mb, 250 mb, 6000 mb) are quoted in
/// millibars, the boiling-point relation in bars and the inventory formula
/// in atmospheres, so all three are first class here.
///
/// ```rust
/// use units::Pressure;
///
/// let sea_level = Pressure::from_atm(1.0);
/// assert!((sea_level.to_millibars() - 1013.25).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pressure(#[serde(with = "crate::non_finite")] f64); // Base unit: millibars

impl Pressure {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Placeholder for bodies without a solid surface.
    pub fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub fn from_millibars(value: f64) -> Self {
        Self(value)
    }

    pub fn from_bars(value: f64) -> Self {
        Self(value * MILLIBARS_PER_BAR)
    }

    pub fn from_atm(value: f64) -> Self {
        Self(value * MILLIBARS_PER_ATM)
    }

    pub fn from_mmhg(value: f64) -> Self {
        Self(value * MILLIBARS_PER_MMHG)
    }

    pub fn from_dyn_per_cm2(value: f64) -> Self {
        Self(value / DYN_PER_CM2_PER_MILLIBAR)
    }

    pub fn to_millibars(&self) -> f64 {
        self.0
    }

    pub fn to_bars(&self) -> f64 {
        self.0 / MILLIBARS_PER_BAR
    }

    pub fn to_atm(&self) -> f64 {
        self.0 / MILLIBARS_PER_ATM
    }

    pub fn to_mmhg(&self) -> f64 {
        self.0 / MILLIBARS_PER_MMHG
    }

    pub fn to_dyn_per_cm2(&self) -> f64 {
        self.0 * DYN_PER_CM2_PER_MILLIBAR
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Pressure {
    type Output = Pressure;

    fn add(self, rhs: Pressure) -> Pressure {
        Pressure(self.0 + rhs.0)
    }
}

impl Mul<f64> for Pressure {
    type Output = Pressure;

    fn mul(self, rhs: f64) -> Pressure {
        Pressure(self.0 * rhs)
    }
}

impl Div<f64> for Pressure {
    type Output = Pressure;

    fn div(self, rhs: f64) -> Pressure {
        Pressure(self.0 / rhs)
    }
}

/// Partial pressure fractions are dimensionless
impl Div for Pressure {
    type Output = f64;

    fn div(self, rhs: Pressure) -> f64 {
        self.0 / rhs.0
    }
}

impl std::iter::Sum for Pressure {
    fn sum<I: Iterator<Item = Pressure>>(iter: I) -> Pressure {
        iter.fold(Pressure::zero(), |acc, p| acc + p)
    }
}
