use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

const FREEZING_POINT_OF_WATER_K: f64 = 273.15;
const BOILING_POINT_OF_WATER_K: f64 = 373.15;

/// A temperature with Kelvin as the base unit.
///
/// Gas giants have no solid surface; their surface temperature and boiling
/// point are stored as [`Temperature::infinite`] so that comparisons keep
/// working without a separate `Option`.
///
/// ```rust
/// use units::Temperature;
///
/// let earth = Temperature::from_celsius(14.0);
/// assert!(earth > Temperature::water_freezing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(#[serde(with = "crate::non_finite")] f64); // Base unit: Kelvin

impl Temperature {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + FREEZING_POINT_OF_WATER_K)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - FREEZING_POINT_OF_WATER_K
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Water freezing point at 1 atm (273.15 K).
    pub fn water_freezing() -> Self {
        Self(FREEZING_POINT_OF_WATER_K)
    }

    /// Water boiling point at 1 atm (373.15 K).
    pub fn water_boiling() -> Self {
        Self(BOILING_POINT_OF_WATER_K)
    }

    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }

    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl Mul<Temperature> for f64 {
    type Output = Temperature;

    fn mul(self, rhs: Temperature) -> Temperature {
        rhs * self
    }
}

impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}

/// Temperature ratios are dimensionless
impl Div for Temperature {
    type Output = f64;

    fn div(self, rhs: Temperature) -> f64 {
        self.0 / rhs.0
    }
}
