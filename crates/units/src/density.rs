use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Bulk density in g/cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value / 1000.0)
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0 * 1000.0
    }
}

impl Mul<f64> for Density {
    type Output = Density;

    fn mul(self, rhs: f64) -> Density {
        Density(self.0 * rhs)
    }
}

/// Density ratios are dimensionless
impl Div for Density {
    type Output = f64;

    fn div(self, rhs: Density) -> f64 {
        self.0 / rhs.0
    }
}
