use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Standard surface gravity of the Earth in cm/s²
pub const EARTH_ACCELERATION_CM_S2: f64 = 980.7;

/// A surface acceleration with cm/s² as the base unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acceleration(f64); // Base unit: cm/s²

impl Acceleration {
    pub fn from_cm_per_sec2(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_gravities(value: f64) -> Self {
        Self(value * EARTH_ACCELERATION_CM_S2)
    }

    pub fn to_cm_per_sec2(&self) -> f64 {
        self.0
    }

    pub fn to_meters_per_sec2(&self) -> f64 {
        self.0 / 100.0
    }

    /// Surface gravity relative to the Earth's
    pub fn to_earth_gravities(&self) -> f64 {
        self.0 / EARTH_ACCELERATION_CM_S2
    }
}

impl Mul<f64> for Acceleration {
    type Output = Acceleration;

    fn mul(self, rhs: f64) -> Acceleration {
        Acceleration(self.0 * rhs)
    }
}

impl Div<f64> for Acceleration {
    type Output = Acceleration;

    fn div(self, rhs: f64) -> Acceleration {
        Acceleration(self.0 / rhs)
    }
}
