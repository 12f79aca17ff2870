use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::time::Time;

/// Spin rate in rad/s
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngularVelocity(f64);

impl AngularVelocity {
    pub fn from_rad_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Spin rate of a body completing one turn per `period`
    pub fn from_period(period: Time) -> Self {
        Self(TAU / period.to_seconds())
    }

    pub fn to_rad_per_sec(&self) -> f64 {
        self.0
    }

    /// Time for one full rotation; infinite for a body that does not spin.
    pub fn period(&self) -> Time {
        if self.0 <= 0.0 {
            Time::infinite()
        } else {
            Time::from_seconds(TAU / self.0)
        }
    }
}
