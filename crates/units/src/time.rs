use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub(crate) const DAYS_PER_YEAR: f64 = 365.2564;
pub(crate) const HOURS_PER_YEAR: f64 = DAYS_PER_YEAR * 24.0;
pub const SECONDS_PER_YEAR: f64 = HOURS_PER_YEAR * 3600.0;

const GYR_TO_YEARS: f64 = 1.0e9;

/// A duration with (sidereal) years as the base unit.
///
/// Stellar ages and lifetimes, orbital periods, rotation periods and gas
/// escape lifetimes all use this type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(#[serde(with = "crate::non_finite")] f64); // Base unit: Years

impl Time {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// A lifetime too long to matter, used when an escape time overflows.
    pub fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_gyr(value: f64) -> Self {
        Self(value * GYR_TO_YEARS)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value / DAYS_PER_YEAR)
    }

    pub fn from_hours(value: f64) -> Self {
        Self(value / HOURS_PER_YEAR)
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_YEAR)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_gyr(&self) -> f64 {
        self.0 / GYR_TO_YEARS
    }

    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_PER_YEAR
    }

    pub fn to_hours(&self) -> f64 {
        self.0 * HOURS_PER_YEAR
    }

    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Time ratios are dimensionless
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}
