use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const AU_TO_CM: f64 = 1.495978707e13;
pub const AU_TO_KM: f64 = AU_TO_CM / 1.0e5;
pub const AU_TO_M: f64 = AU_TO_CM / 100.0;

/// Equatorial radius of the Earth in centimeters
pub const EARTH_RADIUS_CM: f64 = 6.378e8;
pub const AU_TO_EARTH_RADIUS: f64 = AU_TO_CM / EARTH_RADIUS_CM;

/// Equatorial radius of Jupiter in Earth radii
const JUPITER_TO_EARTH_RADII: f64 = 11.209;

/// A length with astronomical units as the base unit.
///
/// Orbits, effect limits and dust-lane edges are all kept in AU; planetary
/// radii convert to centimeters or kilometers at the formula boundary.
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// assert!((orbit.to_km() - 1.495978707e8).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_radii(value: f64) -> Self {
        Self(value / AU_TO_EARTH_RADIUS)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value / AU_TO_KM)
    }

    pub fn from_meters(value: f64) -> Self {
        Self(value / AU_TO_M)
    }

    pub fn from_cm(value: f64) -> Self {
        Self(value / AU_TO_CM)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 * AU_TO_EARTH_RADIUS
    }

    pub fn to_jupiter_radii(&self) -> f64 {
        self.to_earth_radii() / JUPITER_TO_EARTH_RADII
    }

    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }

    pub fn to_m(&self) -> f64 {
        self.0 * AU_TO_M
    }

    pub fn to_cm(&self) -> f64 {
        self.0 * AU_TO_CM
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

    /// Power function on the AU value
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }

    /// Square root of the AU value
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Length ratios are dimensionless
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
