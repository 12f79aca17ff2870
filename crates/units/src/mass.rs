use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Mass of the Sun in grams (1.989 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.989e33;

/// Mass of the Earth in grams (5.977 × 10²⁷ g)
pub const EARTH_MASS_G: f64 = 5.977e27;

/// Mass of the Moon in grams
const LUNAR_MASS_G: f64 = 7.342e25;

/// Mass of Neptune in grams
const NEPTUNE_MASS_G: f64 = 1.024e29;

/// Mass of Jupiter in grams
const JUPITER_MASS_G: f64 = 1.898e30;

/// A mass with solar masses as the base unit.
///
/// Accretion works with very small fractions of a solar mass (a fresh
/// planetesimal is 10⁻¹⁵ M☉), so comparisons against Earth masses go
/// through [`Mass::to_earth_masses`] rather than a separate type.
///
/// ```rust
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// assert!((earth.to_solar_masses() * 332_775.64 - 1.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_G / SOLAR_MASS_G)
    }

    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_G / SOLAR_MASS_G)
    }

    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    pub fn from_kg(value: f64) -> Self {
        Self::from_grams(value * 1000.0)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_G / EARTH_MASS_G
    }

    pub fn to_lunar_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_G / LUNAR_MASS_G
    }

    pub fn to_neptune_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_G / NEPTUNE_MASS_G
    }

    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_G / JUPITER_MASS_G
    }

    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    pub fn to_kg(&self) -> f64 {
        self.to_grams() / 1000.0
    }

    /// Power function on the solar-mass value
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }

    /// Square root of the solar-mass value
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }

    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }

    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }
}

/// Picks the most readable unit for the magnitude: lunar masses for small
/// bodies, then Earth, Neptune, Jupiter and finally solar masses.
impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.to_lunar_masses() <= 50.0 {
            write!(f, "{:.2} M☾", self.to_lunar_masses())
        } else if self.to_earth_masses() <= 50.0 {
            write!(f, "{:.2} M⊕", self.to_earth_masses())
        } else if self.to_neptune_masses() <= 15.0 {
            write!(f, "{:.2} M♆", self.to_neptune_masses())
        } else if self.to_jupiter_masses() <= 50.0 {
            write!(f, "{:.2} M♃", self.to_jupiter_masses())
        } else {
            write!(f, "{:.4} M☉", self.0)
        }
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl AddAssign for Mass {
    fn add_assign(&mut self, rhs: Mass) {
        self.0 += rhs.0;
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl SubAssign for Mass {
    fn sub_assign(&mut self, rhs: Mass) {
        self.0 -= rhs.0;
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Mass ratios are dimensionless
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

impl std::iter::Sum for Mass {
    fn sum<I: Iterator<Item = Mass>>(iter: I) -> Mass {
        iter.fold(Mass::zero(), |acc, m| acc + m)
    }
}
