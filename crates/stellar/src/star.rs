//! Main-sequence host star.
//!
//! # References
//! - Dole, S. H. (1969) "Formation of Planetary Systems by Aggregation"
//! - Fogg, M. J. (1985) "Extra-Solar Planetary Systems: A Microcomputer Simulation"
//! - Burrows, Sheffield & Burdick, StarGen (luminosity, ecosphere and dust limit)

use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time};

use crate::error::StellarError;
use crate::spectral::SpectralClass;

/// Outer edge of the primordial dust disk in AU for a one solar mass star
const DUST_LIMIT_AU: f64 = 200.0;

/// Main-sequence lifetime of the Sun in years
const SOLAR_LIFETIME_YEARS: f64 = 1.0e10;

/// Star hosting a generated system.
///
/// Immutable once created; planets are attached to the system, not the star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub mass: Mass,
    pub age: Time,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Star {
    /// Creates a star from its mass and age.
    ///
    /// ```rust
    /// use stellar::Star;
    /// use units::{Mass, Time};
    ///
    /// let sun = Star::new(Mass::from_solar_masses(1.0), Time::from_gyr(4.6)).unwrap();
    /// assert!((sun.luminosity_ratio() - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(mass: Mass, age: Time) -> Result<Self, StellarError> {
        let m = mass.to_solar_masses();
        if !m.is_finite() || m <= 0.0 {
            return Err(StellarError::InvalidMass(m));
        }
        let years = age.to_years();
        if !years.is_finite() || years < 0.0 {
            return Err(StellarError::InvalidAge(years));
        }
        Ok(Self {
            mass,
            age,
            name: None,
        })
    }

    /// Creates a main-sequence star from a spectral class such as `"G2V"` or `"M4"`.
    pub fn from_spectral_class(class: &str, age: Time) -> Result<Self, StellarError> {
        let class: SpectralClass = class.parse()?;
        Ok(Self::new(class.main_sequence_mass(), age)?.with_name(class.to_string()))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mass in solar masses
    pub fn mass_ratio(&self) -> f64 {
        self.mass.to_solar_masses()
    }

    /// Luminosity relative to the Sun from a piecewise mass-luminosity relation.
    pub fn luminosity_ratio(&self) -> f64 {
        let m = self.mass_ratio();
        if m < 0.43 {
            0.23 * m.powf(2.3)
        } else if m < 2.0 {
            m.powi(4)
        } else if m < 20.0 {
            1.5 * m.powf(3.5)
        } else {
            3200.0 * m
        }
    }

    /// Outer edge of the dust disk, `200 · M^(1/3)` AU.
    pub fn stellar_dust_limit(&self) -> Length {
        Length::from_au(DUST_LIMIT_AU * self.mass_ratio().cbrt())
    }

    /// Distance at which a planet receives Earth's insolation.
    pub fn r_ecosphere(&self) -> Length {
        Length::from_au(self.luminosity_ratio().sqrt())
    }

    /// Inner edge of the habitable zone
    pub fn min_r_ecosphere(&self) -> Length {
        Length::from_au((self.luminosity_ratio() / 1.51).sqrt())
    }

    /// Outer edge of the habitable zone
    pub fn max_r_ecosphere(&self) -> Length {
        Length::from_au((self.luminosity_ratio() / 0.48).sqrt())
    }

    /// Main-sequence lifetime
    pub fn life(&self) -> Time {
        Time::from_years(SOLAR_LIFETIME_YEARS * self.mass_ratio() / self.luminosity_ratio())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Star")
    }
}
