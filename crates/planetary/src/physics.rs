//! Bulk and orbital physics of a single body.
//!
//! Inputs and outputs are typed quantities; internally everything is CGS
//! except where a formula was calibrated in other units (noted inline).
//!
//! # References
//! - Kothari, D. S. (1936) "The Internal Constitution of Planets", MNRAS 96
//! - Fogg, M. J. (1985) "Extra-Solar Planetary Systems", JBIS 38
//! - Dole, S. H. (1964) "Habitable Planets for Man"

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::{
    Acceleration, AngularVelocity, Density, EARTH_MASS_G, EARTH_RADIUS_CM, Length, Mass,
    SOLAR_MASS_G, Temperature, Time, Velocity,
};

use crate::constants::{
    CHANGE_IN_EARTH_ANG_VEL, EARTH_DENSITY, EARTH_EXOSPHERE_TEMP, GAS_LIFE_CEILING_YEARS,
    GRAV_CONSTANT, J, MAX_WEIGHT_SEARCH_LOOPS, MOLAR_GAS_CONST,
};
use crate::gas::{ATOMIC_HYDROGEN, MOL_NITROGEN};
use crate::planet::Rotation;

/// Fogg's coarse split of a system into hot, temperate and cold regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrbitalZone {
    Inner,
    Middle,
    Outer,
}

impl OrbitalZone {
    /// Zone 1 inside `4·√L` AU, zone 2 inside `15·√L` AU, zone 3 beyond.
    pub fn from_distance(a: Length, luminosity_ratio: f64) -> Self {
        let scale = luminosity_ratio.sqrt();
        match a.to_au() {
            au if au < 4.0 * scale => OrbitalZone::Inner,
            au if au < 15.0 * scale => OrbitalZone::Middle,
            _ => OrbitalZone::Outer,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            OrbitalZone::Inner => 1,
            OrbitalZone::Middle => 2,
            OrbitalZone::Outer => 3,
        }
    }

    /// Mean atomic weight and atomic number of the material Kothari's
    /// relation assumes in this zone.
    fn composition(self, giant: bool) -> (f64, f64) {
        match (self, giant) {
            (OrbitalZone::Inner, true) => (9.5, 4.5),
            (OrbitalZone::Inner, false) => (15.0, 8.0),
            (OrbitalZone::Middle, true) => (2.47, 2.0),
            (OrbitalZone::Middle, false) => (10.0, 5.0),
            (OrbitalZone::Outer, true) => (7.0, 4.0),
            (OrbitalZone::Outer, false) => (10.0, 5.0),
        }
    }
}

// Kothari's constants, scaled as in StarGen
const A1_20: f64 = 6.485e12;
const A2_20: f64 = 4.0032e-8;
const BETA_20: f64 = 5.71e12;
const JIMS_FUDGE: f64 = 1.004;

/// Radius of a cold body of `mass` from Kothari's mass-radius relation.
///
/// Radius grows as `M^(1/3)` until degeneracy pressure takes over, with the
/// turnover set by the zone's assumed composition.
pub fn kothari_radius(mass: Mass, giant: bool, zone: OrbitalZone) -> Length {
    let (atomic_weight, atomic_num) = zone.composition(giant);
    let m = mass.to_solar_masses();

    let numerator = 2.0 * BETA_20 * SOLAR_MASS_G.cbrt()
        / (A1_20 * (atomic_weight * atomic_num).cbrt());
    let degeneracy = 1.0
        + A2_20 * atomic_weight.powf(4.0 / 3.0) * SOLAR_MASS_G.powf(2.0 / 3.0) * m.powf(2.0 / 3.0)
            / (A1_20 * atomic_num * atomic_num);

    Length::from_cm(numerator / degeneracy * m.cbrt() / JIMS_FUDGE)
}

/// Fogg's empirical density, `M^(1/8) · (r_eco / a)^(1/4)` scaled to rock
/// (5.5 g/cm³) or gas (1.2 g/cm³).
pub fn empirical_density(mass: Mass, a: Length, r_ecosphere: Length, gas_giant: bool) -> Density {
    let temp = mass.to_earth_masses().powf(1.0 / 8.0) * (r_ecosphere / a).powf(0.25);
    let scale = if gas_giant { 1.2 } else { 5.5 };
    Density::from_grams_per_cm3(temp * scale)
}

/// Radius of a sphere of `mass` at uniform `density`
pub fn volume_radius(mass: Mass, density: Density) -> Length {
    let volume = mass.to_grams() / density.to_grams_per_cm3();
    Length::from_cm((volume / (4.0 / 3.0 * PI)).cbrt())
}

/// Mean density of a sphere of `mass` and `radius`
pub fn volume_density(mass: Mass, radius: Length) -> Density {
    let volume = 4.0 / 3.0 * PI * radius.to_cm().powi(3);
    Density::from_grams_per_cm3(mass.to_grams() / volume)
}

pub fn surface_acceleration(mass: Mass, radius: Length) -> Acceleration {
    Acceleration::from_cm_per_sec2(GRAV_CONSTANT * mass.to_grams() / radius.to_cm().powi(2))
}

pub fn escape_velocity(mass: Mass, radius: Length) -> Velocity {
    Velocity::from_cm_per_sec((2.0 * GRAV_CONSTANT * mass.to_grams() / radius.to_cm()).sqrt())
}

/// Fogg's eq. 16: RMS speed of a molecule of `molecular_weight` (g/mol).
pub fn rms_velocity(molecular_weight: f64, exospheric_temp: Temperature) -> Velocity {
    Velocity::from_meters_per_sec(
        (3.0 * MOLAR_GAS_CONST * exospheric_temp.to_kelvin() / molecular_weight).sqrt(),
    )
}

/// Exosphere temperature, Earth's scaled by the inverse square of the
/// distance in ecosphere radii.
pub fn exospheric_temperature(a: Length, r_ecosphere: Length) -> Temperature {
    Temperature::from_kelvin(EARTH_EXOSPHERE_TEMP / (a / r_ecosphere).powi(2))
}

/// Time for 1/e of a gas to escape, after Dole p. 34 (Jeans escape).
///
/// Overflowing or implausibly long lifetimes are reported as infinite.
pub fn gas_life(
    molecular_weight: f64,
    exospheric_temp: Temperature,
    surface_accel: Acceleration,
    radius: Length,
) -> Time {
    let v = rms_velocity(molecular_weight, exospheric_temp).to_cm_per_sec();
    let g = surface_accel.to_cm_per_sec2();
    let r = radius.to_cm();

    let seconds = v.powi(3) / (2.0 * g * g * r) * (3.0 * g * r / (v * v)).exp();
    let life = Time::from_seconds(seconds);

    if !seconds.is_finite() || life.to_years() > GAS_LIFE_CEILING_YEARS {
        Time::infinite()
    } else {
        life
    }
}

/// Lightest molecular weight (g/mol) the body keeps for longer than `age`.
///
/// Brackets the threshold by doubling from N₂ and then bisects, at most
/// 25 rounds each.
pub fn min_molecular_weight(
    exospheric_temp: Temperature,
    surface_accel: Acceleration,
    radius: Length,
    age: Time,
) -> f64 {
    let life = |weight: f64| gas_life(weight, exospheric_temp, surface_accel, radius);

    let mut lower = ATOMIC_HYDROGEN;
    if life(lower) >= age {
        return lower;
    }

    let mut upper = MOL_NITROGEN;
    for _ in 0..MAX_WEIGHT_SEARCH_LOOPS {
        if life(upper) >= age {
            break;
        }
        lower = upper;
        upper *= 2.0;
    }

    for _ in 0..MAX_WEIGHT_SEARCH_LOOPS {
        if upper - lower <= 0.1 {
            break;
        }
        let mid = (lower + upper) / 2.0;
        if life(mid) < age {
            lower = mid;
        } else {
            upper = mid;
        }
    }

    upper
}

/// What [`day_length`] needs to know about a body and its star.
#[derive(Debug, Clone, Copy)]
pub struct SpinInputs {
    pub mass: Mass,
    pub radius: Length,
    pub density: Density,
    pub semi_major_axis: Length,
    pub eccentricity: f64,
    pub year: Time,
    pub gas_giant: bool,
    pub stellar_mass_ratio: f64,
    pub stellar_age: Time,
}

/// Rotation period after tidal braking by the star.
///
/// Fogg's eq. 12 gives the primordial spin; Goldreich & Soter's tidal
/// spin-down, scaled from Earth's, is applied over the star's age. A body
/// that would spin slower than it orbits is locked: into a resonance
/// `(1 - e)/(1 + e)` of its year when `e > 0.1`, or to its year otherwise.
pub fn day_length(inputs: &SpinInputs) -> Rotation {
    let mass_g = inputs.mass.to_grams();
    let radius_cm = inputs.radius.to_cm();
    let k2 = if inputs.gas_giant { 0.24 } else { 0.33 };

    let base_angular_velocity = (2.0 * J * mass_g / (k2 * radius_cm * radius_cm)).sqrt();
    let change_in_angular_velocity = CHANGE_IN_EARTH_ANG_VEL
        * (inputs.density.to_grams_per_cm3() / EARTH_DENSITY)
        * (radius_cm / EARTH_RADIUS_CM)
        * (EARTH_MASS_G / mass_g)
        * inputs.stellar_mass_ratio.powi(2)
        / inputs.semi_major_axis.to_au().powi(6);
    let spin = AngularVelocity::from_rad_per_sec(
        base_angular_velocity + change_in_angular_velocity * inputs.stellar_age.to_years(),
    );

    let stopped = spin.to_rad_per_sec() <= 0.0;
    let day = spin.period();

    if stopped || day >= inputs.year {
        let e = inputs.eccentricity;
        if e > 0.1 {
            return Rotation {
                day: inputs.year * ((1.0 - e) / (1.0 + e)),
                resonant: true,
            };
        }
        return Rotation {
            day: inputs.year,
            resonant: false,
        };
    }

    Rotation {
        day,
        resonant: false,
    }
}
