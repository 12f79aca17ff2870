use rand::Rng;
use units::{Mass, Time};

use crate::star::Star;

const MIN_STELLAR_MASS: f64 = 0.08;

/// Sample from a power-law distribution
///
/// Samples from p(x) ∝ x^α between x_min and x_max using inverse transform sampling.
pub fn sample_power_law(x_min: f64, x_max: f64, alpha: f64, rng: &mut impl Rng) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Sample stellar mass from the Kroupa (2001) Initial Mass Function
///
/// Broken power law: α = -1.3 below 0.5 M☉, α = -2.3 above. Masses are
/// capped at `max_mass` solar masses.
pub fn sample_mass_kroupa(rng: &mut impl Rng, max_mass: f64) -> f64 {
    let segment_weights = [0.80, 0.15];
    let roll: f64 = rng.random();

    if roll < segment_weights[0] || max_mass <= 0.5 {
        sample_power_law(MIN_STELLAR_MASS, max_mass.min(0.5), -1.3, rng)
    } else if roll < segment_weights[0] + segment_weights[1] || max_mass <= 1.0 {
        sample_power_law(0.5, max_mass.min(1.0), -2.3, rng)
    } else {
        sample_power_law(1.0, max_mass, -2.3, rng)
    }
}

/// A Sun-mass star with an age uniform in [1, 6) Gyr.
pub fn random_star(rng: &mut impl Rng) -> Star {
    let age = Time::from_years(rng.random_range(1.0e9..6.0e9));
    Star {
        mass: Mass::from_solar_masses(1.0),
        age,
        name: None,
    }
}

/// A field star: Kroupa mass up to `max_mass`, age uniform between 1 Gyr
/// and the smaller of 10 Gyr and the star's main-sequence lifetime.
pub fn random_field_star(rng: &mut impl Rng, max_mass: f64) -> Star {
    let mass = Mass::from_solar_masses(sample_mass_kroupa(rng, max_mass));
    let mut star = Star {
        mass,
        age: Time::zero(),
        name: None,
    };
    let oldest = star.life().to_years().min(1.0e10).max(1.0e9 + 1.0);
    star.age = Time::from_years(rng.random_range(1.0e9..oldest));
    star
}
