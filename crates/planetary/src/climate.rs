//! Surface climate formulas: volatiles, pressure, water, clouds, ice, albedo
//! and the greenhouse effect.
//!
//! Each function is one of Fogg's equations (with Burdick's retuning noted
//! where it departs). The surface temperature iteration in
//! [`crate::temperature`] strings them together.

use units::{Acceleration, EARTH_RADIUS_CM, Length, Mass, Pressure, Temperature, Velocity};

use crate::constants::{
    AIRLESS_ICE_ALBEDO, CLOUD_ALBEDO, CLOUD_COVERAGE_FACTOR, EARTH_ALBEDO, EARTH_AVERAGE_TEMP,
    EARTH_CONVECTION_FACTOR, EARTH_EFFECTIVE_TEMP, EARTH_SURF_PRES_MB, EARTH_WATER_MASS_PER_AREA,
    FREEZING_POINT_OF_WATER, GAS_RETENTION_THRESHOLD, GREENHOUSE_TRIGGER_ALBEDO, ICE_ALBEDO, Q2_36,
    ROCKY_AIRLESS_ALBEDO, ROCKY_ALBEDO, WATER_ALBEDO,
};
use crate::gas::WATER_VAPOR;
use crate::physics::OrbitalZone;

/// Fogg's eq. 19: effective temperature at `a` for a given albedo.
pub fn effective_temperature(r_ecosphere: Length, a: Length, albedo: f64) -> Temperature {
    Temperature::from_kelvin(EARTH_EFFECTIVE_TEMP * radiative_scale(r_ecosphere, a, albedo))
}

/// Like [`effective_temperature`] but calibrated to Earth's mean surface
/// temperature, used as the greenhouse baseline and for gas giants.
pub fn estimated_temperature(r_ecosphere: Length, a: Length, albedo: f64) -> Temperature {
    Temperature::from_kelvin(EARTH_AVERAGE_TEMP * radiative_scale(r_ecosphere, a, albedo))
}

fn radiative_scale(r_ecosphere: Length, a: Length, albedo: f64) -> f64 {
    (r_ecosphere / a).sqrt() * ((1.0 - albedo) / (1.0 - EARTH_ALBEDO)).powf(0.25)
}

/// True if the body is warm enough at the trigger albedo that water never
/// condenses into oceans.
pub fn greenhouse_triggered(r_ecosphere: Length, a: Length) -> bool {
    effective_temperature(r_ecosphere, a, GREENHOUSE_TRIGGER_ALBEDO).to_kelvin()
        > FREEZING_POINT_OF_WATER
}

/// Fogg's eq. 17: unitless volatile gas inventory.
///
/// Zero unless the body holds on to N₂. The zone constants are Burdick's
/// (140 000 where Fogg used 10 000); bodies with neither a runaway
/// greenhouse nor accreted gas keep 1/140 of it in the atmosphere.
pub fn volatile_inventory(
    mass: Mass,
    escape_velocity: Velocity,
    rms_velocity: Velocity,
    stellar_mass_ratio: f64,
    zone: OrbitalZone,
    greenhouse: bool,
    accreted_gas: bool,
) -> f64 {
    if escape_velocity / rms_velocity < GAS_RETENTION_THRESHOLD {
        return 0.0;
    }

    let proportion = match zone {
        OrbitalZone::Inner => 140_000.0,
        OrbitalZone::Middle => 75_000.0,
        OrbitalZone::Outer => 250.0,
    };
    let inventory = proportion * mass.to_earth_masses() / stellar_mass_ratio;

    if greenhouse || accreted_gas {
        inventory
    } else {
        inventory / 140.0
    }
}

/// Fogg's eq. 18: surface pressure from the volatile inventory, Earth normalised
/// so an inventory of 1000 at 1 g and 1 R⊕ gives one atmosphere.
pub fn surface_pressure(inventory: f64, radius: Length, gravity: Acceleration) -> Pressure {
    let radius_ratio = radius.to_cm() / EARTH_RADIUS_CM;
    Pressure::from_millibars(
        inventory * gravity.to_earth_gravities() * (EARTH_SURF_PRES_MB / 1000.0)
            / (radius_ratio * radius_ratio),
    )
}

/// Fogg's eq. 21: boiling point of water at `pressure`; zero in a vacuum.
pub fn boiling_point(pressure: Pressure) -> Temperature {
    if pressure.to_millibars() <= 0.0 {
        return Temperature::zero();
    }
    Temperature::from_kelvin(1.0 / (pressure.to_bars().ln() / -5050.5 + 1.0 / 373.0))
}

/// Fogg's eq. 22, with Earth's 71 % ocean cover in place of Fogg's 75 %.
pub fn hydro_fraction(inventory: f64, radius: Length) -> f64 {
    let ratio = EARTH_RADIUS_CM / radius.to_cm();
    (0.71 * inventory / 1000.0 * ratio * ratio).min(1.0)
}

/// Fogg's eq. 23 (Hart's eq. 3): cloud cover from the water vapour the
/// oceans give off at `surface_temp`.
///
/// Bodies that cannot hold water vapour have no clouds.
pub fn cloud_fraction(surface_temp: Temperature, min_molecular_weight: f64, hydro: f64) -> f64 {
    if min_molecular_weight > WATER_VAPOR {
        return 0.0;
    }

    // Per km² of surface; the planet's area cancels out.
    let hydro_mass = hydro * EARTH_WATER_MASS_PER_AREA;
    let water_vapor_kg =
        1.0e-8 * hydro_mass * (Q2_36 * (surface_temp.to_kelvin() - EARTH_AVERAGE_TEMP)).exp();
    (CLOUD_COVERAGE_FACTOR * water_vapor_kg).min(1.0)
}

/// Fogg's eq. 24 (Hart), with the 70 → 90 retuning that gives Earth about
/// 1.6 % ice. Never more than 1.5× the hydrosphere.
pub fn ice_fraction(hydro: f64, surface_temp: Temperature) -> f64 {
    let t = surface_temp.to_kelvin().min(328.0);
    ((328.0 - t) / 90.0).powi(5).min(1.5 * hydro).min(1.0)
}

/// Bond albedo from the surface mix.
///
/// Clouds hide an equal share of each exposed surface type. Airless bodies
/// use the bare rock and ice albedos and have no open water.
pub fn planet_albedo(water: f64, cloud: f64, ice: f64, pressure: Pressure) -> f64 {
    let rock = 1.0 - water - ice;
    let components = [water, ice, rock].iter().filter(|&&f| f > 0.0).count() as f64;
    let cloud_adjustment = cloud / components;

    let rock = if rock >= cloud_adjustment {
        rock - cloud_adjustment
    } else {
        0.0
    };
    let water = if water > cloud_adjustment {
        water - cloud_adjustment
    } else {
        0.0
    };
    let ice = if ice > cloud_adjustment {
        ice - cloud_adjustment
    } else {
        0.0
    };

    let cloud_part = cloud * CLOUD_ALBEDO;
    if pressure.to_millibars() == 0.0 {
        cloud_part + rock * ROCKY_AIRLESS_ALBEDO + ice * AIRLESS_ICE_ALBEDO
    } else {
        cloud_part + rock * ROCKY_ALBEDO + water * WATER_ALBEDO + ice * ICE_ALBEDO
    }
}

/// Optical depth of an atmosphere for the greenhouse calculation.
///
/// Lighter atmospheres are more opaque; very thick ones are scaled up.
pub fn opacity(min_molecular_weight: f64, pressure: Pressure) -> f64 {
    let depth = match min_molecular_weight {
        w if (0.0..10.0).contains(&w) => 3.0,
        w if (10.0..20.0).contains(&w) => 2.34,
        w if (20.0..30.0).contains(&w) => 1.0,
        w if (30.0..45.0).contains(&w) => 0.15,
        w if (45.0..100.0).contains(&w) => 0.05,
        _ => 0.0,
    };

    let atm = pressure.to_atm();
    let scale = if atm >= 70.0 {
        8.333
    } else if atm >= 50.0 {
        6.666
    } else if atm >= 30.0 {
        3.333
    } else if atm >= 10.0 {
        2.0
    } else if atm >= 5.0 {
        1.5
    } else {
        1.0
    };

    depth * scale
}

/// Fogg's eq. 20 (Hart's eq. 20): temperature rise from the greenhouse
/// effect, with Burdick's 0.4 pressure exponent tuned to Venus.
pub fn greenhouse_rise(
    optical_depth: f64,
    effective_temp: Temperature,
    pressure: Pressure,
) -> Temperature {
    let convection_factor = EARTH_CONVECTION_FACTOR * pressure.to_atm().powf(0.4);
    let rise = ((1.0 + 0.75 * optical_depth).powf(0.25) - 1.0)
        * effective_temp.to_kelvin()
        * convection_factor;
    Temperature::from_kelvin(rise.max(0.0))
}
