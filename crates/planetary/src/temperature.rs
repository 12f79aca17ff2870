//! Surface temperature iteration and the day/night/seasonal spread around it.
//!
//! The climate feeds back on itself: warmer surfaces hold more water vapour,
//! vapour makes clouds, clouds raise the albedo and cool the surface again.
//! [`iterate_surface_temp`] runs that loop until the mean temperature stops
//! moving, damping each round by blending the new state 1:2 with the old.

use log::debug;
use units::{Length, Pressure, Temperature, Time};

use crate::climate::{
    boiling_point, cloud_fraction, effective_temperature, estimated_temperature,
    greenhouse_rise, greenhouse_triggered, hydro_fraction, ice_fraction, opacity, planet_albedo,
    surface_pressure, volatile_inventory,
};
use crate::constants::{
    ACCRETED_GAS_FRACTION, EARTH_ALBEDO, FREEZING_POINT_OF_WATER, MAX_TEMPERATURE_ITERATIONS,
    TEMPERATURE_CONVERGENCE,
};
use crate::gas::WATER_VAPOR;
use crate::planet::{BulkProperties, OrbitalProfile, Rotation, SurfaceConditions};

// =============================================================================
// Temperature range
// =============================================================================

/// Daytime high, nighttime low and their seasonal extremes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub high: Temperature,
    pub low: Temperature,
    pub max: Temperature,
    pub min: Temperature,
}

/// Spread of temperatures around the mean `surface_temp`.
///
/// Thick atmospheres and short days even out the spread; axial tilt and
/// eccentricity widen the seasonal swing. Every value is soft-limited into
/// the band between `T / sqrt(day + 24)` and `T + 10·sqrt(T)`.
pub fn temperature_range(
    surface_temp: Temperature,
    pressure: Pressure,
    day: Time,
    axial_tilt: f64,
    eccentricity: f64,
) -> TemperatureRange {
    let bars = pressure.to_bars();
    let t = surface_temp.to_kelvin();
    let day_hours = day.to_hours();

    let pressmod = 1.0 / (1.0 + 20.0 * bars).sqrt();
    let ppmod = 1.0 / (10.0 + 5.0 * bars).sqrt();
    let tiltmod = (axial_tilt.to_radians().cos() * (1.0 + eccentricity).powi(2)).abs();
    let daymod = 1.0 / (200.0 / day_hours + 1.0);

    let hi = (1.0 + daymod).powf(pressmod) * t;
    let lo = (1.0 - daymod).powf(pressmod) * t;
    let summer = hi + ((100.0 + hi) * tiltmod).powf(ppmod.sqrt());
    let winter = lo - ((150.0 + lo) * tiltmod).powf(ppmod.sqrt());

    let ceiling = t + t.sqrt() * 10.0;
    let floor = t / (day_hours + 24.0).sqrt();

    let lo = lo.max(floor);
    let winter = winter.max(0.0);

    let soft = |v: f64| Temperature::from_kelvin(soft_limit(v, ceiling, floor));
    TemperatureRange {
        high: soft(hi),
        low: soft(lo),
        max: soft(summer),
        min: soft(winter),
    }
}

fn soft_limit(v: f64, max: f64, min: f64) -> f64 {
    let lim = |x: f64| x / (1.0 + x.powi(4)).sqrt().sqrt();
    let dv = v - min;
    let dm = max - min;
    (lim(2.0 * dv / dm - 1.0) + 1.0) / 2.0 * dm + min
}

// =============================================================================
// Iteration
// =============================================================================

/// What the climate of a rocky body depends on, fixed for the whole iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateInputs {
    pub orbit: OrbitalProfile,
    pub bulk: BulkProperties,
    pub rotation: Rotation,
    pub r_ecosphere: Length,
    pub stellar_mass_ratio: f64,
}

impl ClimateInputs {
    fn semi_major_axis(&self) -> Length {
        self.orbit.orbit.semi_major_axis
    }

    fn accreted_gas(&self) -> bool {
        self.bulk.gas_fraction() > ACCRETED_GAS_FRACTION
    }

    fn inventory(&self, greenhouse: bool) -> f64 {
        volatile_inventory(
            self.bulk.mass,
            self.bulk.escape_velocity,
            self.bulk.rms_velocity,
            self.stellar_mass_ratio,
            self.orbit.zone,
            greenhouse,
            self.accreted_gas(),
        )
    }

    fn pressure(&self, inventory: f64) -> Pressure {
        surface_pressure(inventory, self.bulk.radius, self.bulk.surface_accel)
    }

    /// Effective temperature plus greenhouse rise at `albedo`
    fn mean_temperature(&self, albedo: f64, pressure: Pressure) -> Temperature {
        let effective = effective_temperature(self.r_ecosphere, self.semi_major_axis(), albedo);
        effective
            + greenhouse_rise(
                opacity(self.bulk.min_molecular_weight, pressure),
                effective,
                pressure,
            )
    }

    fn range(&self, surface_temp: Temperature, pressure: Pressure) -> TemperatureRange {
        temperature_range(
            surface_temp,
            pressure,
            self.rotation.day,
            self.orbit.axial_tilt,
            self.orbit.orbit.eccentricity,
        )
    }
}

/// Atmosphere and water state before the climate loop starts: greenhouse
/// trigger, volatile inventory, surface pressure and boiling point, with
/// Earth-albedo estimates for the mean temperature.
pub fn initial_conditions(inputs: &ClimateInputs) -> SurfaceConditions {
    let greenhouse = greenhouse_triggered(inputs.r_ecosphere, inputs.semi_major_axis());
    let inventory = inputs.inventory(greenhouse);
    let pressure = inputs.pressure(inventory);
    let estimated = estimated_temperature(inputs.r_ecosphere, inputs.semi_major_axis(), EARTH_ALBEDO);

    SurfaceConditions {
        volatile_gas_inventory: inventory,
        pressure,
        greenhouse_effect: greenhouse,
        boiling_point: boiling_point(pressure),
        albedo: EARTH_ALBEDO,
        surface_temp: Temperature::zero(),
        high_temp: Temperature::zero(),
        low_temp: Temperature::zero(),
        max_temp: Temperature::zero(),
        min_temp: Temperature::zero(),
        greenhouse_rise: Temperature::zero(),
        hydrosphere: 0.0,
        cloud_cover: 0.0,
        ice_cover: 0.0,
        estimated_temp: estimated,
        estimated_terrestrial_temp: estimated,
    }
}

/// Result of [`iterate_surface_temp`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSolution {
    pub conditions: SurfaceConditions,
    /// Damped rounds run after the seeding pass
    pub iterations: usize,
    /// False if the round limit was hit before the temperature settled
    pub converged: bool,
}

/// Runs the climate loop from `start` until the surface temperature moves
/// less than a quarter kelvin per round, or the round limit is reached.
pub fn iterate_surface_temp(inputs: &ClimateInputs, start: SurfaceConditions) -> TemperatureSolution {
    let mut conditions = start;
    climate_round(inputs, &mut conditions, true);

    let mut iterations = 0;
    let mut converged = false;
    while iterations < MAX_TEMPERATURE_ITERATIONS {
        let last_temp = conditions.surface_temp;
        climate_round(inputs, &mut conditions, false);
        iterations += 1;

        if (conditions.surface_temp - last_temp).abs().to_kelvin() < TEMPERATURE_CONVERGENCE {
            converged = true;
            break;
        }
    }

    conditions.greenhouse_rise = conditions.surface_temp - conditions.estimated_temp;

    debug!(
        "climate at {:.3} AU settled after {} rounds: T = {:.1} K, rise = {:.1} K, albedo = {:.3}",
        inputs.semi_major_axis().to_au(),
        iterations,
        conditions.surface_temp.to_kelvin(),
        conditions.greenhouse_rise.to_kelvin(),
        conditions.albedo
    );

    TemperatureSolution {
        conditions,
        iterations,
        converged,
    }
}

/// One pass of the climate feedback. The first pass seeds the surface
/// temperature at Earth's albedo and skips the damping.
fn climate_round(inputs: &ClimateInputs, c: &mut SurfaceConditions, first: bool) {
    let last = *c;

    if first {
        c.albedo = EARTH_ALBEDO;
        c.surface_temp = inputs.mean_temperature(c.albedo, c.pressure);
        apply_range(inputs, c);
    }

    // A runaway greenhouse that never gets hot enough to boil its oceans
    // rains out instead.
    if c.greenhouse_effect && c.max_temp < c.boiling_point {
        debug!(
            "deluge at {:.3} AU: max {:.1} K < boil {:.1} K",
            inputs.semi_major_axis().to_au(),
            c.max_temp.to_kelvin(),
            c.boiling_point.to_kelvin()
        );
        c.greenhouse_effect = false;
        c.volatile_gas_inventory = inputs.inventory(false);
        c.pressure = inputs.pressure(c.volatile_gas_inventory);
        c.boiling_point = boiling_point(c.pressure);
    }

    c.hydrosphere = hydro_fraction(c.volatile_gas_inventory, inputs.bulk.radius);
    c.cloud_cover = cloud_fraction(
        c.surface_temp,
        inputs.bulk.min_molecular_weight,
        c.hydrosphere,
    );
    c.ice_cover = ice_fraction(c.hydrosphere, c.surface_temp);

    if c.greenhouse_effect && c.pressure.to_millibars() > 0.0 {
        c.cloud_cover = 1.0;
    }

    let boil_off = (c.high_temp >= c.boiling_point
        && !first
        && inputs.rotation.day.to_hours() as i64 != inputs.orbit.period.to_hours() as i64)
        || inputs.rotation.resonant;
    if boil_off {
        c.hydrosphere = 0.0;
        c.cloud_cover = if inputs.bulk.min_molecular_weight > WATER_VAPOR {
            0.0
        } else {
            1.0
        };
    }

    if c.surface_temp.to_kelvin() + 3.0 < FREEZING_POINT_OF_WATER {
        c.hydrosphere = 0.0;
    }

    c.albedo = planet_albedo(c.hydrosphere, c.cloud_cover, c.ice_cover, c.pressure);
    c.surface_temp = inputs.mean_temperature(c.albedo, c.pressure);

    if !first {
        let blend = |new: f64, old: f64| (new + old * 2.0) / 3.0;
        if !boil_off {
            c.hydrosphere = blend(c.hydrosphere, last.hydrosphere);
        }
        c.cloud_cover = blend(c.cloud_cover, last.cloud_cover);
        c.ice_cover = blend(c.ice_cover, last.ice_cover);
        c.albedo = blend(c.albedo, last.albedo);
        c.surface_temp = Temperature::from_kelvin(blend(
            c.surface_temp.to_kelvin(),
            last.surface_temp.to_kelvin(),
        ));
    }

    apply_range(inputs, c);
}

fn apply_range(inputs: &ClimateInputs, c: &mut SurfaceConditions) {
    let range = inputs.range(c.surface_temp, c.pressure);
    c.high_temp = range.high;
    c.low_temp = range.low;
    c.max_temp = range.max;
    c.min_temp = range.min;
}
