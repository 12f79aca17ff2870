//! Typed physical quantities used throughout planetary system generation.
//!
//! Each quantity stores a single `f64` in a fixed base unit and exposes
//! constructors and accessors for the other units the generator reads and
//! writes. The accretion model works in solar masses and AU while the
//! environment formulas are expressed in CGS, so most types carry both.

pub mod acceleration;
pub mod angular_velocity;
pub mod density;
pub mod length;
pub mod mass;
pub mod non_finite;
pub mod pressure;
pub mod temperature;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod acceleration_test;
#[cfg(test)]
mod angular_velocity_test;
#[cfg(test)]
mod time_test;

pub use acceleration::{Acceleration, EARTH_ACCELERATION_CM_S2};
pub use angular_velocity::AngularVelocity;
pub use density::Density;
pub use length::{Length, EARTH_RADIUS_CM};
pub use mass::{EARTH_MASS_G, Mass, SOLAR_MASS_G};
pub use pressure::Pressure;
pub use temperature::Temperature;
pub use time::{SECONDS_PER_YEAR, Time};
pub use velocity::Velocity;
