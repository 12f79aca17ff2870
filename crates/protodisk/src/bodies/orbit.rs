use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time};

/// Keplerian orbit reduced to the two elements the model tracks.
///
/// Replaced wholesale when a body's orbit changes, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orbit {
    pub semi_major_axis: Length,
    pub eccentricity: f64,
}

impl Orbit {
    pub fn new(semi_major_axis: Length, eccentricity: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
        }
    }

    pub fn circular(semi_major_axis: Length) -> Self {
        Self::new(semi_major_axis, 0.0)
    }

    /// Placeholder for a moon with no stable niche around its host.
    pub fn degenerate() -> Self {
        Self::new(Length::zero(), 0.0)
    }

    pub fn is_degenerate(&self) -> bool {
        self.semi_major_axis.to_au() <= 0.0
    }

    /// Closest approach, a(1 - e)
    pub fn periapsis(&self) -> Length {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest point, a(1 + e)
    pub fn apoapsis(&self) -> Length {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Two-body period from Kepler's third law: P² = a³ / (M + m) in years, AU, M☉.
    pub fn period(&self, central_mass: Mass, body_mass: Mass) -> Time {
        let a = self.semi_major_axis.to_au();
        let total = (central_mass + body_mass).to_solar_masses();
        Time::from_years((a.powi(3) / total).sqrt())
    }
}
