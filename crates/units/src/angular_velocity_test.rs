use approx::assert_relative_eq;

use crate::{AngularVelocity, Time};

#[test]
fn test_period_round_trips_through_spin_rate() {
    let day = Time::from_hours(24.0);
    let spin = AngularVelocity::from_period(day);
    assert_relative_eq!(spin.to_rad_per_sec(), 7.2722e-5, max_relative = 1e-4);
    assert_relative_eq!(spin.period().to_hours(), 24.0, max_relative = 1e-12);
}

#[test]
fn test_stopped_body_has_infinite_day() {
    assert!(!AngularVelocity::from_rad_per_sec(0.0).period().is_finite());
    assert!(!AngularVelocity::from_rad_per_sec(-1e-6).period().is_finite());
}
