mod tests {
    use approx::assert_relative_eq;

    use crate::acceleration::{Acceleration, EARTH_ACCELERATION_CM_S2};

    #[test]
    fn test_earth_gravities() {
        let mars = Acceleration::from_cm_per_sec2(371.0);
        assert_relative_eq!(mars.to_earth_gravities(), 371.0 / EARTH_ACCELERATION_CM_S2);
        assert_relative_eq!(mars.to_meters_per_sec2(), 3.71);

        let heavy = Acceleration::from_earth_gravities(2.0);
        assert_relative_eq!(heavy.to_cm_per_sec2(), 1961.4, epsilon = 1e-9);
        assert_relative_eq!((heavy / 2.0).to_earth_gravities(), 1.0, epsilon = 1e-12);
    }
}
