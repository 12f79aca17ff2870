mod tests {
    use approx::assert_relative_eq;

    use crate::time::{DAYS_PER_YEAR, HOURS_PER_YEAR, SECONDS_PER_YEAR, Time};

    #[test]
    fn test_time_conversions() {
        let year = Time::from_years(1.0);
        assert_relative_eq!(year.to_seconds(), SECONDS_PER_YEAR);
        assert_relative_eq!(year.to_days(), DAYS_PER_YEAR);
        assert_relative_eq!(Time::from_seconds(SECONDS_PER_YEAR).to_years(), 1.0);

        let day = Time::from_hours(24.0);
        assert_relative_eq!(day.to_days(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(day.to_years(), 24.0 / HOURS_PER_YEAR);
    }

    #[test]
    fn test_stellar_ages() {
        let age = Time::from_gyr(4.6);
        assert_relative_eq!(age.to_years(), 4.6e9);
        assert_relative_eq!(age.to_gyr(), 4.6);
        assert_relative_eq!(age / Time::from_gyr(2.0), 2.3);
    }

    #[test]
    fn test_infinite_lifetime() {
        let forever = Time::infinite();
        assert!(!forever.is_finite());
        assert!(Time::from_gyr(13.8) < forever);
    }
}
