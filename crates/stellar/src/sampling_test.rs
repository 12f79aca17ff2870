use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::sampling::{random_field_star, random_star, sample_mass_kroupa, sample_power_law};

#[test]
fn sample_power_law_respects_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..100 {
        let sample = sample_power_law(0.5, 10.0, -2.3, &mut rng);
        assert!(sample >= 0.5, "Sample {} should be >= 0.5", sample);
        assert!(sample <= 10.0, "Sample {} should be <= 10.0", sample);
    }
}

#[test]
fn kroupa_masses_are_mostly_dwarfs() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let samples: Vec<f64> = (0..1000).map(|_| sample_mass_kroupa(&mut rng, 2.0)).collect();

    assert!(samples.iter().all(|m| (0.08..=2.0).contains(m)));
    let dwarfs = samples.iter().filter(|m| **m < 0.5).count();
    assert!(dwarfs > 700, "expected mostly M dwarfs, got {dwarfs}");
}

#[test]
fn kroupa_respects_small_caps() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    for _ in 0..200 {
        let mass = sample_mass_kroupa(&mut rng, 0.4);
        assert!(mass <= 0.4 + 1e-12);
    }
}

#[test]
fn random_star_is_sun_like() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..50 {
        let star = random_star(&mut rng);
        assert_eq!(star.mass_ratio(), 1.0);
        let age = star.age.to_years();
        assert!((1.0e9..6.0e9).contains(&age));
    }
}

#[test]
fn random_field_star_is_not_older_than_its_lifetime() {
    let mut rng = ChaChaRng::seed_from_u64(1234);
    for _ in 0..100 {
        let star = random_field_star(&mut rng, 1.5);
        assert!(star.age.to_years() >= 1.0e9);
        assert!(star.age.to_years() <= star.life().to_years().max(1.0e9 + 1.0));
    }
}

#[test]
fn same_seed_same_star() {
    let a = random_field_star(&mut ChaChaRng::seed_from_u64(99), 2.0);
    let b = random_field_star(&mut ChaChaRng::seed_from_u64(99), 2.0);
    assert_eq!(a, b);
}
