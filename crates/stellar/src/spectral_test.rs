use approx::assert_relative_eq;

use crate::error::StellarError;
use crate::spectral::{SpectralClass, SpectralType};

// ============================================================================
// SpectralType
// ============================================================================

#[test]
fn spectral_type_display_round_trips() {
    for letter in ["O", "B", "A", "F", "G", "K", "M"] {
        let parsed: SpectralType = letter.parse().unwrap();
        assert_eq!(parsed.to_string(), letter);
    }
}

#[test]
fn spectral_types_order_hottest_first() {
    assert!(SpectralType::O < SpectralType::G);
    assert!(SpectralType::G < SpectralType::M);
}

// ============================================================================
// SpectralClass parsing
// ============================================================================

#[test]
fn parses_type_subtype_and_dwarf_suffix() {
    let class: SpectralClass = "G2V".parse().unwrap();
    assert_eq!(class.spectral_type, SpectralType::G);
    assert_relative_eq!(class.subtype, 2.0);

    let class: SpectralClass = "M4".parse().unwrap();
    assert_eq!(class.spectral_type, SpectralType::M);

    let class: SpectralClass = "K".parse().unwrap();
    assert_relative_eq!(class.subtype, 0.0);
}

#[test]
fn rejects_unknown_classes() {
    for bad in ["", "X2V", "G12", "Gx", "G2III"] {
        let result: Result<SpectralClass, _> = bad.parse();
        assert_eq!(
            result,
            Err(StellarError::UnknownSpectralClass(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
}

// ============================================================================
// Mass estimates
// ============================================================================

#[test]
fn g2_dwarf_is_about_one_solar_mass() {
    let class: SpectralClass = "G2V".parse().unwrap();
    let mass = class.main_sequence_mass().to_solar_masses();
    assert!((mass - 1.0).abs() < 0.05, "G2V mass {mass}");
}

#[test]
fn mass_decreases_along_the_sequence() {
    let classes = ["B5", "A0", "F5", "G0", "G8", "K5", "M0", "M9"];
    let masses: Vec<f64> = classes
        .iter()
        .map(|c| c.parse::<SpectralClass>().unwrap().main_sequence_mass().to_solar_masses())
        .collect();
    for pair in masses.windows(2) {
        assert!(pair[0] > pair[1], "{:?}", masses);
    }
    assert!(masses[masses.len() - 1] > 0.08);
}
