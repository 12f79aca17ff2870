//! Tests for the gas table

use approx::assert_relative_eq;

use crate::gas::{Gas, HELIUM, MOL_NITROGEN, WATER_VAPOR};

#[test]
fn table_is_sorted_by_weight_within_the_elements() {
    let elements = &Gas::ALL[..8];
    for pair in elements.windows(2) {
        assert!(pair[0].weight() < pair[1].weight(), "{:?}", pair);
    }
}

#[test]
fn symbols_round_trip() {
    for gas in Gas::ALL {
        assert_eq!(Gas::from_symbol(gas.symbol()), Some(gas));
    }
    assert_eq!(Gas::from_symbol("Unobtainium"), None);
}

#[test]
fn named_weights_match_the_table() {
    assert_relative_eq!(Gas::Helium.weight(), HELIUM, max_relative = 0.01);
    assert_relative_eq!(Gas::Water.weight(), WATER_VAPOR);
    assert_relative_eq!(2.0 * Gas::Nitrogen.weight(), MOL_NITROGEN, max_relative = 0.01);
}

#[test]
fn oxygen_limit_is_four_hundred_mmhg() {
    let limit = Gas::Oxygen.max_inspired_pressure().unwrap();
    assert_relative_eq!(limit.to_mmhg(), 400.0, max_relative = 1e-9);
}

#[test]
fn water_and_hydrogen_are_never_toxic() {
    assert!(Gas::Water.max_inspired_pressure().is_none());
    assert!(Gas::Hydrogen.max_inspired_pressure().is_none());
}

#[test]
fn boiling_points() {
    assert_relative_eq!(Gas::Water.boiling_point().to_kelvin(), 373.16);
    assert!(Gas::Helium.boiling_point() < Gas::Hydrogen.boiling_point());
}

#[test]
fn display_uses_the_full_name() {
    assert_eq!(Gas::CarbonDioxide.to_string(), "Carbon Dioxide");
}
