//! Tests for the unit catalog, quantity conversion and fraction rendering.
mod common;
use common::*;
use mise::prelude::*;
use mise::units::{format_amount, ids};

fn cup(amount: f64) -> Quantity {
    Quantity::new(amount, ids::CUP).unwrap()
}

#[test]
fn test_catalog_by_kind_keeps_declaration_order() {
    let volume: Vec<&str> = UnitCatalog::by_kind(UnitKind::UsVolume)
        .iter()
        .map(|u| u.abbreviation.as_str())
        .collect();
    assert_eq!(volume, ["tsp", "tbsp", "cup", "pt", "qt", "gal"]);

    let weight: Vec<&str> = UnitCatalog::by_kind(UnitKind::UsWeight)
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(weight, [ids::OUNCE, ids::POUND]);

    assert!(UnitCatalog::by_kind(UnitKind::Arbitrary).is_empty());
}

#[test]
fn test_catalog_lookup() {
    let pound = UnitCatalog::by_id(ids::POUND).expect("pound is a catalog unit");
    assert_eq!(pound.kind, UnitKind::UsWeight);
    assert_eq!(pound.conversion_factor, 16.0);
    assert_eq!(pound.abbreviation, "lb");

    assert!(UnitCatalog::by_id("pinch").is_none());
    assert!(UnitCatalog::by_id("tsp").is_none());

    assert_eq!(UnitCatalog::find("tbsp").map(|u| u.id.as_str()), Some(ids::TABLESPOON));
    assert_eq!(UnitCatalog::find(ids::GALLON).map(|u| u.name.as_str()), Some("gallon"));
    assert!(UnitCatalog::find("smidgen").is_none());
}

#[test]
fn test_catalog_ids_follow_kind_prefix() {
    for unit in UnitCatalog::all() {
        let expected = match unit.kind {
            UnitKind::UsVolume => format!("us-volume-{}", unit.abbreviation),
            UnitKind::UsWeight => format!("us-weight-{}", unit.abbreviation),
            UnitKind::Arbitrary => panic!("catalog must not contain arbitrary units"),
        };
        assert_eq!(unit.id, expected);
    }
}

#[test]
fn test_custom_unit_rejects_catalog_id() {
    let err = UnitDescriptor::custom(ids::TEASPOON, "teaspoon", "tsp").unwrap_err();
    assert!(matches!(err, UnitError::InvalidCustomUnit { ref id, .. } if id == ids::TEASPOON));

    assert!(UnitDescriptor::custom("  ", "blank", "b").is_err());

    let pinch = UnitDescriptor::custom("pinch", "pinch", "pn").unwrap();
    assert_eq!(pinch.kind, UnitKind::Arbitrary);
    assert_eq!(pinch.conversion_factor, 1.0);
    assert!(pinch.is_custom());
}

#[test]
fn test_quantity_rejects_invalid_amounts() {
    assert_eq!(
        Quantity::new(-1.0, ids::CUP).unwrap_err(),
        UnitError::InvalidAmount(-1.0)
    );
    assert!(Quantity::new(f64::NAN, ids::CUP).is_err());
    assert!(Quantity::new(f64::INFINITY, ids::CUP).is_err());
    assert!(Quantity::new(0.0, ids::CUP).is_ok());
}

#[test]
fn test_tablespoon_is_three_teaspoons() {
    let tbsp = Quantity::new(1.0, ids::TABLESPOON).unwrap();
    let teaspoon = UnitCatalog::by_id(ids::TEASPOON).unwrap();
    assert_eq!(
        tbsp.convert_to(teaspoon).unwrap(),
        Quantity::new(3.0, ids::TEASPOON).unwrap()
    );
}

#[test]
fn test_conversion_factors() {
    let tbsp = UnitCatalog::by_id(ids::TABLESPOON).unwrap();
    assert_eq!(cup(1.0).convert_to(tbsp).unwrap().amount, 16.0);

    let ounce = UnitCatalog::by_id(ids::OUNCE).unwrap();
    let pounds = Quantity::new(2.0, ids::POUND).unwrap();
    assert_eq!(pounds.convert_to(ounce).unwrap().amount, 32.0);

    let gallon = UnitCatalog::by_id(ids::GALLON).unwrap();
    assert_eq!(cup(4.0).convert_to(gallon).unwrap().amount, 0.25);
}

#[test]
fn test_conversion_round_trips_within_kind() {
    for kind in [UnitKind::UsVolume, UnitKind::UsWeight] {
        let units = UnitCatalog::by_kind(kind);
        for a in &units {
            for b in &units {
                for q in [0.25, 1.0, 3.5, 17.0, 1.0 / 3.0] {
                    let start = Quantity::new(q, a.id.clone()).unwrap();
                    let back = start.convert_to(b).unwrap().convert_to(a).unwrap();
                    assert_eq!(back.unit_id, a.id);
                    assert_close(back.amount, q);
                }
            }
        }
    }
}

#[test]
fn test_conversion_across_kinds_fails() {
    let ounce = UnitCatalog::by_id(ids::OUNCE).unwrap();
    let err = cup(1.0).convert_to(ounce).unwrap_err();
    assert!(matches!(err, ConversionError::IncompatibleKinds { ref from, ref to, .. }
        if from == ids::CUP && to == ids::OUNCE));
}

#[test]
fn test_conversion_from_custom_unit_needs_recipe_context() {
    let pinch = Quantity::new(2.0, "pinch").unwrap();
    let teaspoon = UnitCatalog::by_id(ids::TEASPOON).unwrap();
    assert_eq!(
        pinch.convert_to(teaspoon).unwrap_err(),
        ConversionError::UnresolvedUnit("pinch".to_string())
    );

    let recipe = create_pancake_recipe();
    let same = pinch.convert_in(&recipe, "pinch").unwrap();
    assert_eq!(same, pinch);

    assert!(matches!(
        pinch.convert_in(&recipe, ids::TEASPOON),
        Err(ConversionError::IncompatibleKinds { .. })
    ));
    assert_eq!(
        pinch.convert_in(&recipe, "dash").unwrap_err(),
        ConversionError::UnresolvedUnit("dash".to_string())
    );
}

#[test]
fn test_custom_units_only_convert_to_themselves() {
    let mut recipe = Recipe::new("Stew", "");
    recipe
        .add_custom_unit(UnitDescriptor::custom("clove", "clove", "clove").unwrap())
        .unwrap();
    recipe
        .add_custom_unit(UnitDescriptor::custom("sprig", "sprig", "sprig").unwrap())
        .unwrap();

    let cloves = Quantity::new(3.0, "clove").unwrap();
    assert!(matches!(
        cloves.convert_in(&recipe, "sprig"),
        Err(ConversionError::IncompatibleKinds { .. })
    ));
}

#[test]
fn test_render_canonical_fractions() {
    assert_eq!(cup(0.25).render(&UnitCatalog), "¼ cup");
    assert_eq!(cup(0.5).render(&UnitCatalog), "½ cup");
    assert_eq!(cup(1.5).render(&UnitCatalog), "1 ½ cup");
    assert_eq!(cup(1.0).render(&UnitCatalog), "1 cup");
    assert_eq!(cup(2.75).render(&UnitCatalog), "2 ¾ cup");
    assert_eq!(cup(1.0 / 3.0).render(&UnitCatalog), "⅓ cup");
    assert_eq!(cup(2.0 / 3.0).render(&UnitCatalog), "⅔ cup");
}

#[test]
fn test_render_falls_back_to_decimal() {
    assert_eq!(cup(0.1).render(&UnitCatalog), "0.1 cup");
    assert_eq!(cup(3.2).render(&UnitCatalog), "3.2 cup");
    assert_eq!(cup(0.0).render(&UnitCatalog), "0 cup");
    assert_eq!(format_amount(12.0), "12");
    // A remainder of .999 rounds to 100%, which is not a canonical fraction.
    assert_eq!(format_amount(0.999), "0.999");
}

#[test]
fn test_render_uses_recipe_units() {
    let recipe = create_pancake_recipe();
    let pinch = Quantity::new(1.0, "pinch").unwrap();
    assert_eq!(pinch.render(&recipe), "1 pinch");

    // Unknown units display their raw id.
    let mystery = Quantity::new(2.0, "bogus").unwrap();
    assert_eq!(mystery.render(&UnitCatalog), "2 bogus");
    assert_eq!(recipe.abbreviation_for("bogus"), "bogus");
    assert_eq!(recipe.abbreviation_for(ids::POUND), "lb");
}
