//! Common test utilities for building recipes and records.
use mise::prelude::*;
use mise::units::ids;

/// A version 1 record: no `version` tag, amounts under `volumeAmount` with bare abbreviations.
#[allow(dead_code)]
pub const V1_RECIPE_JSON: &str = r#"{
    "id": "lemonade",
    "title": "Lemonade",
    "description": "Summer in a glass",
    "steps": [
        { "id": "s1", "description": "Dissolve the sugar", "ingredients": ["i2", "i3"] },
        { "id": "s2", "description": "Add the juice", "ingredients": ["i1"] }
    ],
    "ingredients": [
        { "id": "i1", "name": "lemon juice", "description": "fresh", "volumeAmount": { "quantity": 0.75, "units": "cup" } },
        { "id": "i2", "name": "sugar", "description": "", "volumeAmount": { "quantity": 2, "units": "tsp" } },
        { "id": "i3", "name": "water", "description": "cold", "volumeAmount": { "quantity": 1.5, "units": "qt" } }
    ]
}"#;

/// The same recipe as `V1_RECIPE_JSON`, written in schema version 2.
#[allow(dead_code)]
pub const V2_RECIPE_JSON: &str = r#"{
    "id": "lemonade",
    "title": "Lemonade",
    "description": "Summer in a glass",
    "steps": [
        { "id": "s1", "description": "Dissolve the sugar", "ingredients": ["i2", "i3"] },
        { "id": "s2", "description": "Add the juice", "ingredients": ["i1"] }
    ],
    "ingredients": [
        { "id": "i1", "name": "lemon juice", "description": "fresh", "amount": { "quantity": 0.75, "units": "us-volume-cup" } },
        { "id": "i2", "name": "sugar", "description": "", "amount": { "quantity": 2, "units": "us-volume-tsp" } },
        { "id": "i3", "name": "water", "description": "cold", "amount": { "quantity": 1.5, "units": "us-volume-qt" } }
    ],
    "customUnits": [],
    "version": "2"
}"#;

/// Builds a fresh, unsaved recipe that uses volume, weight and custom units.
///
/// Ingredients: 1½ cup flour, 2 tbsp sugar, 4 oz butter, 1 pinch salt.
/// Steps: whisk flour + salt, cream butter + sugar, combine everything.
#[allow(dead_code)]
pub fn create_pancake_recipe() -> Recipe {
    let mut recipe = Recipe::new("Pancakes", "Fluffy weekend pancakes");
    recipe
        .add_custom_unit(UnitDescriptor::custom("pinch", "pinch", "pinch").unwrap())
        .unwrap();

    let flour = ingredient("flour", 1.5, ids::CUP);
    let sugar = ingredient("sugar", 2.0, ids::TABLESPOON);
    let butter = ingredient("butter", 4.0, ids::OUNCE);
    let salt = ingredient("salt", 1.0, "pinch");

    let whisk = Step::new("Whisk the dry ingredients", vec![flour.id.clone(), salt.id.clone()]);
    let cream = Step::new("Cream the butter", vec![butter.id.clone(), sugar.id.clone()]);
    let combine = Step::new("Combine and rest for ten minutes", vec![]);

    for i in [flour, sugar, butter, salt] {
        recipe.add_ingredient(i).unwrap();
    }
    for s in [whisk, cream, combine] {
        recipe.add_step(s).unwrap();
    }
    recipe
}

/// An ingredient with a generated id and an empty description.
#[allow(dead_code)]
pub fn ingredient(name: &str, amount: f64, unit_id: &str) -> Ingredient {
    Ingredient::new(name, "", Quantity::new(amount, unit_id).unwrap())
}

/// Asserts two amounts are equal up to floating point noise.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} but got {}",
        expected,
        actual
    );
}
