//! # Mise - Recipe Model and Unit Engine
//!
//! **Mise** is the domain core of a personal recipe manager. It models recipes (title,
//! description, ingredients with unit-aware quantities, ordered steps) and takes care of the
//! parts that need to be exact:
//!
//! 1.  **Units**: a fixed catalog of US volume and weight units, plus per-recipe custom units
//!     ("pinch", "clove") that never convert to anything else.
//! 2.  **Conversion**: quantities convert between units of the same kind through each unit's
//!     conversion factor, with no rounding.
//! 3.  **Rendering**: amounts display as kitchen fractions (`1 ½ cup`) when they land on a
//!     quarter or a third, and as plain decimals otherwise.
//! 4.  **Versioned records**: recipes are persisted as JSON-compatible records. Records written
//!     before custom and weight units existed (schema `"1"`) still load, and everything is
//!     written back as schema `"2"`.
//!
//! Storage lives behind the [`store::RecipeStore`] trait; the model itself performs no I/O.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mise::prelude::*;
//! use mise::units::ids;
//!
//! fn main() -> Result<()> {
//!     let mut recipe = Recipe::new("Pancakes", "Sunday breakfast");
//!     recipe.add_custom_unit(UnitDescriptor::custom("pinch", "pinch", "pinch")?)?;
//!
//!     let flour = Ingredient::new("flour", "all purpose", Quantity::new(1.5, ids::CUP)?);
//!     let salt = Ingredient::new("salt", "", Quantity::new(1.0, "pinch")?);
//!     let mix = Step::new("Whisk together", vec![flour.id.clone(), salt.id.clone()]);
//!     recipe.add_ingredient(flour)?;
//!     recipe.add_ingredient(salt)?;
//!     recipe.add_step(mix)?;
//!
//!     println!("{}", recipe.render());
//!
//!     let json = recipe.to_json()?;
//!     let loaded = Recipe::from_json(&json)?;
//!     assert!(loaded.is_persisted());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod prelude;
pub mod recipe;
pub mod schema;
pub mod store;
pub mod units;
