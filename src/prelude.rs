//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the mise crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use mise::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/recipe.json")?;
//! let recipe = Recipe::from_json(&json)?;
//!
//! for ingredient in &recipe.ingredients {
//!     println!("{}", ingredient.render(&recipe));
//! }
//! # Ok(())
//! # }
//! ```

// Units and quantities
pub use crate::units::{Quantity, UnitCatalog, UnitDescriptor, UnitKind, UnitResolver};

// Recipe model
pub use crate::recipe::{Ingredient, Recipe, Step};

// Persisted records
pub use crate::schema::{RecipeRecord, SchemaVersion};

// Storage
pub use crate::store::{FileStore, MemoryStore, RecipeStore};

// Error types
pub use crate::error::{ConversionError, EditError, SchemaError, StoreError, UnitError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
