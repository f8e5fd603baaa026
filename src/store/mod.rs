//! Storage collaborators for recipes, partitioned by owner email.
//!
//! The recipe model itself never performs I/O. A `RecipeStore` takes fully built recipes,
//! persists their current-version records, and hands back decoded recipes.

use crate::error::StoreError;
use crate::recipe::Recipe;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Persists recipe records under an owner partition.
pub trait RecipeStore {
    /// Writes `recipe` for `owner`. The recipe is marked persisted once the write succeeds.
    fn save(&mut self, owner: &str, recipe: &mut Recipe) -> Result<(), StoreError>;

    /// Loads a single recipe. Fails with `StoreError::NotFound` when it does not exist.
    fn load(&self, owner: &str, id: &str) -> Result<Recipe, StoreError>;

    /// All recipes belonging to `owner`, ordered by title and then id.
    fn list(&self, owner: &str) -> Result<Vec<Recipe>, StoreError>;

    /// Deletes by id. Returns whether anything was removed.
    fn delete(&mut self, owner: &str, id: &str) -> Result<bool, StoreError>;
}

/// Rejects owners and ids that cannot serve as a single path component.
pub(crate) fn check_key(key: &str) -> Result<(), StoreError> {
    let invalid = key.trim().is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if invalid {
        Err(StoreError::InvalidKey(key.to_string()))
    } else {
        Ok(())
    }
}

pub(crate) fn sort_recipes(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}
