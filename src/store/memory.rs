use super::{RecipeStore, check_key, sort_recipes};
use crate::error::StoreError;
use crate::recipe::Recipe;
use crate::schema::RecipeRecord;
use ahash::AHashMap;
use tracing::info;

/// Keeps records in memory, keyed by `(owner, id)`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: AHashMap<(String, String), RecipeRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored record, exactly as it would be written to a document store.
    pub fn record(&self, owner: &str, id: &str) -> Option<&RecipeRecord> {
        self.records.get(&(owner.to_string(), id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecipeStore for MemoryStore {
    fn save(&mut self, owner: &str, recipe: &mut Recipe) -> Result<(), StoreError> {
        check_key(owner)?;
        check_key(&recipe.id)?;
        let record = recipe.to_record()?;
        self.records
            .insert((owner.to_string(), recipe.id.clone()), record);
        recipe.mark_persisted();
        info!(owner, recipe_id = %recipe.id, "saved recipe");
        Ok(())
    }

    fn load(&self, owner: &str, id: &str) -> Result<Recipe, StoreError> {
        let record = self.record(owner, id).ok_or_else(|| StoreError::NotFound {
            owner: owner.to_string(),
            id: id.to_string(),
        })?;
        Ok(Recipe::from_record(record)?)
    }

    fn list(&self, owner: &str) -> Result<Vec<Recipe>, StoreError> {
        let mut recipes = self
            .records
            .iter()
            .filter(|((record_owner, _), _)| record_owner == owner)
            .map(|(_, record)| Recipe::from_record(record))
            .collect::<Result<Vec<_>, _>>()?;
        sort_recipes(&mut recipes);
        Ok(recipes)
    }

    fn delete(&mut self, owner: &str, id: &str) -> Result<bool, StoreError> {
        let removed = self
            .records
            .remove(&(owner.to_string(), id.to_string()))
            .is_some();
        if removed {
            info!(owner, recipe_id = id, "deleted recipe");
        }
        Ok(removed)
    }
}
