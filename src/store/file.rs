use super::{RecipeStore, check_key, sort_recipes};
use crate::error::StoreError;
use crate::recipe::Recipe;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Stores each recipe as pretty-printed JSON at `<root>/<owner>/<id>.json`.
///
/// Listing skips files that fail to decode, logging a warning for each.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn owner_dir(&self, owner: &str) -> Result<PathBuf, StoreError> {
        check_key(owner)?;
        Ok(self.root.join(owner))
    }

    fn recipe_path(&self, owner: &str, id: &str) -> Result<PathBuf, StoreError> {
        check_key(id)?;
        Ok(self.owner_dir(owner)?.join(format!("{}.json", id)))
    }
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> StoreError {
    StoreError::Io(format!("Could not {} '{}': {}", action, path.display(), e))
}

impl RecipeStore for FileStore {
    fn save(&mut self, owner: &str, recipe: &mut Recipe) -> Result<(), StoreError> {
        let path = self.recipe_path(owner, &recipe.id)?;
        let json = recipe.to_record()?.to_json()?;

        let dir = self.owner_dir(owner)?;
        fs::create_dir_all(&dir).map_err(|e| io_error("create directory", &dir, e))?;

        // Write beside the target and rename so readers never see a partial file.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|e| io_error("write", &staging, e))?;
        if let Err(e) = fs::rename(&staging, &path) {
            let _ = fs::remove_file(&staging);
            return Err(io_error("replace", &path, e));
        }

        recipe.mark_persisted();
        info!(owner, recipe_id = %recipe.id, path = %path.display(), "saved recipe");
        Ok(())
    }

    fn load(&self, owner: &str, id: &str) -> Result<Recipe, StoreError> {
        let path = self.recipe_path(owner, id)?;
        let json = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound {
                owner: owner.to_string(),
                id: id.to_string(),
            },
            _ => io_error("read", &path, e),
        })?;
        Ok(Recipe::from_json(&json)?)
    }

    fn list(&self, owner: &str) -> Result<Vec<Recipe>, StoreError> {
        let dir = self.owner_dir(owner)?;
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("list", &dir, e)),
        };

        let mut recipes = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| io_error("list", &dir, e))?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            debug!(path = %path.display(), "loading recipe file");
            let json = fs::read_to_string(&path).map_err(|e| io_error("read", &path, e))?;
            match Recipe::from_json(&json) {
                Ok(recipe) => recipes.push(recipe),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable recipe file")
                }
            }
        }
        sort_recipes(&mut recipes);
        Ok(recipes)
    }

    fn delete(&mut self, owner: &str, id: &str) -> Result<bool, StoreError> {
        let path = self.recipe_path(owner, id)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(owner, recipe_id = id, "deleted recipe");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error("delete", &path, e)),
        }
    }
}
