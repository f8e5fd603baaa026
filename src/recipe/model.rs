use super::{Ingredient, Step};
use crate::error::{EditError, SchemaError, UnitError};
use crate::schema::{CustomUnitRecord, RecipeRecord, SchemaVersion};
use crate::units::{UnitCatalog, UnitDescriptor, UnitKind, UnitResolver};
use tracing::{debug, warn};
use uuid::Uuid;

/// The aggregate root: a recipe with its ingredients, steps and custom units.
///
/// A recipe starts out unsaved. It becomes persisted once a store acknowledges a write, or when
/// it is decoded from a record (which necessarily came out of storage). The flag never resets;
/// tracking unsaved edits is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub steps: Vec<Step>,
    pub ingredients: Vec<Ingredient>,
    pub custom_units: Vec<UnitDescriptor>,
    persisted: bool,
}

impl Recipe {
    /// Creates an empty, unsaved recipe with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, description)
    }

    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            steps: Vec::new(),
            ingredients: Vec::new(),
            custom_units: Vec::new(),
            persisted: false,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Records that a store has acknowledged a write of this recipe.
    pub fn mark_persisted(&mut self) {
        self.persisted = true;
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }

    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    // --- Custom units ---

    /// Registers a recipe-scoped unit.
    ///
    /// The unit must be arbitrary with a factor of 1 and a non-empty id that is neither a catalog
    /// id nor already registered.
    pub fn add_custom_unit(&mut self, unit: UnitDescriptor) -> Result<(), EditError> {
        check_custom_unit(&unit)?;
        if self.custom_units.iter().any(|existing| existing.id == unit.id) {
            return Err(UnitError::InvalidCustomUnit {
                id: unit.id,
                reason: "a custom unit with this id already exists".to_string(),
            }
            .into());
        }
        self.custom_units.push(unit);
        Ok(())
    }

    /// Removes a custom unit, refusing while any ingredient is still measured in it.
    pub fn remove_custom_unit(&mut self, id: &str) -> Result<Option<UnitDescriptor>, EditError> {
        let Some(index) = self.custom_units.iter().position(|unit| unit.id == id) else {
            return Ok(None);
        };
        if let Some(ingredient) = self.ingredients.iter().find(|i| i.amount.unit_id == id) {
            return Err(EditError::UnitInUse {
                unit_id: id.to_string(),
                ingredient_id: ingredient.id.clone(),
            });
        }
        Ok(Some(self.custom_units.remove(index)))
    }

    // --- Ingredients ---

    /// Appends an ingredient whose unit must resolve within this recipe.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<(), EditError> {
        if self.units_for(&ingredient.amount.unit_id).is_none() {
            return Err(EditError::UnknownUnit(ingredient.amount.unit_id));
        }
        self.ingredients.push(ingredient);
        Ok(())
    }

    /// Removes an ingredient and every step reference to it.
    pub fn remove_ingredient(&mut self, id: &str) -> Option<Ingredient> {
        let index = self.ingredients.iter().position(|i| i.id == id)?;
        for step in &mut self.steps {
            step.ingredient_ids.retain(|ingredient_id| ingredient_id != id);
        }
        Some(self.ingredients.remove(index))
    }

    pub fn move_ingredient(&mut self, from: usize, to: usize) -> bool {
        move_item(&mut self.ingredients, from, to)
    }

    /// Re-expresses one ingredient's quantity in `target_unit_id`.
    pub fn convert_ingredient(
        &mut self,
        ingredient_id: &str,
        target_unit_id: &str,
    ) -> Result<(), EditError> {
        let index = self
            .ingredients
            .iter()
            .position(|i| i.id == ingredient_id)
            .ok_or_else(|| EditError::IngredientNotFound(ingredient_id.to_string()))?;
        let converted = self.ingredients[index]
            .amount
            .convert_in(&*self, target_unit_id)?;
        self.ingredients[index].amount = converted;
        Ok(())
    }

    // --- Steps ---

    /// Appends a step. Every ingredient it references must already be part of the recipe.
    pub fn add_step(&mut self, step: Step) -> Result<(), EditError> {
        if let Some(missing) = step
            .ingredient_ids
            .iter()
            .find(|id| self.ingredient(id).is_none())
        {
            return Err(EditError::DanglingIngredient {
                step_id: step.id.clone(),
                ingredient_id: missing.clone(),
            });
        }
        self.steps.push(step);
        Ok(())
    }

    pub fn remove_step(&mut self, id: &str) -> Option<Step> {
        let index = self.steps.iter().position(|s| s.id == id)?;
        Some(self.steps.remove(index))
    }

    pub fn move_step(&mut self, from: usize, to: usize) -> bool {
        move_item(&mut self.steps, from, to)
    }

    /// `(step id, ingredient id)` pairs whose ingredient is not part of this recipe.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        self.steps
            .iter()
            .flat_map(|step| {
                step.ingredient_ids
                    .iter()
                    .filter(move |id| self.ingredient(id).is_none())
                    .map(move |id| (step.id.as_str(), id.as_str()))
            })
            .collect()
    }

    // --- Serialization ---

    /// Encodes the recipe in the current schema version.
    pub fn to_record(&self) -> Result<RecipeRecord, UnitError> {
        let custom_units = self
            .custom_units
            .iter()
            .map(|unit| -> Result<CustomUnitRecord, UnitError> {
                check_custom_unit(unit)?;
                Ok(CustomUnitRecord {
                    id: unit.id.clone(),
                    name: unit.name.clone(),
                    abbreviation: unit.abbreviation.clone(),
                })
            })
            .collect::<Result<Vec<_>, UnitError>>()?;

        Ok(RecipeRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            steps: self.steps.iter().map(Step::to_record).collect(),
            ingredients: self.ingredients.iter().map(Ingredient::to_record).collect(),
            custom_units: Some(custom_units),
            version: Some(SchemaVersion::CURRENT.to_string()),
        })
    }

    /// Decodes a persisted record of any supported schema version.
    pub fn from_record(record: &RecipeRecord) -> Result<Self, SchemaError> {
        let version = SchemaVersion::from_tag(record.version.as_deref())?;

        // Custom units go first: version 2 ingredients may be measured in them.
        let custom_units = match version {
            SchemaVersion::V1 => Vec::new(),
            SchemaVersion::V2 => record
                .custom_units
                .iter()
                .flatten()
                .map(|unit| {
                    UnitDescriptor::custom(
                        unit.id.clone(),
                        unit.name.clone(),
                        unit.abbreviation.clone(),
                    )
                })
                .collect::<Result<Vec<_>, UnitError>>()?,
        };

        let mut recipe = Recipe {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            steps: record.steps.iter().map(Step::from_record).collect(),
            ingredients: Vec::new(),
            custom_units,
            persisted: true,
        };

        // The partially built recipe is the unit context for its own ingredients.
        let ingredients = record
            .ingredients
            .iter()
            .map(|ingredient| Ingredient::from_record(ingredient, version, &recipe))
            .collect::<Result<Vec<_>, SchemaError>>()?;
        recipe.ingredients = ingredients;

        let dangling = recipe.dangling_references();
        if !dangling.is_empty() {
            warn!(
                recipe_id = %recipe.id,
                count = dangling.len(),
                "recipe has steps referencing missing ingredients"
            );
        }
        debug!(
            recipe_id = %recipe.id,
            version = %version,
            ingredients = recipe.ingredients.len(),
            steps = recipe.steps.len(),
            custom_units = recipe.custom_units.len(),
            "decoded recipe record"
        );

        Ok(recipe)
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Self::from_record(&RecipeRecord::from_json(json)?)
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        self.to_record()?.to_json()
    }
}

impl UnitResolver for Recipe {
    /// Catalog units shadow custom units of the same id.
    fn units_for(&self, id: &str) -> Option<&UnitDescriptor> {
        UnitCatalog::by_id(id).or_else(|| self.custom_units.iter().find(|unit| unit.id == id))
    }
}

fn check_custom_unit(unit: &UnitDescriptor) -> Result<(), UnitError> {
    if unit.kind != UnitKind::Arbitrary {
        return Err(UnitError::InvalidCustomUnit {
            id: unit.id.clone(),
            reason: format!("custom units must be arbitrary, not {}", unit.kind),
        });
    }
    if unit.conversion_factor != 1.0 {
        return Err(UnitError::InvalidCustomUnit {
            id: unit.id.clone(),
            reason: format!(
                "custom units have a conversion factor of 1, not {}",
                unit.conversion_factor
            ),
        });
    }
    // Same id rules as a unit rebuilt from its persisted record.
    UnitDescriptor::custom(unit.id.as_str(), unit.name.as_str(), unit.abbreviation.as_str())?;
    Ok(())
}

fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
