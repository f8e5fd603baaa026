use crate::schema::StepRecord;
use uuid::Uuid;

/// One instruction in a recipe, with the ingredients it uses listed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub id: String,
    pub description: String,
    pub ingredient_ids: Vec<String>,
}

impl Step {
    pub fn new(description: impl Into<String>, ingredient_ids: Vec<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), description, ingredient_ids)
    }

    pub fn with_id(
        id: impl Into<String>,
        description: impl Into<String>,
        ingredient_ids: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            ingredient_ids,
        }
    }

    pub fn uses(&self, ingredient_id: &str) -> bool {
        self.ingredient_ids.iter().any(|id| id == ingredient_id)
    }

    pub fn to_record(&self) -> StepRecord {
        StepRecord {
            id: Some(self.id.clone()),
            description: self.description.clone(),
            ingredients: self.ingredient_ids.clone(),
        }
    }

    // Steps are laid out the same way in every schema version.
    pub fn from_record(record: &StepRecord) -> Self {
        Self {
            id: record
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            description: record.description.clone(),
            ingredient_ids: record.ingredients.clone(),
        }
    }
}
