use crate::error::SchemaError;
use crate::schema::{IngredientRecord, SchemaVersion};
use crate::units::{Quantity, UnitResolver};
use uuid::Uuid;

/// An ingredient line. Owned by its recipe; steps refer to it by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub description: String,
    pub amount: Quantity,
}

impl Ingredient {
    /// Creates an ingredient with a freshly generated id.
    pub fn new(name: impl Into<String>, description: impl Into<String>, amount: Quantity) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, description, amount)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        amount: Quantity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            amount,
        }
    }

    /// `"<quantity> <name>"`, e.g. `"2 tsp salt"`.
    pub fn render(&self, resolver: &impl UnitResolver) -> String {
        format!("{} {}", self.amount.render(resolver), self.name)
    }

    /// Always writes the current layout, with the quantity under `amount`.
    pub fn to_record(&self) -> IngredientRecord {
        IngredientRecord {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            amount: Some(self.amount.to_record()),
            volume_amount: None,
        }
    }

    /// Decodes an ingredient written under `version`.
    ///
    /// `resolver` is the recipe being decoded; its custom units must already be in place.
    pub fn from_record(
        record: &IngredientRecord,
        version: SchemaVersion,
        resolver: &impl UnitResolver,
    ) -> Result<Self, SchemaError> {
        let id = record
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let slot = match version {
            SchemaVersion::V1 => record.volume_amount.as_ref(),
            SchemaVersion::V2 => record.amount.as_ref(),
        };
        let quantity = slot.ok_or_else(|| SchemaError::MissingAmount {
            ingredient_id: id.clone(),
            field: version.amount_field().to_string(),
        })?;

        let amount = Quantity::from_record(quantity, version, resolver).inspect_err(|e| {
            tracing::warn!(ingredient_id = %id, error = %e, "ingredient unit did not resolve");
        })?;

        Ok(Self {
            id,
            name: record.name.clone(),
            description: record.description.clone(),
            amount,
        })
    }
}
