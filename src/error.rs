use thiserror::Error;

/// Errors raised while constructing units and quantities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Invalid custom unit '{id}': {reason}")]
    InvalidCustomUnit { id: String, reason: String },

    #[error("Invalid amount {0}: quantities must be finite and non-negative")]
    InvalidAmount(f64),
}

/// Errors raised when converting a quantity between units.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Unit '{0}' could not be resolved")]
    UnresolvedUnit(String),

    #[error("Cannot convert '{from}' ({from_kind}) to '{to}' ({to_kind})")]
    IncompatibleKinds {
        from: String,
        from_kind: String,
        to: String,
        to_kind: String,
    },
}

/// Errors that can occur while decoding a persisted recipe record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Unsupported recipe schema version '{0}'")]
    UnsupportedVersion(String),

    #[error("Unit reference '{units}' does not resolve under schema version {version}")]
    MalformedUnitReference { units: String, version: String },

    #[error("Ingredient '{ingredient_id}' has no '{field}' field")]
    MissingAmount {
        ingredient_id: String,
        field: String,
    },

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error("Failed to parse recipe JSON: {0}")]
    Json(String),
}

/// Errors raised by in-memory recipe edits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Unit '{0}' is neither a catalog unit nor one of this recipe's custom units")]
    UnknownUnit(String),

    #[error("Ingredient '{0}' is not part of this recipe")]
    IngredientNotFound(String),

    #[error("Step '{step_id}' references ingredient '{ingredient_id}', which is not part of this recipe")]
    DanglingIngredient {
        step_id: String,
        ingredient_id: String,
    },

    #[error("Custom unit '{unit_id}' is still used by ingredient '{ingredient_id}'")]
    UnitInUse {
        unit_id: String,
        ingredient_id: String,
    },

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors reported by a `RecipeStore` implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Recipe '{id}' not found for owner '{owner}'")]
    NotFound { owner: String, id: String },

    #[error("'{0}' cannot be used as a storage key")]
    InvalidKey(String),

    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Unit(#[from] UnitError),
}
