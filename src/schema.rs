//! Persisted recipe record shapes and the schema versions they come in.
//!
//! Records are plain serde structs that mirror the JSON documents exchanged with storage. They
//! carry no invariants of their own: [`crate::recipe::Recipe::from_record`] validates them and
//! resolves every unit reference before anything reaches the in-memory model.
//!
//! Two schema versions exist:
//!
//! * `"1"`: ingredient amounts live under `volumeAmount` and name their unit by bare catalog
//!   abbreviation (`"tsp"`). There are no custom units. Records without a `version` tag are
//!   version 1.
//! * `"2"`: ingredient amounts live under `amount` and name their unit by full id, which may be
//!   a catalog id or one of the record's `customUnits`.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of record versions this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    V1,
    V2,
}

impl SchemaVersion {
    /// The version every record is written with.
    pub const CURRENT: SchemaVersion = SchemaVersion::V2;

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::V1 => "1",
            SchemaVersion::V2 => "2",
        }
    }

    /// Reads an optional version tag; a missing tag predates versioning and means `"1"`.
    pub fn from_tag(tag: Option<&str>) -> Result<Self, SchemaError> {
        tag.map_or(Ok(SchemaVersion::V1), str::parse::<SchemaVersion>)
    }

    /// The record field that holds an ingredient's quantity under this version.
    pub fn amount_field(&self) -> &'static str {
        match self {
            SchemaVersion::V1 => "volumeAmount",
            SchemaVersion::V2 => "amount",
        }
    }
}

impl FromStr for SchemaVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(SchemaVersion::V1),
            "2" => Ok(SchemaVersion::V2),
            other => Err(SchemaError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a quantity is persisted: `{ quantity, units }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuantityRecord {
    pub quantity: f64,
    pub units: String,
}

/// A recipe-scoped custom unit. Kind and conversion factor are implicit and never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomUnitRecord {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Version 2 quantity slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<QuantityRecord>,
    /// Version 1 quantity slot, volume only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_amount: Option<QuantityRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StepRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<StepRecord>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_units: Option<Vec<CustomUnitRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl RecipeRecord {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::Json(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(|e| SchemaError::Json(e.to_string()))
    }
}
