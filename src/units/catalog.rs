use crate::error::UnitError;
use ahash::AHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Well-known catalog unit ids. These are persisted in recipe records and must never change.
pub mod ids {
    pub const TEASPOON: &str = "us-volume-tsp";
    pub const TABLESPOON: &str = "us-volume-tbsp";
    pub const CUP: &str = "us-volume-cup";
    pub const PINT: &str = "us-volume-pt";
    pub const QUART: &str = "us-volume-qt";
    pub const GALLON: &str = "us-volume-gal";
    pub const OUNCE: &str = "us-weight-oz";
    pub const POUND: &str = "us-weight-lb";
}

/// Id prefix shared by every catalog volume unit.
pub const VOLUME_PREFIX: &str = "us-volume-";
/// Id prefix shared by every catalog weight unit.
pub const WEIGHT_PREFIX: &str = "us-weight-";

/// The family a unit belongs to. Only units of the same kind convert into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    UsVolume,
    UsWeight,
    /// Per-recipe units such as "pinch" or "clove". Never convertible to catalog units.
    Arbitrary,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::UsVolume => write!(f, "US volume"),
            UnitKind::UsWeight => write!(f, "US weight"),
            UnitKind::Arbitrary => write!(f, "arbitrary"),
        }
    }
}

/// Describes a single measurement unit, either from the catalog or custom to one recipe.
///
/// `conversion_factor` is the number of base units of the same kind that one of this unit
/// equals (teaspoon for volume, ounce for weight). Custom units always carry a factor of 1.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDescriptor {
    pub id: String,
    pub kind: UnitKind,
    pub name: String,
    pub abbreviation: String,
    pub conversion_factor: f64,
}

impl UnitDescriptor {
    fn catalog(kind: UnitKind, name: &str, abbreviation: &str, conversion_factor: f64) -> Self {
        let prefix = match kind {
            UnitKind::UsWeight => WEIGHT_PREFIX,
            _ => VOLUME_PREFIX,
        };
        Self {
            id: format!("{}{}", prefix, abbreviation),
            kind,
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            conversion_factor,
        }
    }

    /// Creates a recipe-scoped custom unit.
    ///
    /// Fails with `UnitError::InvalidCustomUnit` if `id` is empty or collides with a catalog id.
    pub fn custom(
        id: impl Into<String>,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Result<Self, UnitError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UnitError::InvalidCustomUnit {
                id,
                reason: "custom unit ids must not be empty".to_string(),
            });
        }
        if UnitCatalog::by_id(&id).is_some() {
            return Err(UnitError::InvalidCustomUnit {
                reason: "the id is reserved by the unit catalog".to_string(),
                id,
            });
        }
        Ok(Self {
            id,
            kind: UnitKind::Arbitrary,
            name: name.into(),
            abbreviation: abbreviation.into(),
            conversion_factor: 1.0,
        })
    }

    pub fn is_custom(&self) -> bool {
        self.kind == UnitKind::Arbitrary
    }
}

// Declaration order is the order shown in unit pickers.
static CATALOG: LazyLock<Vec<UnitDescriptor>> = LazyLock::new(|| {
    vec![
        UnitDescriptor::catalog(UnitKind::UsVolume, "teaspoon", "tsp", 1.0),
        UnitDescriptor::catalog(UnitKind::UsVolume, "tablespoon", "tbsp", 3.0),
        UnitDescriptor::catalog(UnitKind::UsVolume, "cup", "cup", 48.0),
        UnitDescriptor::catalog(UnitKind::UsVolume, "pint", "pt", 96.0),
        UnitDescriptor::catalog(UnitKind::UsVolume, "quart", "qt", 192.0),
        UnitDescriptor::catalog(UnitKind::UsVolume, "gallon", "gal", 768.0),
        UnitDescriptor::catalog(UnitKind::UsWeight, "ounce", "oz", 1.0),
        UnitDescriptor::catalog(UnitKind::UsWeight, "pound", "lb", 16.0),
    ]
});

static CATALOG_INDEX: LazyLock<AHashMap<&'static str, usize>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, unit)| (unit.id.as_str(), i))
        .collect()
});

/// Process-wide, read-only registry of the well-known units.
pub struct UnitCatalog;

impl UnitCatalog {
    /// Every catalog unit, in declaration order.
    pub fn all() -> &'static [UnitDescriptor] {
        &CATALOG
    }

    /// All catalog units of `kind`, in declaration order.
    pub fn by_kind(kind: UnitKind) -> Vec<&'static UnitDescriptor> {
        CATALOG.iter().filter(|unit| unit.kind == kind).collect()
    }

    /// Looks up a catalog unit by id. `None` is a normal outcome for custom ids.
    pub fn by_id(id: &str) -> Option<&'static UnitDescriptor> {
        CATALOG_INDEX.get(id).map(|&i| &CATALOG[i])
    }

    /// Looks up a catalog unit by id, falling back to its abbreviation (`"tbsp"`, `"lb"`).
    pub fn find(token: &str) -> Option<&'static UnitDescriptor> {
        Self::by_id(token).or_else(|| CATALOG.iter().find(|unit| unit.abbreviation == token))
    }
}
