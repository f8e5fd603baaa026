use super::catalog::{UnitCatalog, UnitDescriptor, UnitKind, VOLUME_PREFIX};
use super::resolver::UnitResolver;
use crate::error::{ConversionError, SchemaError, UnitError};
use crate::schema::{QuantityRecord, SchemaVersion};

/// Fractions that render as a glyph, keyed by the remainder rounded to whole percent.
const FRACTION_GLYPHS: [(i64, char); 5] = [(25, '¼'), (33, '⅓'), (50, '½'), (67, '⅔'), (75, '¾')];

/// An amount paired with a unit id.
///
/// The unit is referenced by id, not owned; it resolves against the catalog or the custom
/// units of the recipe the quantity belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit_id: String,
}

impl Quantity {
    /// Creates a quantity, rejecting negative and non-finite amounts.
    pub fn new(amount: f64, unit_id: impl Into<String>) -> Result<Self, UnitError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(UnitError::InvalidAmount(amount));
        }
        Ok(Self {
            amount,
            unit_id: unit_id.into(),
        })
    }

    /// Converts into `target`, resolving the current unit against the catalog.
    ///
    /// Fails when the current unit is not a catalog unit or when the kinds differ.
    pub fn convert_to(&self, target: &UnitDescriptor) -> Result<Quantity, ConversionError> {
        let source = UnitCatalog::by_id(&self.unit_id)
            .ok_or_else(|| ConversionError::UnresolvedUnit(self.unit_id.clone()))?;
        self.convert_between(source, target)
    }

    /// Converts into the unit `target_id`, resolving both ends through `resolver`.
    ///
    /// Custom units convert only to themselves.
    pub fn convert_in(
        &self,
        resolver: &impl UnitResolver,
        target_id: &str,
    ) -> Result<Quantity, ConversionError> {
        let source = resolver
            .units_for(&self.unit_id)
            .ok_or_else(|| ConversionError::UnresolvedUnit(self.unit_id.clone()))?;
        let target = resolver
            .units_for(target_id)
            .ok_or_else(|| ConversionError::UnresolvedUnit(target_id.to_string()))?;
        self.convert_between(source, target)
    }

    fn convert_between(
        &self,
        source: &UnitDescriptor,
        target: &UnitDescriptor,
    ) -> Result<Quantity, ConversionError> {
        let compatible = source.kind == target.kind
            && (source.kind != UnitKind::Arbitrary || source.id == target.id);
        if !compatible {
            return Err(ConversionError::IncompatibleKinds {
                from: source.id.clone(),
                from_kind: source.kind.to_string(),
                to: target.id.clone(),
                to_kind: target.kind.to_string(),
            });
        }

        Ok(Quantity {
            amount: self.amount * source.conversion_factor / target.conversion_factor,
            unit_id: target.id.clone(),
        })
    }

    /// Renders the quantity for display, e.g. `"1 ½ cup"`.
    ///
    /// Unknown units fall back to displaying their raw id.
    pub fn render(&self, resolver: &impl UnitResolver) -> String {
        format!(
            "{} {}",
            format_amount(self.amount),
            resolver.abbreviation_for(&self.unit_id)
        )
    }

    pub fn to_record(&self) -> QuantityRecord {
        QuantityRecord {
            quantity: self.amount,
            units: self.unit_id.clone(),
        }
    }

    /// Decodes a persisted quantity, resolving `units` the way `version` wrote it.
    pub fn from_record(
        record: &QuantityRecord,
        version: SchemaVersion,
        resolver: &impl UnitResolver,
    ) -> Result<Self, SchemaError> {
        let unit = match version {
            // Version 1 stored bare volume abbreviations.
            SchemaVersion::V1 => UnitCatalog::by_id(&format!("{}{}", VOLUME_PREFIX, record.units))
                .filter(|unit| unit.kind == UnitKind::UsVolume),
            SchemaVersion::V2 => resolver.units_for(&record.units),
        };
        let unit = unit.ok_or_else(|| SchemaError::MalformedUnitReference {
            units: record.units.clone(),
            version: version.to_string(),
        })?;

        Ok(Quantity::new(record.quantity, unit.id.clone())?)
    }
}

/// Formats an amount as a whole number plus a fraction glyph when the remainder lands on
/// ¼, ⅓, ½, ⅔ or ¾; otherwise prints the raw decimal.
pub fn format_amount(amount: f64) -> String {
    let whole = amount.trunc();
    let percent = ((amount - whole) * 100.0).round() as i64;
    let glyph = FRACTION_GLYPHS
        .iter()
        .find(|(p, _)| *p == percent)
        .map(|(_, glyph)| *glyph);

    match glyph {
        Some(glyph) if whole == 0.0 => glyph.to_string(),
        Some(glyph) => format!("{} {}", whole as i64, glyph),
        None => format!("{}", amount),
    }
}
