use super::catalog::{UnitCatalog, UnitDescriptor};

/// A read-only view that maps unit ids to descriptors.
///
/// A `Recipe` implements this by consulting the catalog first and then its own custom units.
/// Quantity and ingredient parsing only ever see this narrow view of the recipe, which lets a
/// half-built recipe act as the lookup context while its ingredients are still being decoded.
pub trait UnitResolver {
    /// Resolves `id`, returning `None` when it is unknown in this context.
    fn units_for(&self, id: &str) -> Option<&UnitDescriptor>;

    /// The display abbreviation for `id`, or the id itself when it cannot be resolved.
    fn abbreviation_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.units_for(id)
            .map(|unit| unit.abbreviation.as_str())
            .unwrap_or(id)
    }
}

/// The bare catalog, for quantities that are known not to use custom units.
impl UnitResolver for UnitCatalog {
    fn units_for(&self, id: &str) -> Option<&UnitDescriptor> {
        UnitCatalog::by_id(id)
    }
}
