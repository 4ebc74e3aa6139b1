//! Default registration profile for the shipped hierarchy pairs.
//!
//! The configuration boundary: a caller registers every rule and
//! included-derived relationship exactly once at startup, validates,
//! and shares the frozen registry for the rest of the process.

use log::info;

use crate::error::ConfigResult;
use crate::hierarchy::descriptor::{HierarchyPair, BASE_PAIR, DETAIL_PAIR, INNER_PAIR};

use super::registry::{MappingRegistry, ValidatedRegistry};
use super::types::VariantRef;

/// The hierarchy pairs the default profile maps.
pub fn hierarchy_pairs() -> [HierarchyPair; 3] {
    [BASE_PAIR, INNER_PAIR, DETAIL_PAIR]
}

/// Registers every rule for the shipped hierarchies and validates,
/// returning the frozen registry.
///
/// # Errors
///
/// Returns a `ConfigurationError` if registration or validation fails;
/// the caller must abort startup rather than proceed.
pub fn build() -> ConfigResult<ValidatedRegistry> {
    let mut registry = MappingRegistry::new();

    let (source, target) = base_refs(&BASE_PAIR);
    registry.register(source, target, true)?;

    let (source, target) = base_refs(&INNER_PAIR);
    registry.register(source, target, true)?;

    let (source, target) = base_refs(&DETAIL_PAIR);
    let detail_base = registry.register(source, target, true)?;
    for derived in DETAIL_PAIR.model.derived {
        let derived_source = VariantRef::new(DETAIL_PAIR.model.name, derived.tag);
        let derived_target = VariantRef::new(DETAIL_PAIR.wire.name, derived.tag);
        registry.register(derived_source, derived_target, false)?;
        registry.register_included(detail_base, derived_source, derived_target)?;
    }

    let registry = registry.validate(&hierarchy_pairs())?;
    info!("default mapping profile ready");
    Ok(registry)
}

fn base_refs(pair: &HierarchyPair) -> (VariantRef, VariantRef) {
    (
        VariantRef::new(pair.model.name, pair.model.base.tag),
        VariantRef::new(pair.wire.name, pair.wire.base.tag),
    )
}
