//! Core vocabulary of the mapping registry.

use std::fmt;

/// Identifies one variant of one hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantRef {
    pub hierarchy: &'static str,
    pub variant: &'static str,
}

impl VariantRef {
    pub const fn new(hierarchy: &'static str, variant: &'static str) -> Self {
        Self { hierarchy, variant }
    }
}

impl fmt::Display for VariantRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.hierarchy, self.variant)
    }
}

/// Selects which side of a rule acts as the source: forward is
/// model-to-wire, reverse is wire-to-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

/// Handle returned by `register`, used to attach included derived rules
/// to a base rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleId(pub(crate) usize);

/// One declared correspondence between a model variant and a wire
/// variant. Rules are bidirectional; `Direction` selects which side is
/// the source for a given lookup.
#[derive(Debug, Clone)]
pub struct MappingRule {
    pub source: VariantRef,
    pub target: VariantRef,
    /// Whether this rule maps the base variants of a hierarchy pair
    pub is_base: bool,
    /// Derived rules declared as participating under this base rule
    pub included: Vec<(VariantRef, VariantRef)>,
}
