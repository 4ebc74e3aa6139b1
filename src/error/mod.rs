//! Unified error handling module
//!
//! Consolidates the three error kinds the crate can surface:
//! configuration defects caught while validating the mapping registry,
//! mapping failures for unregistered runtime variants, and wire decode
//! failures. None of these are transient; callers are expected to
//! propagate them, not retry.

use crate::mapping::types::Direction;
use thiserror::Error;

/// A single defect found while validating the mapping registry.
///
/// `validate()` never stops at the first defect; every violation is
/// collected into one [`ConfigurationError::Validation`] report so a
/// broken configuration can be fixed in one pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// No rule is registered for the hierarchy's base variant
    #[error("hierarchy {hierarchy}: no rule registered for base variant {variant}")]
    MissingBaseRule { hierarchy: String, variant: String },

    /// No rule is registered for a declared derived variant
    #[error("hierarchy {hierarchy}: no rule registered for derived variant {variant}")]
    MissingDerivedRule { hierarchy: String, variant: String },

    /// A derived rule exists but was never included under the base rule
    #[error("hierarchy {hierarchy}: derived rule for {variant} is not included under the base rule")]
    NotIncluded { hierarchy: String, variant: String },

    /// The base rule includes a variant the hierarchy does not declare
    #[error("hierarchy {hierarchy}: base rule includes {variant}, which is not a declared derived variant")]
    ExtraIncluded { hierarchy: String, variant: String },

    /// Two rules share a source side but map it to different targets
    #[error("conflicting rules: {source} maps to both {first} and {second} ({direction})")]
    ConflictingRule {
        // Raw identifier keeps thiserror from treating this field as the
        // error's `source()`; it is just the name of the conflicting rule.
        r#source: String,
        first: String,
        second: String,
        direction: Direction,
    },

    /// Field correspondence between the two sides is not bijective
    #[error("hierarchy {hierarchy}, variant {variant}: field correspondence is not bijective ({detail})")]
    FieldMismatch {
        hierarchy: String,
        variant: String,
        detail: String,
    },

    /// Two variants of one hierarchy declare the same discriminator tag
    #[error("hierarchy {hierarchy}: discriminator tag {tag} is declared more than once")]
    DuplicateTag { hierarchy: String, tag: String },
}

/// Errors raised while building or validating the mapping registry.
///
/// Fatal to startup: the process must not proceed with an unvalidated
/// registry.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// A rule for this (source, target) pair is already registered
    #[error("duplicate mapping rule: {source} -> {target} is already registered")]
    DuplicateRule { r#source: String, target: String },

    /// `register_included` was called with a rule id that does not exist
    #[error("no rule with id {id} exists")]
    UnknownRule { id: usize },

    /// `register_included` was called on a rule not registered as a base rule
    #[error("rule {id} is not a base rule and cannot include derived rules")]
    NotABaseRule { id: usize },

    /// The registry failed validation; every defect is listed
    #[error("mapping registry validation failed with {} violation(s)", .violations.len())]
    Validation { violations: Vec<Violation> },
}

impl ConfigurationError {
    pub fn duplicate_rule(source: impl ToString, target: impl ToString) -> Self {
        Self::DuplicateRule {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    /// Multi-line listing of every collected violation, one per line,
    /// suitable for a startup diagnostic.
    pub fn report(&self) -> String {
        match self {
            Self::Validation { violations } => {
                let lines: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                format!("{}\n{}", self, lines.join("\n"))
            }
            other => other.to_string(),
        }
    }
}

/// Errors raised by the polymorphic mapper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The value's runtime variant has no registered rule for the
    /// requested direction. There is no fallback to the base rule.
    #[error("no {direction} mapping rule registered for variant {variant} of hierarchy {hierarchy}")]
    UnregisteredVariant {
        hierarchy: String,
        variant: String,
        direction: Direction,
    },
}

impl MappingError {
    pub fn unregistered_variant(
        hierarchy: impl Into<String>,
        variant: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self::UnregisteredVariant {
            hierarchy: hierarchy.into(),
            variant: variant.into(),
            direction,
        }
    }
}

/// Errors raised by the discriminator codec.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A polymorphic wire object carries no `$type` member
    #[error("wire object is missing the \"$type\" discriminator member")]
    MissingDiscriminator,

    /// The discriminator is present but is not one of the hierarchy's
    /// known tags (or is not a string)
    #[error("unknown variant tag: {tag}")]
    UnknownVariant { tag: String },

    /// The wire text is structurally malformed JSON, or the value does
    /// not fit the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigurationError>;
pub type MappingResult<T> = Result<T, MappingError>;
pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_report_lists_every_violation() {
        let err = ConfigurationError::Validation {
            violations: vec![
                Violation::MissingBaseRule {
                    hierarchy: "detail_model".to_string(),
                    variant: "base".to_string(),
                },
                Violation::MissingDerivedRule {
                    hierarchy: "detail_model".to_string(),
                    variant: "derivedB".to_string(),
                },
            ],
        };
        let report = err.report();
        assert!(report.contains("2 violation(s)"));
        assert!(report.contains("base variant base"));
        assert!(report.contains("derived variant derivedB"));
    }
}
