//! Mapping registry: built once by explicit registration calls during
//! startup, validated against the declared hierarchy pairs, then frozen.
//!
//! The two lifecycle phases are separate types. [`MappingRegistry`] is
//! the mutable builder; [`MappingRegistry::validate`] consumes it and
//! returns a [`ValidatedRegistry`] that nothing can mutate, so sharing
//! it across mapping and codec calls needs no locking.

use std::collections::HashMap;

use log::{debug, info};

use crate::error::{ConfigResult, ConfigurationError, MappingError, MappingResult, Violation};
use crate::hierarchy::descriptor::HierarchyPair;

use super::types::{Direction, MappingRule, RuleId, VariantRef};

/// Mutable rule collection for the registration phase.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    rules: Vec<MappingRule>,
}

impl MappingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule relating one model variant to one wire variant.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::DuplicateRule` if a rule for this
    /// (source, target) pair is already registered.
    pub fn register(
        &mut self,
        source: VariantRef,
        target: VariantRef,
        is_base: bool,
    ) -> ConfigResult<RuleId> {
        if self
            .rules
            .iter()
            .any(|r| r.source == source && r.target == target)
        {
            return Err(ConfigurationError::duplicate_rule(source, target));
        }
        debug!("registered mapping rule {} -> {}", source, target);
        self.rules.push(MappingRule {
            source,
            target,
            is_base,
            included: Vec::new(),
        });
        Ok(RuleId(self.rules.len() - 1))
    }

    /// Declares that a derived rule participates under the given base
    /// rule, so the mapper's dynamic-dispatch search space is known
    /// ahead of time.
    pub fn register_included(
        &mut self,
        base: RuleId,
        derived_source: VariantRef,
        derived_target: VariantRef,
    ) -> ConfigResult<()> {
        let rule = self
            .rules
            .get_mut(base.0)
            .ok_or(ConfigurationError::UnknownRule { id: base.0 })?;
        if !rule.is_base {
            return Err(ConfigurationError::NotABaseRule { id: base.0 });
        }
        rule.included.push((derived_source, derived_target));
        Ok(())
    }

    /// Checks the registered rules against the declared hierarchy pairs
    /// and freezes the registry.
    ///
    /// Every pair must have a base rule, a rule for each derived
    /// variant included under the base rule (no missing, no extra),
    /// distinct rule source sides per direction, bijective field
    /// correspondence per rule, and pairwise distinct discriminator
    /// tags. All violations are collected into a single
    /// `ConfigurationError::Validation` report; validation never stops
    /// at the first defect.
    pub fn validate(self, pairs: &[HierarchyPair]) -> ConfigResult<ValidatedRegistry> {
        let mut violations = Vec::new();

        for pair in pairs {
            check_pair(&self.rules, pair, &mut violations);
        }
        check_conflicts(&self.rules, &mut violations);

        if !violations.is_empty() {
            return Err(ConfigurationError::Validation { violations });
        }

        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            forward.insert(rule.source, idx);
            reverse.insert(rule.target, idx);
        }

        info!("mapping registry validated: {} rules", self.rules.len());
        Ok(ValidatedRegistry {
            rules: self.rules,
            forward,
            reverse,
        })
    }
}

/// Frozen, read-only rule set shared by all mapping and codec calls.
#[derive(Debug)]
pub struct ValidatedRegistry {
    rules: Vec<MappingRule>,
    forward: HashMap<VariantRef, usize>,
    reverse: HashMap<VariantRef, usize>,
}

impl ValidatedRegistry {
    /// Looks up the rule whose source side for `direction` is exactly
    /// `variant`. O(1); there is no fallback to a base rule.
    pub fn require(&self, variant: VariantRef, direction: Direction) -> MappingResult<&MappingRule> {
        let idx = match direction {
            Direction::Forward => self.forward.get(&variant),
            Direction::Reverse => self.reverse.get(&variant),
        };
        idx.map(|&i| &self.rules[i]).ok_or_else(|| {
            MappingError::unregistered_variant(variant.hierarchy, variant.variant, direction)
        })
    }

    pub fn contains(&self, variant: VariantRef, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.forward.contains_key(&variant),
            Direction::Reverse => self.reverse.contains_key(&variant),
        }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

fn check_pair(rules: &[MappingRule], pair: &HierarchyPair, violations: &mut Vec<Violation>) {
    check_tags(pair, violations);

    let model_base = VariantRef::new(pair.model.name, pair.model.base.tag);
    let wire_base = VariantRef::new(pair.wire.name, pair.wire.base.tag);

    let base_rule = rules
        .iter()
        .find(|r| r.source == model_base && r.target == wire_base);
    match base_rule {
        Some(_) => check_fields(
            pair.model.name,
            pair.model.base.tag,
            pair.model.base.own_fields,
            pair.wire.base.own_fields,
            violations,
        ),
        None => violations.push(Violation::MissingBaseRule {
            hierarchy: pair.model.name.to_string(),
            variant: pair.model.base.tag.to_string(),
        }),
    }

    for derived in pair.model.derived {
        let source = VariantRef::new(pair.model.name, derived.tag);
        let rule = rules.iter().find(|r| r.source == source);
        let rule = match rule {
            Some(rule) => rule,
            None => {
                violations.push(Violation::MissingDerivedRule {
                    hierarchy: pair.model.name.to_string(),
                    variant: derived.tag.to_string(),
                });
                continue;
            }
        };

        if let Some(base_rule) = base_rule {
            if !base_rule.included.contains(&(rule.source, rule.target)) {
                violations.push(Violation::NotIncluded {
                    hierarchy: pair.model.name.to_string(),
                    variant: derived.tag.to_string(),
                });
            }
        }

        let wire_variant = if rule.target.hierarchy == pair.wire.name {
            pair.wire.variant(rule.target.variant)
        } else {
            None
        };
        match wire_variant {
            Some(wire_variant) => check_fields(
                pair.model.name,
                derived.tag,
                derived.own_fields,
                wire_variant.own_fields,
                violations,
            ),
            None => violations.push(Violation::FieldMismatch {
                hierarchy: pair.model.name.to_string(),
                variant: derived.tag.to_string(),
                detail: format!(
                    "target {} is not a variant of {}",
                    rule.target, pair.wire.name
                ),
            }),
        }
    }

    // A base rule must not include variants the hierarchy does not declare.
    if let Some(base_rule) = base_rule {
        for (included_source, _) in &base_rule.included {
            let declared = pair
                .model
                .derived
                .iter()
                .any(|d| d.tag == included_source.variant)
                && included_source.hierarchy == pair.model.name;
            if !declared {
                violations.push(Violation::ExtraIncluded {
                    hierarchy: pair.model.name.to_string(),
                    variant: included_source.to_string(),
                });
            }
        }
    }
}

fn check_tags(pair: &HierarchyPair, violations: &mut Vec<Violation>) {
    for side in [&pair.model, &pair.wire] {
        let tags: Vec<_> = side.tags().collect();
        for (i, tag) in tags.iter().enumerate() {
            if tags[..i].contains(tag) {
                violations.push(Violation::DuplicateTag {
                    hierarchy: side.name.to_string(),
                    tag: tag.to_string(),
                });
            }
        }
    }
}

/// Bijective field correspondence: same logical names on both sides, no
/// duplicates. The same rule set serves forward and reverse mapping, so
/// one symmetric check covers both directions.
fn check_fields(
    hierarchy: &str,
    variant: &str,
    model_fields: &[&str],
    wire_fields: &[&str],
    violations: &mut Vec<Violation>,
) {
    let mismatch = |detail: String| Violation::FieldMismatch {
        hierarchy: hierarchy.to_string(),
        variant: variant.to_string(),
        detail,
    };

    for (side, fields) in [("model", model_fields), ("wire", wire_fields)] {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                violations.push(mismatch(format!("{} declares {} twice", side, field)));
            }
        }
    }

    let model_only: Vec<_> = model_fields
        .iter()
        .filter(|f| !wire_fields.contains(f))
        .collect();
    let wire_only: Vec<_> = wire_fields
        .iter()
        .filter(|f| !model_fields.contains(f))
        .collect();
    if !model_only.is_empty() || !wire_only.is_empty() {
        violations.push(mismatch(format!(
            "model-only fields {:?}, wire-only fields {:?}",
            model_only, wire_only
        )));
    }
}

fn check_conflicts(rules: &[MappingRule], violations: &mut Vec<Violation>) {
    let mut by_source: HashMap<VariantRef, VariantRef> = HashMap::new();
    let mut by_target: HashMap<VariantRef, VariantRef> = HashMap::new();

    for rule in rules {
        if let Some(first) = by_source.get(&rule.source) {
            violations.push(Violation::ConflictingRule {
                source: rule.source.to_string(),
                first: first.to_string(),
                second: rule.target.to_string(),
                direction: Direction::Forward,
            });
        } else {
            by_source.insert(rule.source, rule.target);
        }

        if let Some(first) = by_target.get(&rule.target) {
            violations.push(Violation::ConflictingRule {
                source: rule.target.to_string(),
                first: first.to_string(),
                second: rule.source.to_string(),
                direction: Direction::Reverse,
            });
        } else {
            by_target.insert(rule.target, rule.source);
        }
    }
}
