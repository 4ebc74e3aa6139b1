//! Fail-fast configuration: an incomplete or contradictory registry is
//! rejected by `validate()` with a report naming every defect, before
//! any mapping call is attempted.

use wiremap::hierarchy::descriptor::{
    HierarchyDescriptor, HierarchyPair, VariantDescriptor, BASE_PAIR, DETAIL_PAIR, INNER_PAIR,
};
use wiremap::mapping::{profile, MappingRegistry, RuleId, VariantRef};
use wiremap::{ConfigurationError, Violation};

fn register_pair_bases(registry: &mut MappingRegistry) {
    for pair in [&BASE_PAIR, &INNER_PAIR] {
        registry
            .register(
                VariantRef::new(pair.model.name, pair.model.base.tag),
                VariantRef::new(pair.wire.name, pair.wire.base.tag),
                true,
            )
            .unwrap();
    }
}

fn register_detail_base(registry: &mut MappingRegistry) -> RuleId {
    registry
        .register(
            VariantRef::new(DETAIL_PAIR.model.name, DETAIL_PAIR.model.base.tag),
            VariantRef::new(DETAIL_PAIR.wire.name, DETAIL_PAIR.wire.base.tag),
            true,
        )
        .unwrap()
}

fn register_detail_derived(registry: &mut MappingRegistry, include_under: Option<RuleId>) {
    for derived in DETAIL_PAIR.model.derived {
        let source = VariantRef::new(DETAIL_PAIR.model.name, derived.tag);
        let target = VariantRef::new(DETAIL_PAIR.wire.name, derived.tag);
        registry.register(source, target, false).unwrap();
        if let Some(base) = include_under {
            registry.register_included(base, source, target).unwrap();
        }
    }
}

fn violations_of(err: ConfigurationError) -> Vec<Violation> {
    match err {
        ConfigurationError::Validation { violations } => violations,
        other => panic!("expected a validation report, got {:?}", other),
    }
}

#[test]
fn complete_profile_validates() {
    let registry = profile::build().unwrap();
    assert_eq!(registry.rule_count(), 5);
}

#[test]
fn missing_derived_rules_are_reported() {
    let mut registry = MappingRegistry::new();
    register_pair_bases(&mut registry);
    register_detail_base(&mut registry);

    let violations = violations_of(
        registry
            .validate(&profile::hierarchy_pairs())
            .unwrap_err(),
    );
    for tag in ["derivedA", "derivedB"] {
        assert!(
            violations
                .iter()
                .any(|v| matches!(v, Violation::MissingDerivedRule { variant, .. } if variant == tag)),
            "no MissingDerivedRule for {} in {:?}",
            tag,
            violations
        );
    }
}

#[test]
fn missing_base_rule_is_reported() {
    let mut registry = MappingRegistry::new();
    register_pair_bases(&mut registry);
    register_detail_derived(&mut registry, None);

    let violations = violations_of(
        registry
            .validate(&profile::hierarchy_pairs())
            .unwrap_err(),
    );
    assert!(violations.iter().any(|v| matches!(
        v,
        Violation::MissingBaseRule { hierarchy, .. } if hierarchy == "detail_model"
    )));
}

#[test]
fn derived_rules_must_be_included_under_the_base_rule() {
    let mut registry = MappingRegistry::new();
    register_pair_bases(&mut registry);
    register_detail_base(&mut registry);
    register_detail_derived(&mut registry, None);

    let violations = violations_of(
        registry
            .validate(&profile::hierarchy_pairs())
            .unwrap_err(),
    );
    for tag in ["derivedA", "derivedB"] {
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::NotIncluded { variant, .. } if variant == tag)));
    }
}

#[test]
fn undeclared_inclusions_are_reported() {
    let mut registry = MappingRegistry::new();
    register_pair_bases(&mut registry);
    let base = register_detail_base(&mut registry);
    register_detail_derived(&mut registry, Some(base));
    registry
        .register_included(
            base,
            VariantRef::new("detail_model", "derivedC"),
            VariantRef::new("detail_dto", "derivedC"),
        )
        .unwrap();

    let violations = violations_of(
        registry
            .validate(&profile::hierarchy_pairs())
            .unwrap_err(),
    );
    assert!(violations
        .iter()
        .any(|v| matches!(v, Violation::ExtraIncluded { .. })));
}

#[test]
fn conflicting_rules_are_reported() {
    let mut registry = MappingRegistry::new();
    register_pair_bases(&mut registry);
    let base = register_detail_base(&mut registry);
    register_detail_derived(&mut registry, Some(base));
    // Second rule for the same source variant with a different target.
    registry
        .register(
            VariantRef::new("detail_model", "derivedA"),
            VariantRef::new("detail_dto", "derivedB"),
            false,
        )
        .unwrap();

    let violations = violations_of(
        registry
            .validate(&profile::hierarchy_pairs())
            .unwrap_err(),
    );
    assert!(violations
        .iter()
        .any(|v| matches!(v, Violation::ConflictingRule { .. })));
}

const LOPSIDED_PAIR: HierarchyPair = HierarchyPair {
    model: HierarchyDescriptor {
        name: "lopsided_model",
        base: VariantDescriptor {
            tag: "base",
            own_fields: &["kept", "model_only"],
        },
        derived: &[],
    },
    wire: HierarchyDescriptor {
        name: "lopsided_dto",
        base: VariantDescriptor {
            tag: "base",
            own_fields: &["kept", "wire_only"],
        },
        derived: &[],
    },
};

#[test]
fn asymmetric_field_sets_are_rejected() {
    let mut registry = MappingRegistry::new();
    registry
        .register(
            VariantRef::new("lopsided_model", "base"),
            VariantRef::new("lopsided_dto", "base"),
            true,
        )
        .unwrap();

    let violations = violations_of(registry.validate(&[LOPSIDED_PAIR]).unwrap_err());
    assert!(violations.iter().any(|v| matches!(
        v,
        Violation::FieldMismatch { detail, .. }
            if detail.contains("model_only") && detail.contains("wire_only")
    )));
}

const CLASHING_TAGS_PAIR: HierarchyPair = HierarchyPair {
    model: HierarchyDescriptor {
        name: "clash_model",
        base: VariantDescriptor {
            tag: "base",
            own_fields: &["id"],
        },
        derived: &[
            VariantDescriptor {
                tag: "variant",
                own_fields: &["left"],
            },
            VariantDescriptor {
                tag: "variant",
                own_fields: &["right"],
            },
        ],
    },
    wire: HierarchyDescriptor {
        name: "clash_dto",
        base: VariantDescriptor {
            tag: "base",
            own_fields: &["id"],
        },
        derived: &[
            VariantDescriptor {
                tag: "variant",
                own_fields: &["left"],
            },
            VariantDescriptor {
                tag: "variant",
                own_fields: &["right"],
            },
        ],
    },
};

#[test]
fn duplicate_discriminator_tags_are_rejected() {
    let registry = MappingRegistry::new();
    let violations = violations_of(registry.validate(&[CLASHING_TAGS_PAIR]).unwrap_err());
    assert!(violations.iter().any(|v| matches!(
        v,
        Violation::DuplicateTag { tag, .. } if tag == "variant"
    )));
}

#[test]
fn all_violations_are_collected_into_one_report() {
    // Empty registry against the full pair set: every missing rule must
    // show up in the same report.
    let registry = MappingRegistry::new();
    let err = registry
        .validate(&profile::hierarchy_pairs())
        .unwrap_err();
    let report = err.report();
    let violations = violations_of(err);

    // Three missing base rules plus two missing derived rules.
    assert_eq!(violations.len(), 5);
    assert!(report.contains("5 violation(s)"));
}
