//! Static shape declarations for the mapped hierarchies.
//!
//! Each hierarchy is a closed set: one base variant plus zero or more
//! derived variants, every variant carrying a unique discriminator tag
//! and the list of logical field names it adds on top of the base.
//! Registry validation checks the registered rules against these
//! declarations, and the codec reads its tag table from them.

/// One concrete variant of a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// Stable discriminator tag, unique within the hierarchy
    pub tag: &'static str,
    /// Logical names of the fields this variant adds, in declared order
    pub own_fields: &'static [&'static str],
}

/// A closed hierarchy: the base variant and its derived variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyDescriptor {
    pub name: &'static str,
    pub base: VariantDescriptor,
    pub derived: &'static [VariantDescriptor],
}

impl HierarchyDescriptor {
    /// Looks up a variant by its discriminator tag.
    pub fn variant(&self, tag: &str) -> Option<&VariantDescriptor> {
        if self.base.tag == tag {
            return Some(&self.base);
        }
        self.derived.iter().find(|v| v.tag == tag)
    }

    /// All discriminator tags of the hierarchy, base first.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.base.tag).chain(self.derived.iter().map(|v| v.tag))
    }

    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }
}

/// A model hierarchy paired with its wire counterpart.
///
/// Both sides list their fields under the same logical names; the wire
/// member spelling (`GuidProperty` and friends) is a codec concern fixed
/// by the serde declarations in [`crate::hierarchy::wire`].
#[derive(Debug, Clone, Copy)]
pub struct HierarchyPair {
    pub model: HierarchyDescriptor,
    pub wire: HierarchyDescriptor,
}

/// The outer object pair. Not polymorphic, so the hierarchy is its base
/// variant alone.
pub const BASE_PAIR: HierarchyPair = HierarchyPair {
    model: HierarchyDescriptor {
        name: "base_model",
        base: VariantDescriptor {
            tag: "base",
            own_fields: &[
                "int_property",
                "string_property",
                "inner_property",
                "derived_property",
            ],
        },
        derived: &[],
    },
    wire: HierarchyDescriptor {
        name: "base_dto",
        base: VariantDescriptor {
            tag: "base",
            own_fields: &[
                "int_property",
                "string_property",
                "inner_property",
                "derived_property",
            ],
        },
        derived: &[],
    },
};

/// The embedded value-object pair, mapped independently of the outer
/// object.
pub const INNER_PAIR: HierarchyPair = HierarchyPair {
    model: HierarchyDescriptor {
        name: "inner_model",
        base: VariantDescriptor {
            tag: "inner",
            own_fields: &[
                "guid_property",
                "string_property",
                "date_only_property",
                "date_time_offset_property",
            ],
        },
        derived: &[],
    },
    wire: HierarchyDescriptor {
        name: "inner_dto",
        base: VariantDescriptor {
            tag: "inner",
            own_fields: &[
                "guid_property",
                "string_property",
                "date_only_property",
                "date_time_offset_property",
            ],
        },
        derived: &[],
    },
};

/// The polymorphic detail pair: base plus the two derived variants.
pub const DETAIL_PAIR: HierarchyPair = HierarchyPair {
    model: HierarchyDescriptor {
        name: "detail_model",
        base: VariantDescriptor {
            tag: "base",
            own_fields: &["guid_property"],
        },
        derived: &[
            VariantDescriptor {
                tag: "derivedA",
                own_fields: &["a_property"],
            },
            VariantDescriptor {
                tag: "derivedB",
                own_fields: &["b_property", "b_guid_property"],
            },
        ],
    },
    wire: HierarchyDescriptor {
        name: "detail_dto",
        base: VariantDescriptor {
            tag: "base",
            own_fields: &["guid_property"],
        },
        derived: &[
            VariantDescriptor {
                tag: "derivedA",
                own_fields: &["a_property"],
            },
            VariantDescriptor {
                tag: "derivedB",
                own_fields: &["b_property", "b_guid_property"],
            },
        ],
    },
};
