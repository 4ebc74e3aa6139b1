//! Internal model hierarchy.
//!
//! Plain domain types with no serialization concerns; the wire spelling
//! of every field lives on the transfer side in
//! [`crate::hierarchy::wire`].

use chrono::{DateTime, FixedOffset, NaiveDate};
use uuid::Uuid;

/// The outer model object. The polymorphic detail and the inner value
/// object are optional; an absent value maps to an absent value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseModel {
    pub int_property: i32,
    pub string_property: String,
    pub inner_property: Option<InnerModel>,
    pub derived_property: Option<DetailModel>,
}

/// Embedded value object carried by [`BaseModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct InnerModel {
    pub guid_property: Uuid,
    pub string_property: String,
    pub date_only_property: NaiveDate,
    pub date_time_offset_property: DateTime<FixedOffset>,
}

/// The polymorphic detail hierarchy: one case per concrete variant.
///
/// A derived case carries its own fields plus the base case's fields;
/// the discriminant records the most specific variant the value was
/// constructed as.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailModel {
    Base {
        guid_property: Uuid,
    },
    DerivedA {
        a_property: String,
        guid_property: Uuid,
    },
    DerivedB {
        b_property: String,
        b_guid_property: Uuid,
        guid_property: Uuid,
    },
}

impl DetailModel {
    /// Tag identifying the runtime variant this value was constructed as.
    pub fn variant_tag(&self) -> &'static str {
        match self {
            DetailModel::Base { .. } => "base",
            DetailModel::DerivedA { .. } => "derivedA",
            DetailModel::DerivedB { .. } => "derivedB",
        }
    }
}
