//! Transfer (wire) hierarchy.
//!
//! The serde declarations here fix the wire contract: member names are
//! a fixed table (not derived from the Rust identifiers), the
//! polymorphic detail hierarchy is internally tagged under `$type` with
//! each variant's own fields emitted before the base fields, unknown
//! members are ignored on decode, and absent members take the field's
//! default.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default for timestamp members absent from the wire text.
/// `DateTime<FixedOffset>` has no `Default`, so serde needs one spelled
/// out.
pub fn epoch_timestamp() -> DateTime<FixedOffset> {
    Utc.timestamp_opt(0, 0)
        .unwrap()
        .with_timezone(&FixedOffset::east_opt(0).unwrap())
}

/// Outer wire object. Optional members encode as `null` when absent,
/// matching the model side's optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BaseDto {
    #[serde(rename = "IntProperty", default)]
    pub int_property: i32,
    #[serde(rename = "StringProperty", default)]
    pub string_property: String,
    #[serde(rename = "InnerProperty", default)]
    pub inner_property: Option<InnerDto>,
    #[serde(rename = "DerivedProperty", default)]
    pub derived_property: Option<DetailDto>,
}

/// Embedded value object on the wire side.
///
/// The timestamp field is `DateTime<FixedOffset>` rather than
/// `DateTime<Utc>` so UTC values serialize with the explicit `+00:00`
/// offset instead of `Z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerDto {
    #[serde(rename = "GuidProperty", default)]
    pub guid_property: Uuid,
    #[serde(rename = "StringProperty", default)]
    pub string_property: String,
    #[serde(rename = "DateOnlyProperty", default)]
    pub date_only_property: NaiveDate,
    #[serde(rename = "DateTimeOffsetProperty", default = "epoch_timestamp")]
    pub date_time_offset_property: DateTime<FixedOffset>,
}

impl Default for InnerDto {
    fn default() -> Self {
        Self {
            guid_property: Uuid::nil(),
            string_property: String::new(),
            date_only_property: NaiveDate::default(),
            date_time_offset_property: epoch_timestamp(),
        }
    }
}

/// Polymorphic detail hierarchy on the wire side.
///
/// Internally tagged: every encoded object carries the `$type` member
/// first, then the variant's own fields in declared order, then the
/// base field. The tag spelling here must stay in sync with the
/// descriptor table in [`crate::hierarchy::descriptor::DETAIL_PAIR`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum DetailDto {
    #[serde(rename = "base")]
    Base {
        #[serde(rename = "GuidProperty", default)]
        guid_property: Uuid,
    },
    #[serde(rename = "derivedA")]
    DerivedA {
        #[serde(rename = "AProperty", default)]
        a_property: String,
        #[serde(rename = "GuidProperty", default)]
        guid_property: Uuid,
    },
    #[serde(rename = "derivedB")]
    DerivedB {
        #[serde(rename = "BProperty", default)]
        b_property: String,
        #[serde(rename = "BGuidProperty", default)]
        b_guid_property: Uuid,
        #[serde(rename = "GuidProperty", default)]
        guid_property: Uuid,
    },
}

impl DetailDto {
    /// Tag identifying the runtime variant this value was constructed as.
    pub fn variant_tag(&self) -> &'static str {
        match self {
            DetailDto::Base { .. } => "base",
            DetailDto::DerivedA { .. } => "derivedA",
            DetailDto::DerivedB { .. } => "derivedB",
        }
    }
}
