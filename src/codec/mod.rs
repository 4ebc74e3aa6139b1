//! Discriminator codec.
//!
//! Serializes wire values to JSON text carrying an explicit `$type`
//! member so a reader can reconstruct the correct variant without
//! external type information, and reads such text back, rejecting
//! missing or unknown discriminators before deserialization.
//!
//! Member order is a wire-format invariant: the discriminator first,
//! then the variant's own fields in declared order, then the base
//! fields in declared order. The serde declarations on the wire types
//! reproduce this order, so a fixed value always encodes to the same
//! text.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::hierarchy::descriptor::DETAIL_PAIR;
use crate::hierarchy::wire::{BaseDto, DetailDto, InnerDto};

/// Wire member carrying the variant tag of a polymorphic object. Must
/// stay in sync with the `#[serde(tag = "$type")]` declaration on
/// [`DetailDto`].
pub const DISCRIMINATOR: &str = "$type";

/// Types that know where discriminators occur in their wire shape.
pub trait Discriminated {
    /// Checks the discriminator members of `value`, including nested
    /// polymorphic members, against the known tag tables.
    fn verify_discriminators(value: &Value) -> DecodeResult<()>;
}

/// Encodes a wire value as compact canonical JSON text.
pub fn encode<T: Serialize>(value: &T) -> DecodeResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encodes a wire value as 2-space indented JSON text, with the same
/// member order as [`encode`].
pub fn encode_pretty<T: Serialize>(value: &T) -> DecodeResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decodes JSON text into a value of the expected hierarchy.
///
/// # Errors
///
/// `DecodeError::Json` for structurally malformed text,
/// `DecodeError::MissingDiscriminator` when a polymorphic object
/// carries no `$type` member, and `DecodeError::UnknownVariant` when
/// the tag is not one of the hierarchy's known tags. Members present in
/// the text but not declared on the resolved variant are ignored;
/// declared members absent from the text take their defaults.
pub fn decode<T>(text: &str) -> DecodeResult<T>
where
    T: DeserializeOwned + Discriminated,
{
    let value: Value = serde_json::from_str(text)?;
    T::verify_discriminators(&value)?;
    Ok(serde_json::from_value(value)?)
}

impl Discriminated for DetailDto {
    fn verify_discriminators(value: &Value) -> DecodeResult<()> {
        match value.get(DISCRIMINATOR) {
            None => Err(DecodeError::MissingDiscriminator),
            Some(Value::String(tag)) if DETAIL_PAIR.wire.is_known_tag(tag) => Ok(()),
            Some(Value::String(tag)) => Err(DecodeError::UnknownVariant { tag: tag.clone() }),
            Some(other) => Err(DecodeError::UnknownVariant {
                tag: other.to_string(),
            }),
        }
    }
}

impl Discriminated for InnerDto {
    // Plain composite: no discriminator anywhere in its shape.
    fn verify_discriminators(_value: &Value) -> DecodeResult<()> {
        Ok(())
    }
}

impl Discriminated for BaseDto {
    fn verify_discriminators(value: &Value) -> DecodeResult<()> {
        match value.get("DerivedProperty") {
            Some(member) if !member.is_null() => DetailDto::verify_discriminators(member),
            _ => Ok(()),
        }
    }
}
