//! Polymorphic mapper: converts values between the model and wire
//! hierarchies, resolving the runtime variant of polymorphic values
//! through the validated registry.

use crate::error::MappingResult;
use crate::hierarchy::descriptor::{BASE_PAIR, DETAIL_PAIR, INNER_PAIR};
use crate::hierarchy::model::{BaseModel, DetailModel, InnerModel};
use crate::hierarchy::wire::{BaseDto, DetailDto, InnerDto};

use super::registry::ValidatedRegistry;
use super::types::{Direction, VariantRef};

/// Converts values between the hierarchies. Pure: the source value is
/// never mutated, each call allocates a fresh target value, and all
/// state is the borrowed frozen registry.
pub struct PolymorphicMapper<'a> {
    registry: &'a ValidatedRegistry,
}

impl<'a> PolymorphicMapper<'a> {
    pub fn new(registry: &'a ValidatedRegistry) -> Self {
        Self { registry }
    }

    /// Maps the outer model object to its wire counterpart, recursing
    /// into the inner composite and the polymorphic detail field.
    /// `None` nested values map to `None`; that is not an error.
    pub fn base_to_wire(&self, model: &BaseModel) -> MappingResult<BaseDto> {
        self.registry.require(
            VariantRef::new(BASE_PAIR.model.name, BASE_PAIR.model.base.tag),
            Direction::Forward,
        )?;
        Ok(BaseDto {
            int_property: model.int_property,
            string_property: model.string_property.clone(),
            inner_property: model
                .inner_property
                .as_ref()
                .map(|inner| self.inner_to_wire(inner))
                .transpose()?,
            derived_property: model
                .derived_property
                .as_ref()
                .map(|detail| self.detail_to_wire(detail))
                .transpose()?,
        })
    }

    /// Reverse of [`Self::base_to_wire`].
    pub fn base_to_model(&self, dto: &BaseDto) -> MappingResult<BaseModel> {
        self.registry.require(
            VariantRef::new(BASE_PAIR.wire.name, BASE_PAIR.wire.base.tag),
            Direction::Reverse,
        )?;
        Ok(BaseModel {
            int_property: dto.int_property,
            string_property: dto.string_property.clone(),
            inner_property: dto
                .inner_property
                .as_ref()
                .map(|inner| self.inner_to_model(inner))
                .transpose()?,
            derived_property: dto
                .derived_property
                .as_ref()
                .map(|detail| self.detail_to_model(detail))
                .transpose()?,
        })
    }

    /// Maps the embedded value object. Not polymorphic, but still
    /// registry-checked and mapped independently of the outer object.
    pub fn inner_to_wire(&self, model: &InnerModel) -> MappingResult<InnerDto> {
        self.registry.require(
            VariantRef::new(INNER_PAIR.model.name, INNER_PAIR.model.base.tag),
            Direction::Forward,
        )?;
        Ok(InnerDto {
            guid_property: model.guid_property,
            string_property: model.string_property.clone(),
            date_only_property: model.date_only_property,
            date_time_offset_property: model.date_time_offset_property,
        })
    }

    /// Reverse of [`Self::inner_to_wire`].
    pub fn inner_to_model(&self, dto: &InnerDto) -> MappingResult<InnerModel> {
        self.registry.require(
            VariantRef::new(INNER_PAIR.wire.name, INNER_PAIR.wire.base.tag),
            Direction::Reverse,
        )?;
        Ok(InnerModel {
            guid_property: dto.guid_property,
            string_property: dto.string_property.clone(),
            date_only_property: dto.date_only_property,
            date_time_offset_property: dto.date_time_offset_property,
        })
    }

    /// Maps a polymorphic detail value to the wire variant matching its
    /// runtime variant. The lookup is by exact variant identity; a
    /// value whose variant has no rule is rejected rather than falling
    /// back to the base rule, which would silently drop derived-only
    /// fields.
    pub fn detail_to_wire(&self, model: &DetailModel) -> MappingResult<DetailDto> {
        self.registry.require(
            VariantRef::new(DETAIL_PAIR.model.name, model.variant_tag()),
            Direction::Forward,
        )?;
        Ok(match model {
            DetailModel::Base { guid_property } => DetailDto::Base {
                guid_property: *guid_property,
            },
            DetailModel::DerivedA {
                a_property,
                guid_property,
            } => DetailDto::DerivedA {
                a_property: a_property.clone(),
                guid_property: *guid_property,
            },
            DetailModel::DerivedB {
                b_property,
                b_guid_property,
                guid_property,
            } => DetailDto::DerivedB {
                b_property: b_property.clone(),
                b_guid_property: *b_guid_property,
                guid_property: *guid_property,
            },
        })
    }

    /// Reverse of [`Self::detail_to_wire`].
    pub fn detail_to_model(&self, dto: &DetailDto) -> MappingResult<DetailModel> {
        self.registry.require(
            VariantRef::new(DETAIL_PAIR.wire.name, dto.variant_tag()),
            Direction::Reverse,
        )?;
        Ok(match dto {
            DetailDto::Base { guid_property } => DetailModel::Base {
                guid_property: *guid_property,
            },
            DetailDto::DerivedA {
                a_property,
                guid_property,
            } => DetailModel::DerivedA {
                a_property: a_property.clone(),
                guid_property: *guid_property,
            },
            DetailDto::DerivedB {
                b_property,
                b_guid_property,
                guid_property,
            } => DetailModel::DerivedB {
                b_property: b_property.clone(),
                b_guid_property: *b_guid_property,
                guid_property: *guid_property,
            },
        })
    }
}
