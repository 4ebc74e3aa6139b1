//! wiremap translates instances between a parallel internal "model"
//! hierarchy and an external "transfer" (wire) hierarchy, preserving the
//! runtime variant of polymorphic fields, and encodes/decodes the wire
//! hierarchy as JSON carrying an explicit `$type` discriminator.
//!
//! The mapping rules are declared once at startup in a
//! [`mapping::MappingRegistry`], validated, and frozen; the
//! [`mapping::PolymorphicMapper`] and the [`codec`] functions then operate
//! against the frozen registry without further locking or mutation.

pub mod codec;
pub mod error;
pub mod hierarchy;
pub mod mapping;

// Re-export the commonly used types at the crate root
pub use error::{ConfigurationError, DecodeError, MappingError, Violation};
pub use hierarchy::model::{BaseModel, DetailModel, InnerModel};
pub use hierarchy::wire::{BaseDto, DetailDto, InnerDto};
pub use mapping::{MappingRegistry, PolymorphicMapper, ValidatedRegistry};
