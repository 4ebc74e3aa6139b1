pub mod descriptor;
pub mod model;
pub mod wire;

// Re-export all types at the hierarchy module level
pub use descriptor::{HierarchyDescriptor, HierarchyPair, VariantDescriptor};
pub use model::{BaseModel, DetailModel, InnerModel};
pub use wire::{BaseDto, DetailDto, InnerDto};
