pub mod mapper;
pub mod profile;
pub mod registry;
pub mod types;

pub use mapper::PolymorphicMapper;
pub use registry::{MappingRegistry, ValidatedRegistry};
pub use types::{Direction, MappingRule, RuleId, VariantRef};
