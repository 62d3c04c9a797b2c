//! Type system: handles, kinds, struct-layout computation, and the registry.

mod handle;
mod layout;
mod registry;

pub use handle::{TypeHandle, TypeKind};
pub use layout::{align_up, StructLayout};
pub use registry::{FieldMeta, TypeMeta, TypeRegistry, NUM_PRIMITIVES};
