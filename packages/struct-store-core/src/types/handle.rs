//! Type handles and kinds.

/// Opaque, stable identifier for a registered type.
///
/// Handles are assigned sequentially at registration and never reused or
/// invalidated. A handle is only meaningful to the registry instance that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeHandle(pub(crate) u32);

impl TypeHandle {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw handle value, usable as a map key or index.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Kind of a registered type: one of the fixed primitives, or a struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    /// Nanosecond timestamp, stored as a 64-bit integer
    TimestampNs,
    Struct,
}
