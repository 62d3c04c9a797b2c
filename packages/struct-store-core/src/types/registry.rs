//! Runtime type registry.
//!
//! Primitives are installed once at construction and occupy the first
//! [`NUM_PRIMITIVES`] handles. User structs are appended afterwards; the
//! registry is append-only for its entire lifetime, so every handle it has
//! ever returned stays valid and keeps referring to the same metadata.

use crate::error::StoreError;

use super::handle::{TypeHandle, TypeKind};
use super::layout::StructLayout;

/// Number of primitive types installed at construction.
pub const NUM_PRIMITIVES: usize = 12;

const PRIMITIVES: [(&str, TypeKind, usize, usize); NUM_PRIMITIVES] = [
    ("u8", TypeKind::U8, 1, 1),
    ("u16", TypeKind::U16, 2, 2),
    ("u32", TypeKind::U32, 4, 4),
    ("u64", TypeKind::U64, 8, 8),
    ("i8", TypeKind::I8, 1, 1),
    ("i16", TypeKind::I16, 2, 2),
    ("i32", TypeKind::I32, 4, 4),
    ("i64", TypeKind::I64, 8, 8),
    ("f32", TypeKind::F32, 4, 4),
    ("f64", TypeKind::F64, 8, 8),
    ("bool", TypeKind::Bool, 1, 1),
    ("timestamp_ns", TypeKind::TimestampNs, 8, 8),
];

/// Field definition within a registered struct type.
#[derive(Debug, Clone)]
pub struct FieldMeta {
    /// Field name
    pub name: String,
    /// Handle of the field's type
    pub ty: TypeHandle,
    /// Byte offset within the owning struct's layout
    pub offset: usize,
}

/// Metadata for a registered type.
#[derive(Debug, Clone)]
pub struct TypeMeta {
    /// Type name (e.g. "f64", "Vec3")
    pub name: String,
    /// Kind of the type
    pub kind: TypeKind,
    /// Size in bytes, including trailing padding
    pub size: usize,
    /// Alignment requirement in bytes (power of two, >= 1)
    pub align: usize,
    /// Field definitions in declaration order; empty for primitives
    pub fields: Vec<FieldMeta>,
}

/// Append-only registry of type metadata, indexed by [`TypeHandle`].
#[derive(Debug)]
pub struct TypeRegistry {
    types: Vec<TypeMeta>,
}

impl TypeRegistry {
    /// Creates a registry with the primitive types pre-installed.
    ///
    /// `expected_types` reserves capacity for that many user registrations
    /// on top of the primitives.
    pub fn new(expected_types: usize) -> Self {
        let mut types = Vec::with_capacity(expected_types + NUM_PRIMITIVES);
        for (name, kind, size, align) in PRIMITIVES {
            types.push(TypeMeta {
                name: name.to_string(),
                kind,
                size,
                align,
                fields: Vec::new(),
            });
        }
        Self { types }
    }

    /// Registers a struct type from its ordered field list and returns its
    /// permanent handle.
    ///
    /// Every field's type must already be registered, which rules out
    /// forward references and cycles by construction. Struct-typed fields
    /// are allowed; they occupy their full registered size as a single
    /// opaque unit within the layout.
    pub fn register_struct(
        &mut self,
        name: &str,
        fields: &[(&str, TypeHandle)],
    ) -> Result<TypeHandle, StoreError> {
        let mut dims = Vec::with_capacity(fields.len());
        for (_, ty) in fields {
            let meta = self.meta_of(*ty)?;
            dims.push((meta.size, meta.align));
        }

        let layout = StructLayout::compute(dims);

        let field_metas = fields
            .iter()
            .zip(layout.offsets.iter())
            .map(|(&(field_name, ty), &offset)| FieldMeta {
                name: field_name.to_string(),
                ty,
                offset,
            })
            .collect();

        let handle = TypeHandle::new(self.types.len() as u32);
        self.types.push(TypeMeta {
            name: name.to_string(),
            kind: TypeKind::Struct,
            size: layout.size,
            align: layout.align,
            fields: field_metas,
        });

        tracing::debug!(
            name,
            handle = handle.raw(),
            size = layout.size,
            align = layout.align,
            "registered struct type"
        );

        Ok(handle)
    }

    /// Returns the metadata for a handle, failing fast on out-of-range
    /// handles instead of indexing out of bounds.
    pub fn meta_of(&self, handle: TypeHandle) -> Result<&TypeMeta, StoreError> {
        self.types
            .get(handle.0 as usize)
            .ok_or(StoreError::InvalidHandle {
                handle: handle.0,
                registered: self.types.len(),
            })
    }

    /// Size in bytes of the type behind `handle`.
    pub fn size_of(&self, handle: TypeHandle) -> Result<usize, StoreError> {
        Ok(self.meta_of(handle)?.size)
    }

    /// Alignment in bytes of the type behind `handle`.
    pub fn align_of(&self, handle: TypeHandle) -> Result<usize, StoreError> {
        Ok(self.meta_of(handle)?.align)
    }

    /// Kind of the type behind `handle`.
    pub fn kind_of(&self, handle: TypeHandle) -> Result<TypeKind, StoreError> {
        Ok(self.meta_of(handle)?.kind)
    }

    /// Number of registered types, primitives included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: the primitives are installed at construction.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
