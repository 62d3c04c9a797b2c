//! Store facade: typed insert/query over the registry and columnar tables.

use std::collections::HashMap;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::record::Record;
use crate::storage::{FieldSlot, Table};
use crate::types::{TypeHandle, TypeRegistry};

/// In-process store binding typed values to columnar byte storage.
///
/// Owns the type registry and one lazily created [`Table`] per inserted
/// type. All mutation goes through `&mut self`: the store assumes exclusive
/// access from one logical thread of control, and the borrow checker
/// enforces it.
#[derive(Debug)]
pub struct Store {
    registry: TypeRegistry,
    tables: HashMap<TypeHandle, Table>,
    config: StoreConfig,
}

impl Store {
    pub const U8: TypeHandle = TypeHandle::new(0);
    pub const U16: TypeHandle = TypeHandle::new(1);
    pub const U32: TypeHandle = TypeHandle::new(2);
    pub const U64: TypeHandle = TypeHandle::new(3);
    pub const I8: TypeHandle = TypeHandle::new(4);
    pub const I16: TypeHandle = TypeHandle::new(5);
    pub const I32: TypeHandle = TypeHandle::new(6);
    pub const I64: TypeHandle = TypeHandle::new(7);
    pub const F32: TypeHandle = TypeHandle::new(8);
    pub const F64: TypeHandle = TypeHandle::new(9);
    pub const BOOL: TypeHandle = TypeHandle::new(10);
    pub const TIMESTAMP_NS: TypeHandle = TypeHandle::new(11);

    /// Creates a store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            registry: TypeRegistry::new(config.expected_types),
            tables: HashMap::new(),
            config,
        }
    }

    /// Read access to the type registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Registers a struct type from its ordered field list and returns its
    /// permanent handle.
    pub fn register_struct(
        &mut self,
        name: &str,
        fields: &[(&str, TypeHandle)],
    ) -> Result<TypeHandle, StoreError> {
        self.registry.register_struct(name, fields)
    }

    /// Appends one value as a new row of its type's table, creating the
    /// table on first insert.
    ///
    /// `T`'s encoded size must equal the registered size of `ty` — field
    /// order, offsets, and alignment beyond that are a caller-upheld
    /// contract, not re-validated per field.
    pub fn insert<T: Record>(&mut self, value: &T, ty: TypeHandle) -> Result<(), StoreError> {
        self.check_value_size::<T>(ty)?;

        let table = match self.tables.entry(ty) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                let table = build_table(&self.registry, ty, self.config.initial_row_capacity)?;
                tracing::debug!(handle = ty.raw(), "created table on first insert");
                entry.insert(table)
            }
        };

        let mut raw = vec![0u8; T::ENCODED_SIZE];
        value.encode(&mut raw);
        table.insert_row(&raw)
    }

    /// Returns the first stored row of `ty`, or a zero-valued `T` if no row
    /// has been inserted yet. Creates no table.
    pub fn query_first<T: Record>(&self, ty: TypeHandle) -> Result<T, StoreError> {
        self.check_value_size::<T>(ty)?;

        let table = match self.tables.get(&ty) {
            Some(table) if table.row_count() > 0 => table,
            _ => return Ok(T::default()),
        };

        let mut raw = vec![0u8; T::ENCODED_SIZE];
        table.read_row(0, &mut raw)?;
        Ok(T::decode(&raw))
    }

    /// Number of rows stored for `ty`; zero when no table exists yet.
    pub fn row_count(&self, ty: TypeHandle) -> Result<usize, StoreError> {
        self.registry.meta_of(ty)?;
        Ok(self.tables.get(&ty).map_or(0, Table::row_count))
    }

    /// Enforces the total-size half of the representation contract: the
    /// value type's encoded size must equal the registered size. Failing
    /// loudly here is what keeps column alignment intact for future rows.
    fn check_value_size<T: Record>(&self, ty: TypeHandle) -> Result<(), StoreError> {
        let meta = self.registry.meta_of(ty)?;
        if T::ENCODED_SIZE != meta.size {
            return Err(StoreError::SizeMismatch {
                type_name: meta.name.clone(),
                registered: meta.size,
                value: T::ENCODED_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the columnar table for a handle from its registered layout: one
/// column per field at the field's offset and size. A primitive (no fields)
/// gets a single full-width column at offset 0, and a struct-typed field
/// stays one opaque column of its full registered size.
fn build_table(
    registry: &TypeRegistry,
    ty: TypeHandle,
    initial_rows: usize,
) -> Result<Table, StoreError> {
    let meta = registry.meta_of(ty)?;

    let slots = if meta.fields.is_empty() {
        vec![FieldSlot {
            offset: 0,
            size: meta.size,
        }]
    } else {
        meta.fields
            .iter()
            .map(|field| {
                Ok(FieldSlot {
                    offset: field.offset,
                    size: registry.size_of(field.ty)?,
                })
            })
            .collect::<Result<_, StoreError>>()?
    };

    Ok(Table::new(meta.size, slots, initial_rows))
}
