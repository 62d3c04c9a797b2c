//! Columnar storage: per-field append-only columns grouped into tables.

mod column;
mod table;

pub use column::Column;
pub use table::Table;

pub(crate) use table::FieldSlot;
