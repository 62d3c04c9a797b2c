//! Store error types.

use thiserror::Error;

/// Store operation errors.
///
/// These are contract violations in an embedded library, not transient
/// runtime conditions: nothing here is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Type handle outside the registry's current range
    #[error("Invalid type handle {handle} ({registered} types registered)")]
    InvalidHandle { handle: u32, registered: usize },

    /// Value size does not match the registered type size
    #[error("Size mismatch for type '{type_name}': registered {registered} bytes, value has {value} bytes")]
    SizeMismatch {
        type_name: String,
        registered: usize,
        value: usize,
    },

    /// Raw record bytes with the wrong length handed to a table
    #[error("Record size mismatch: expected {expected} bytes, got {got}")]
    RecordSizeMismatch { expected: usize, got: usize },

    /// Row index beyond the current row count
    #[error("Row {row} out of bounds (table has {rows} rows)")]
    RowOutOfBounds { row: usize, rows: usize },
}
