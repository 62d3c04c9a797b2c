//! Row group for a single registered type.

use crate::error::StoreError;

use super::column::Column;

/// Per-field slice of a record's byte layout: where the field starts within
/// a whole-record buffer and how many bytes it occupies.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSlot {
    pub offset: usize,
    pub size: usize,
}

/// Columnar storage for one registered type: one append-only column per
/// field, in declaration order, all columns advancing together so their row
/// counts stay equal.
#[derive(Debug)]
pub struct Table {
    record_size: usize,
    slots: Vec<FieldSlot>,
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table for records of `record_size` bytes whose fields live
    /// at the given offset/size slots, each column pre-reserving
    /// `initial_rows` elements.
    pub(crate) fn new(record_size: usize, slots: Vec<FieldSlot>, initial_rows: usize) -> Self {
        let columns = slots
            .iter()
            .map(|slot| Column::with_capacity(slot.size, initial_rows))
            .collect();
        Self {
            record_size,
            slots,
            columns,
        }
    }

    /// Size of one whole record in bytes.
    pub fn record_size(&self) -> usize {
        self.record_size
    }

    /// Splits a whole record's bytes across the per-field columns.
    ///
    /// The length check runs before any column is touched, so an insert
    /// either appends to every column or to none.
    pub fn insert_row(&mut self, raw: &[u8]) -> Result<(), StoreError> {
        if raw.len() != self.record_size {
            return Err(StoreError::RecordSizeMismatch {
                expected: self.record_size,
                got: raw.len(),
            });
        }

        for (slot, column) in self.slots.iter().zip(self.columns.iter_mut()) {
            column.append(&raw[slot.offset..slot.offset + slot.size]);
        }

        Ok(())
    }

    /// Reassembles the record at `row` into `out`, which must be at least
    /// `record_size` bytes. Bytes outside field slots (padding) are left as
    /// the caller provided them.
    pub fn read_row(&self, row: usize, out: &mut [u8]) -> Result<(), StoreError> {
        let rows = self.row_count();
        if row >= rows {
            return Err(StoreError::RowOutOfBounds { row, rows });
        }
        if out.len() < self.record_size {
            return Err(StoreError::RecordSizeMismatch {
                expected: self.record_size,
                got: out.len(),
            });
        }

        for (slot, column) in self.slots.iter().zip(self.columns.iter()) {
            out[slot.offset..slot.offset + slot.size].copy_from_slice(column.read(row));
        }

        Ok(())
    }

    /// Number of rows, taken from the first column (all columns hold equal
    /// counts by construction).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::row_count)
    }
}
