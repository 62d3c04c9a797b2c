//! Append-only column of fixed-size elements.

/// Append-only byte buffer holding one field's values across all rows of a
/// table. The element size is fixed at construction and never changes.
#[derive(Debug)]
pub struct Column {
    elem_size: usize,
    data: Vec<u8>,
}

impl Column {
    /// Creates a column for elements of `elem_size` bytes, with room for
    /// `rows` elements reserved up front.
    pub fn with_capacity(elem_size: usize, rows: usize) -> Self {
        Self {
            elem_size,
            data: Vec::with_capacity(elem_size.saturating_mul(rows)),
        }
    }

    /// Element size in bytes.
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Appends one element. `bytes` must be exactly `elem_size` long; the
    /// owning table validates lengths before calling.
    pub fn append(&mut self, bytes: &[u8]) {
        debug_assert_eq!(bytes.len(), self.elem_size);
        self.data.extend_from_slice(bytes);
    }

    /// Appends `count` contiguous elements at once.
    pub fn append_n(&mut self, bytes: &[u8], count: usize) {
        debug_assert_eq!(bytes.len(), self.elem_size * count);
        self.data.extend_from_slice(bytes);
    }

    /// Returns the element at `row`. Valid only for `row < row_count()`;
    /// bounds checking is the owning table's responsibility.
    pub fn read(&self, row: usize) -> &[u8] {
        let start = row * self.elem_size;
        &self.data[start..start + self.elem_size]
    }

    /// Number of elements stored.
    pub fn row_count(&self) -> usize {
        if self.elem_size == 0 {
            0
        } else {
            self.data.len() / self.elem_size
        }
    }
}
