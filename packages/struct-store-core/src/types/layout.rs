//! Struct layout computation: field offsets, padding, and total size.
//!
//! Mirrors the rules a compiler applies to a `#[repr(C)]` struct at compile
//! time: each field offset is rounded up to the field's own alignment, the
//! struct alignment is the maximum field alignment, and the total size is
//! rounded up to a multiple of the struct alignment.

/// Rounds `offset` up to the next multiple of `align`.
///
/// `align` must be a power of two and non-zero.
pub fn align_up(offset: usize, align: usize) -> usize {
    debug_assert!(align != 0);
    debug_assert!(align.is_power_of_two());

    (offset + align - 1) & !(align - 1)
}

/// Computed byte layout of a struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
    /// Total size in bytes, including trailing padding
    pub size: usize,
    /// Alignment in bytes (max over field alignments, at least 1)
    pub align: usize,
    /// Byte offset of each field, in declaration order
    pub offsets: Vec<usize>,
}

impl StructLayout {
    /// Computes the layout for fields given as `(size, align)` pairs in
    /// declaration order.
    pub fn compute(fields: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut size = 0usize;
        let mut align = 1usize;
        let mut offsets = Vec::new();

        for (field_size, field_align) in fields {
            size = align_up(size, field_align);
            offsets.push(size);
            size += field_size;
            align = align.max(field_align);
        }

        size = align_up(size, align);

        Self {
            size,
            align,
            offsets,
        }
    }
}
