//! Byte codec bridging typed values and raw column storage.
//!
//! A [`Record`] type's bytes alone define its state: encoding a value and
//! decoding those bytes yields an equal value, with no indirections or
//! resources involved. Primitives encode with native-endian fixed-width
//! codecs; struct types get their impl from [`record_struct!`], which places
//! each field at its `#[repr(C)]` offset so the encoded form matches the
//! layout the registry computes for the same field list.

/// A fixed-size value that can be encoded to and decoded from bytes.
pub trait Record: Default {
    /// Exact size of the encoded form in bytes. Must equal the registered
    /// size of the type handle the value is stored under.
    const ENCODED_SIZE: usize;

    /// Writes the encoded form into `dst[..ENCODED_SIZE]`.
    fn encode(&self, dst: &mut [u8]);

    /// Reads a value back from `src[..ENCODED_SIZE]`.
    fn decode(src: &[u8]) -> Self;
}

macro_rules! impl_record_numeric {
    ($($ty:ty),+) => {
        $(
            impl Record for $ty {
                const ENCODED_SIZE: usize = std::mem::size_of::<$ty>();

                fn encode(&self, dst: &mut [u8]) {
                    dst[..Self::ENCODED_SIZE].copy_from_slice(&self.to_ne_bytes());
                }

                fn decode(src: &[u8]) -> Self {
                    let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                    bytes.copy_from_slice(&src[..Self::ENCODED_SIZE]);
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )+
    };
}

impl_record_numeric!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl Record for bool {
    const ENCODED_SIZE: usize = 1;

    fn encode(&self, dst: &mut [u8]) {
        dst[0] = u8::from(*self);
    }

    fn decode(src: &[u8]) -> Self {
        src[0] != 0
    }
}

/// Nanosecond timestamp, the value type for the `timestamp_ns` primitive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TimestampNs(pub i64);

impl Record for TimestampNs {
    const ENCODED_SIZE: usize = 8;

    fn encode(&self, dst: &mut [u8]) {
        self.0.encode(dst);
    }

    fn decode(src: &[u8]) -> Self {
        Self(i64::decode(src))
    }
}

/// Implements [`Record`] for a `#[repr(C)]` struct from its field list.
///
/// Each field is encoded at its `offset_of!` position, so the encoded bytes
/// match the struct's in-memory layout; padding is zero-filled, making the
/// encoded form deterministic. The struct must be `#[repr(C)]`, declare the
/// fields in the same order they were registered, and every field type must
/// itself implement `Record`.
///
/// ```
/// use struct_store_core::record_struct;
///
/// #[repr(C)]
/// #[derive(Debug, Default, PartialEq)]
/// struct Vec3 {
///     x: f64,
///     y: f64,
///     z: f64,
/// }
///
/// record_struct!(Vec3 { x: f64, y: f64, z: f64 });
/// ```
#[macro_export]
macro_rules! record_struct {
    ($name:ident { $($field:ident : $ty:ty),+ $(,)? }) => {
        impl $crate::record::Record for $name {
            const ENCODED_SIZE: usize = ::std::mem::size_of::<$name>();

            fn encode(&self, dst: &mut [u8]) {
                dst[..Self::ENCODED_SIZE].fill(0);
                $(
                    let offset = ::std::mem::offset_of!($name, $field);
                    <$ty as $crate::record::Record>::encode(
                        &self.$field,
                        &mut dst[offset..offset + <$ty as $crate::record::Record>::ENCODED_SIZE],
                    );
                )+
            }

            fn decode(src: &[u8]) -> Self {
                $(
                    let $field = {
                        let offset = ::std::mem::offset_of!($name, $field);
                        <$ty as $crate::record::Record>::decode(
                            &src[offset..offset + <$ty as $crate::record::Record>::ENCODED_SIZE],
                        )
                    };
                )+
                Self { $($field),+ }
            }
        }
    };
}
