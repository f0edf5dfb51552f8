//! Named cast pairs for the fixed-width integer scalars.
//!
//! These are thin instantiations of the generic core in [`crate::cast`],
//! kept as a flat function-per-width surface so I/O code can name the cast
//! it means without spelling out type parameters. All views are read-only;
//! use [`crate::view_from_bytes_mut`] when mutation through the alias is
//! needed.
//!
//! The 8-bit pairs are the identity transform (stride 1, alignment 1) and
//! therefore infallible; every wider pair can fail per the generic
//! contract.

use crate::{CastError, cast};
use core::slice;

/// Views a byte buffer as unsigned bytes. The identity transform.
#[inline(always)]
#[must_use]
pub const fn u8_view_from_bytes(bytes: &[u8]) -> &[u8] {
    bytes
}

/// Views unsigned bytes as a byte buffer. The identity transform.
#[inline(always)]
#[must_use]
pub const fn bytes_from_u8_view(view: &[u8]) -> &[u8] {
    view
}

/// Views a byte buffer as signed bytes. Infallible: stride and alignment
/// are both 1, so any buffer qualifies.
#[inline(always)]
#[must_use]
pub const fn i8_view_from_bytes(bytes: &[u8]) -> &[i8] {
    unsafe { slice::from_raw_parts(bytes.as_ptr().cast::<i8>(), bytes.len()) }
}

/// Views signed bytes as a byte buffer. Infallible.
#[inline(always)]
#[must_use]
pub const fn bytes_from_i8_view(view: &[i8]) -> &[u8] {
    unsafe { slice::from_raw_parts(view.as_ptr().cast::<u8>(), view.len()) }
}

macro_rules! scalar_pair {
    ($ty:ty, $from_bytes:ident, $to_bytes:ident) => {
        #[doc = concat!("Views a byte buffer as native-endian `", stringify!($ty), "` elements.")]
        ///
        /// # Errors
        ///
        /// [`CastError::LayoutMismatch`] if the buffer length is not a
        #[doc = concat!("multiple of `size_of::<", stringify!($ty), ">()`;")]
        /// [`CastError::Misaligned`] if the base address is not aligned
        /// for the element type.
        #[inline(always)]
        pub fn $from_bytes(bytes: &[u8]) -> Result<&[$ty], CastError> {
            cast::view_from_bytes::<$ty>(bytes)
        }

        #[doc = concat!("Views `", stringify!($ty), "` elements as a byte buffer, native byte order preserved.")]
        ///
        /// Never fails; a zero-length view yields a zero-length buffer.
        #[inline(always)]
        #[must_use]
        pub const fn $to_bytes(view: &[$ty]) -> &[u8] {
            cast::bytes_from_view::<$ty>(view)
        }
    };
}

scalar_pair!(u16, u16_view_from_bytes, bytes_from_u16_view);
scalar_pair!(i16, i16_view_from_bytes, bytes_from_i16_view);
scalar_pair!(u32, u32_view_from_bytes, bytes_from_u32_view);
scalar_pair!(i32, i32_view_from_bytes, bytes_from_i32_view);
scalar_pair!(u64, u64_view_from_bytes, bytes_from_u64_view);
scalar_pair!(i64, i64_view_from_bytes, bytes_from_i64_view);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u64_values_come_through_exactly() {
        let values = [0xdeadu64, 0xbeef, 0xb334];
        let bytes = bytes_from_u64_view(&values);
        let view = u64_view_from_bytes(bytes).unwrap();
        assert_eq!(view, &[0xdead, 0xbeef, 0xb334]);
    }

    #[test]
    fn i8_view_is_bytewise() {
        let bytes = [0x00u8, 0x7f, 0x80, 0xff];
        let view = i8_view_from_bytes(&bytes);
        assert_eq!(view, &[0i8, 127, -128, -1]);
        assert_eq!(bytes_from_i8_view(view), &bytes);
    }

    #[test]
    fn width_one_never_fails_on_odd_lengths() {
        let bytes = [0u8; 7];
        assert_eq!(u8_view_from_bytes(&bytes).len(), 7);
        assert_eq!(i8_view_from_bytes(&bytes).len(), 7);
    }

    #[test]
    fn odd_length_rejected_for_wide_scalars() {
        let bytes = [0u8; 7];
        assert!(u64_view_from_bytes(&bytes).is_err());
        assert!(u32_view_from_bytes(&bytes).is_err());
        assert!(u16_view_from_bytes(&bytes).is_err());
    }
}
