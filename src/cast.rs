//! The generic view core: reinterpret a byte buffer in place as a slice of
//! fixed-layout elements, and back.
//!
//! This is the only module containing unsafe code. Every unsafe block sits
//! behind the same three checks: the element type is constrained by
//! [`FixedLayout`], the buffer length is verified against the element
//! stride, and the base address is verified against the element alignment
//! (or the operation copies through an unaligned-tolerant read instead).
//!
//! No function here copies or allocates buffer contents; a returned view is
//! a borrow of the input's memory and cannot outlive it.

use crate::{CastError, traits::FixedLayout};
use core::{mem, mem::MaybeUninit, ptr, slice};

/// Reinterprets a byte buffer as a read-only view of `T` elements.
///
/// Element `i` of the view occupies bytes `[i * stride, (i + 1) * stride)`
/// of the buffer, where `stride` is `size_of::<T>()` including any padding
/// the layout of `T` mandates. Multi-byte fields are read in native byte
/// order; no endianness conversion happens.
///
/// An empty buffer yields an empty view for any `T`.
///
/// # Errors
///
/// - [`CastError::LayoutMismatch`] if the buffer length is not a multiple
///   of the stride. The remainder is never silently dropped.
/// - [`CastError::Misaligned`] if the buffer's base address does not meet
///   `align_of::<T>()`.
#[inline(always)]
pub fn view_from_bytes<T: FixedLayout>(bytes: &[u8]) -> Result<&[T], CastError> {
    const {
        assert!(size_of::<T>() > 0, "cannot view zero-sized elements");
    }

    if bytes.is_empty() {
        // An empty &[u8] is only 1-aligned; don't inspect its base address.
        return Ok(&[]);
    }

    let stride = size_of::<T>();
    if bytes.len() % stride != 0 {
        return Err(CastError::LayoutMismatch {
            len: bytes.len(),
            stride,
        });
    }

    let ptr = bytes.as_ptr();
    if (ptr as usize) % align_of::<T>() != 0 {
        return Err(CastError::Misaligned {
            align: align_of::<T>(),
        });
    }

    let len = bytes.len() / stride;
    Ok(unsafe { slice::from_raw_parts(ptr.cast::<T>(), len) })
}

/// Reinterprets a byte buffer as a mutable view of `T` elements.
///
/// Same contract as [`view_from_bytes`], but writes through the view land
/// in the underlying buffer. The exclusive borrow means no other view of
/// the buffer can exist while this one is live.
///
/// # Errors
///
/// - [`CastError::LayoutMismatch`] if the buffer length is not a multiple
///   of `size_of::<T>()`.
/// - [`CastError::Misaligned`] if the base address does not meet
///   `align_of::<T>()`.
#[inline(always)]
pub fn view_from_bytes_mut<T: FixedLayout>(bytes: &mut [u8]) -> Result<&mut [T], CastError> {
    const {
        assert!(size_of::<T>() > 0, "cannot view zero-sized elements");
    }

    if bytes.is_empty() {
        return Ok(&mut []);
    }

    let stride = size_of::<T>();
    if bytes.len() % stride != 0 {
        return Err(CastError::LayoutMismatch {
            len: bytes.len(),
            stride,
        });
    }

    let ptr = bytes.as_mut_ptr();
    if (ptr as usize) % align_of::<T>() != 0 {
        return Err(CastError::Misaligned {
            align: align_of::<T>(),
        });
    }

    let len = bytes.len() / stride;
    Ok(unsafe { slice::from_raw_parts_mut(ptr.cast::<T>(), len) })
}

/// Reinterprets a typed view as a read-only byte buffer of length
/// `view.len() * size_of::<T>()`, aliasing the same memory.
///
/// Never fails: alignment of 1 is always satisfied, and a zero-length view
/// yields a zero-length buffer without touching any element (a slice's base
/// pointer is valid for zero-length access even when the slice is empty).
#[inline(always)]
pub const fn bytes_from_view<T: FixedLayout>(view: &[T]) -> &[u8] {
    const {
        assert!(size_of::<T>() > 0, "cannot view zero-sized elements");
    }

    let ptr = view.as_ptr().cast::<u8>();
    let len = mem::size_of_val(view);
    unsafe { slice::from_raw_parts(ptr, len) }
}

/// Reinterprets a typed view as a mutable byte buffer aliasing the same
/// memory.
///
/// Writes through the result alter the viewed elements, padding bytes
/// included. Never fails; zero-length in, zero-length out.
#[inline(always)]
pub const fn bytes_from_view_mut<T: FixedLayout>(view: &mut [T]) -> &mut [u8] {
    const {
        assert!(size_of::<T>() > 0, "cannot view zero-sized elements");
    }

    let ptr = view.as_mut_ptr().cast::<u8>();
    let len = size_of::<T>() * view.len();
    unsafe { slice::from_raw_parts_mut(ptr, len) }
}

/// Borrows a single value's memory as a byte buffer of
/// `size_of::<T>()` bytes.
#[inline(always)]
pub const fn bytes_of<T: FixedLayout>(value: &T) -> &[u8] {
    const {
        assert!(size_of::<T>() > 0, "cannot view zero-sized elements");
    }

    unsafe { slice::from_raw_parts(ptr::from_ref::<T>(value).cast::<u8>(), size_of::<T>()) }
}

/// Copies a single `T` out of an exactly-sized, properly aligned byte
/// buffer.
///
/// Unlike the view constructors this reads the value out rather than
/// aliasing it, so the result owns its bytes.
///
/// # Errors
///
/// - [`CastError::LayoutMismatch`] if the buffer is not exactly
///   `size_of::<T>()` bytes.
/// - [`CastError::Misaligned`] if the base address does not meet
///   `align_of::<T>()`.
#[inline(always)]
pub fn from_bytes<T: FixedLayout>(bytes: &[u8]) -> Result<T, CastError> {
    const {
        assert!(size_of::<T>() > 0, "cannot view zero-sized elements");
    }

    if bytes.len() != size_of::<T>() {
        return Err(CastError::LayoutMismatch {
            len: bytes.len(),
            stride: size_of::<T>(),
        });
    }
    if (bytes.as_ptr() as usize) % align_of::<T>() != 0 {
        return Err(CastError::Misaligned {
            align: align_of::<T>(),
        });
    }

    let mut tmp = MaybeUninit::<T>::uninit();
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), tmp.as_mut_ptr().cast::<u8>(), size_of::<T>());
        Ok(tmp.assume_init())
    }
}

/// Copies a single `T` out of an exactly-sized byte buffer with no
/// alignment requirement on the buffer.
///
/// The copy goes through a byte-wise read, so this is safe for buffers at
/// arbitrary offsets, e.g. fields sliced out of the middle of a packet.
///
/// # Errors
///
/// [`CastError::LayoutMismatch`] if the buffer is not exactly
/// `size_of::<T>()` bytes.
#[inline(always)]
pub const fn from_bytes_unaligned<T: FixedLayout>(bytes: &[u8]) -> Result<T, CastError> {
    const {
        assert!(size_of::<T>() > 0, "cannot view zero-sized elements");
    }

    if bytes.len() != size_of::<T>() {
        return Err(CastError::LayoutMismatch {
            len: bytes.len(),
            stride: size_of::<T>(),
        });
    }

    let mut tmp = MaybeUninit::<T>::uninit();
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), tmp.as_mut_ptr().cast::<u8>(), size_of::<T>());
        Ok(tmp.assume_init())
    }
}
