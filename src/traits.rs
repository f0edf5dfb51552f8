//! The capability trait gating which element types a view may carry.

use core::mem::MaybeUninit;

/// Marker trait for types that can sit on either side of a byte cast.
///
/// An implementing type promises that reinterpreting properly sized and
/// aligned raw memory as `Self` (and the reverse) is sound. The scalar
/// primitives and arrays of them are provided; record types opt in
/// explicitly:
///
/// ```rust
/// use bytespan::FixedLayout;
///
/// #[repr(C)]
/// #[derive(Copy, Clone)]
/// struct Sample {
///     channel: u8,
///     value: u32,
/// }
///
/// unsafe impl FixedLayout for Sample {}
/// ```
///
/// # Safety
///
/// Implementors must guarantee all of the following:
///
/// - the type has a stable, declaration-determined layout (`#[repr(C)]`,
///   `#[repr(transparent)]`, or a primitive) whose size and field offsets
///   never vary between compilations;
/// - every bit pattern of `size_of::<Self>()` bytes is a valid value;
/// - the type contains no references, no pointers to owned storage, no
///   interior mutability, and no variable-length or associative members;
/// - the type either has no padding or tolerates padding bytes holding
///   arbitrary values.
///
/// A type that cannot uphold these cannot be used with any cast in this
/// crate; the bound turns an unsupported layout into a compile error rather
/// than a runtime check.
pub unsafe trait FixedLayout: 'static {}

unsafe impl FixedLayout for u8 {}
unsafe impl FixedLayout for i8 {}
unsafe impl FixedLayout for u16 {}
unsafe impl FixedLayout for i16 {}
unsafe impl FixedLayout for u32 {}
unsafe impl FixedLayout for i32 {}
unsafe impl FixedLayout for u64 {}
unsafe impl FixedLayout for i64 {}
unsafe impl FixedLayout for u128 {}
unsafe impl FixedLayout for i128 {}
unsafe impl FixedLayout for usize {}
unsafe impl FixedLayout for isize {}
unsafe impl FixedLayout for f32 {}
unsafe impl FixedLayout for f64 {}
unsafe impl<T: FixedLayout, const N: usize> FixedLayout for [T; N] {}
unsafe impl<T: FixedLayout> FixedLayout for MaybeUninit<T> {}
