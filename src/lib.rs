//! Zero-copy reinterpretation between contiguous byte buffers and typed views.
//!
//! A typed view is a borrowed slice that aliases the memory of a byte buffer,
//! reinterpreted as a sequence of fixed-width elements in native byte order.
//! Nothing here allocates or copies buffer contents; every operation is a
//! pure pointer/length reinterpretation, checked up front so that it either
//! yields a fully valid view or fails with a [`CastError`].
//!
//! The scalar surface lives in [`scalar`], text casts in [`text`], and the
//! generic core (which also handles fixed-layout record types) in [`cast`].
//! Record types opt in through the [`FixedLayout`] marker trait.
//!
//! Because every view borrows from its source, a view can never outlive the
//! buffer it aliases. Mutation is only possible through the `_mut` operations,
//! which take the buffer exclusively for the lifetime of the view.

#![forbid(missing_docs)]
#![forbid(unused_must_use)]
#![deny(clippy::all)]
#![deny(clippy::nursery)]
#![deny(clippy::pedantic)]
#![forbid(clippy::expect_used)]
#![forbid(clippy::unwrap_used)]
#![allow(clippy::inline_always)]
#![no_std]

pub mod cast;
pub mod scalar;
pub mod text;
pub mod traits;

pub use cast::{
    bytes_from_view, bytes_from_view_mut, bytes_of, from_bytes, from_bytes_unaligned,
    view_from_bytes, view_from_bytes_mut,
};
pub use traits::FixedLayout;

/// The reasons a cast can be refused.
///
/// Every failure is detected synchronously, before any reinterpretation
/// happens, and is local to the call: a failed cast leaves the buffer
/// untouched and yields nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CastError {
    /// The buffer's byte length is not an integer multiple of the element
    /// stride, so the trailing bytes cannot form a whole element.
    ///
    /// This is never silently truncated away: a partial element almost
    /// always means the buffer was cut short or the stride is wrong, and
    /// dropping the remainder would hide that.
    #[error("buffer length {len} is not a multiple of element stride {stride}")]
    LayoutMismatch {
        /// Byte length of the offending buffer.
        len: usize,
        /// Byte size of one element, padding included.
        stride: usize,
    },

    /// The buffer's base address does not satisfy the element type's
    /// alignment, so dereferencing the view would be undefined behavior.
    ///
    /// Only returned by operations that form an in-place view or an aligned
    /// read; the `*_unaligned` operations never produce it.
    #[error("buffer address is not aligned to {align} as the element type requires")]
    Misaligned {
        /// The alignment the element type requires.
        align: usize,
    },

    /// Strict-mode text reinterpretation found bytes that are not valid
    /// UTF-8. Only [`text::str_from_bytes`] produces this.
    #[error("buffer is not valid UTF-8")]
    InvalidUtf8(#[from] core::str::Utf8Error),
}
