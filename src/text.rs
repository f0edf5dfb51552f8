//! Casts between byte buffers and UTF-8 text.
//!
//! `str` in Rust is already a byte slice with a validity invariant, so both
//! directions are pure reinterpretations. The bytes-to-text direction comes
//! in two flavors: an unchecked one that trusts the caller (the fast path
//! for buffers whose provenance guarantees valid UTF-8) and a strict one
//! that validates and reports [`CastError::InvalidUtf8`].

use crate::CastError;

/// Views a text value's UTF-8 storage as a byte buffer.
///
/// The length is in bytes, not code points; no validation runs because the
/// text is already known to be valid UTF-8. Never fails, including on the
/// empty string.
#[inline(always)]
#[must_use]
pub const fn bytes_from_str(s: &str) -> &[u8] {
    s.as_bytes()
}

/// Views a byte buffer as text without validating it.
///
/// This is a trust boundary, not a missing check: the caller vouches for
/// the bytes. Use [`str_from_bytes`] when the buffer's provenance cannot
/// guarantee that. A zero-length buffer yields the empty string.
///
/// # Safety
///
/// The buffer must hold valid UTF-8 for the entire lifetime of the
/// returned `&str`. Handing invalid bytes to code expecting `str`'s
/// invariant is undefined behavior.
#[inline(always)]
#[must_use]
pub const unsafe fn str_from_bytes_unchecked(bytes: &[u8]) -> &str {
    unsafe { core::str::from_utf8_unchecked(bytes) }
}

/// Views a byte buffer as text, validating that it is UTF-8 first.
///
/// Still zero-copy; the validation walks the buffer but the returned text
/// aliases it.
///
/// # Errors
///
/// [`CastError::InvalidUtf8`] if the buffer is not valid UTF-8, including
/// a multi-byte sequence truncated at the end of the buffer.
#[inline(always)]
pub const fn str_from_bytes(bytes: &[u8]) -> Result<&str, CastError> {
    match core::str::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => Err(CastError::InvalidUtf8(e)),
    }
}
