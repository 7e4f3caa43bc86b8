//! Model kinds: the binding between a raw handle type and its loader.

#[cfg(vosk)]
mod native;

#[cfg(test)]
pub(crate) mod test_support;

use std::ffi::c_char;

#[cfg(vosk)]
#[cfg_attr(docsrs, doc(cfg(any(feature = "vosk-static", feature = "vosk-dylib"))))]
pub use native::{Acoustic, Speaker};

/// Trait used to mark types that can be loaded into a [`Handle`](crate::Handle).
///
/// Implementors name the raw handle type and provide the null-returning
/// constructor, the matching release function and the source of failure
/// diagnostics.
///
/// # Safety
///
/// - [`new_or_null`](Self::new_or_null) must never unwind and must return
///   either null or a pointer that [`free`](Self::free) accepts.
/// - Raw handles must be safe to share between threads and to release from a
///   thread other than the one that created them.
pub unsafe trait ModelKind: Send + Sync + 'static {
    /// The opaque type behind the handle.
    type Raw;

    /// Human-readable name used in errors and log events.
    const NAME: &'static str;

    /// Loads a model from `path`, returning null on any failure.
    ///
    /// # Safety
    ///
    /// `path` must be null or point to a NUL-terminated string that stays
    /// valid for the duration of the call.
    unsafe fn new_or_null(path: *const c_char) -> *mut Self::Raw;

    /// Releases a handle returned by [`new_or_null`](Self::new_or_null).
    ///
    /// # Safety
    ///
    /// `raw` must be non-null, come from `new_or_null` of the same kind, and
    /// not have been released already.
    unsafe fn free(raw: *mut Self::Raw);

    /// Returns the diagnostic of the last failed load on this thread, if the
    /// loader keeps one.
    fn last_error() -> Option<String>;
}
