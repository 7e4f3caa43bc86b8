//! Null-on-failure construction for loaders called across a C boundary.
//!
//! [`new_or_null`] runs a loader against a C path and hands back either an
//! owning pointer or null. Every failure the loader can signal, whether an
//! `Err` value or a panic, is absorbed here and never reaches the caller. The
//! only trace a failure leaves is a per-thread message readable through
//! [`last_error`].
//!
//! This is the Rust counterpart of the C++ adapter compiled by the build
//! script, which does the same for loaders that throw.

mod last_error;

use std::{
    any::Any,
    ffi::{CStr, c_char},
    fmt::Display,
    panic::{self, AssertUnwindSafe},
    path::Path,
    ptr,
};

pub use last_error::last_error;

/// Loads a value from the path behind `path` and returns an owning pointer,
/// or null if anything went wrong.
///
/// The returned pointer comes from [`Box::into_raw`]; release it with
/// [`Box::from_raw`]. Ownership passes to the caller and nothing is retained
/// here.
///
/// Null is returned when `path` is null, when the path is not representable
/// on this platform, when `load` returns `Err`, or when `load` panics. The
/// thread's [`last_error`] is cleared on entry and describes the failure on
/// exit. Panics are only caught when the crate is built with
/// `panic = "unwind"`.
///
/// # Safety
///
/// `path` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub unsafe fn new_or_null<T, E, F>(path: *const c_char, load: F) -> *mut T
where
    E: Display,
    F: FnOnce(&Path) -> Result<T, E>,
{
    last_error::clear();

    if path.is_null() {
        last_error::record("model path is null");
        return ptr::null_mut();
    }

    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let path = unsafe { CStr::from_ptr(path) };
    let path = match to_path(path) {
        Some(path) => path,
        None => {
            last_error::record("model path is not valid UTF-8");
            return ptr::null_mut();
        }
    };

    // The error is formatted under the guard too; `Display` impls can panic.
    match panic::catch_unwind(AssertUnwindSafe(|| load(path).map_err(|e| e.to_string()))) {
        Ok(Ok(value)) => Box::into_raw(Box::new(value)),
        Ok(Err(message)) => {
            last_error::record(message);
            ptr::null_mut()
        }
        Err(payload) => {
            last_error::record(panic_message(payload.as_ref()));
            ptr::null_mut()
        }
    }
}

#[cfg(unix)]
fn to_path(path: &CStr) -> Option<&Path> {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    Some(Path::new(OsStr::from_bytes(path.to_bytes())))
}

#[cfg(not(unix))]
fn to_path(path: &CStr) -> Option<&Path> {
    path.to_str().ok().map(Path::new)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "loader panicked".to_string()
    }
}
