//! Owning handles to loaded models.

use std::{
    ffi::CString,
    fmt,
    marker::PhantomData,
    mem::ManuallyDrop,
    path::Path,
    ptr::NonNull,
};

use tracing::debug;

use crate::{LoadError, kind::ModelKind};

/// An owned, fully constructed model of kind `K`.
///
/// The model is released when the handle is dropped, unless ownership is
/// handed off with [`Handle::into_raw`].
pub struct Handle<K: ModelKind> {
    raw: NonNull<K::Raw>,
    _kind: PhantomData<K>,
}

impl<K: ModelKind> Handle<K> {
    /// Loads a model from `path`.
    ///
    /// The path is passed to the loader untouched; validating it is the
    /// loader's job.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidPath`] if `path` contains a NUL byte (or,
    /// off Unix, is not valid UTF-8), and
    /// [`LoadError::Rejected`] if the loader fails for any reason.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let c_path = to_c_string(path)?;

        // SAFETY: `c_path` is NUL-terminated and outlives the call.
        let raw = unsafe { K::new_or_null(c_path.as_ptr()) };

        match NonNull::new(raw) {
            Some(raw) => {
                debug!(kind = K::NAME, path = %path.display(), "model loaded");
                Ok(Self {
                    raw,
                    _kind: PhantomData,
                })
            }
            None => {
                let reason = K::last_error();
                debug!(
                    kind = K::NAME,
                    path = %path.display(),
                    reason = reason.as_deref().unwrap_or_default(),
                    "model rejected",
                );
                Err(LoadError::Rejected {
                    kind: K::NAME,
                    path: path.to_path_buf(),
                    reason,
                })
            }
        }
    }

    /// Takes ownership of a raw handle, returning `None` for null.
    ///
    /// # Safety
    ///
    /// A non-null `raw` must come from `K::new_or_null` (or
    /// [`Handle::into_raw`]) and must not be owned by anything else.
    pub unsafe fn from_raw(raw: *mut K::Raw) -> Option<Self> {
        NonNull::new(raw).map(|raw| Self {
            raw,
            _kind: PhantomData,
        })
    }

    /// Returns the raw handle without giving up ownership.
    pub fn as_ptr(&self) -> *mut K::Raw {
        self.raw.as_ptr()
    }

    /// Hands ownership of the raw handle to the caller.
    ///
    /// The model is not released; the caller becomes responsible for it.
    pub fn into_raw(self) -> *mut K::Raw {
        ManuallyDrop::new(self).raw.as_ptr()
    }
}

impl<K: ModelKind> Drop for Handle<K> {
    fn drop(&mut self) {
        // SAFETY: `raw` came from `K::new_or_null` and is owned by `self`.
        unsafe { K::free(self.raw.as_ptr()) }
    }
}

impl<K: ModelKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &K::NAME)
            .field("raw", &self.raw)
            .finish()
    }
}

// SAFETY: `ModelKind` requires raw handles to be shareable and releasable
// across threads.
unsafe impl<K: ModelKind> Send for Handle<K> {}
unsafe impl<K: ModelKind> Sync for Handle<K> {}

#[cfg(unix)]
fn to_c_string(path: &Path) -> Result<CString, LoadError> {
    use std::os::unix::ffi::OsStrExt;

    CString::new(path.as_os_str().as_bytes()).map_err(|_| LoadError::InvalidPath {
        path: path.to_path_buf(),
    })
}

#[cfg(not(unix))]
fn to_c_string(path: &Path) -> Result<CString, LoadError> {
    let invalid = || LoadError::InvalidPath {
        path: path.to_path_buf(),
    };
    // A lossy conversion would hand the loader a different path.
    let path = path.to_str().ok_or_else(invalid)?;
    CString::new(path).map_err(|_| invalid())
}
