//! A loader that behaves like Vosk's without any native code.
//!
//! A directory is a valid fake model when it contains `am/final.mdl`. An
//! empty path makes the loader panic, standing in for a loader that throws.

use std::{
    cell::Cell,
    ffi::c_char,
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::boundary;

use super::ModelKind;

thread_local! {
    static RELEASED: Cell<usize> = const { Cell::new(0) };
}

/// Number of fake models released on the current thread.
pub(crate) fn released() -> usize {
    RELEASED.get()
}

#[derive(Debug)]
pub(crate) struct FakeModel {
    pub(crate) root: PathBuf,
}

impl FakeModel {
    fn load(path: &Path) -> Result<Self, String> {
        assert!(!path.as_os_str().is_empty(), "model path is empty");

        let weights = path.join("am/final.mdl");
        if !weights.is_file() {
            return Err(format!("missing {}", weights.display()));
        }
        Ok(Self {
            root: path.to_path_buf(),
        })
    }
}

/// Fake kind backed by [`boundary::new_or_null`].
#[derive(Debug)]
pub(crate) struct Fake;

// SAFETY: `boundary::new_or_null` never unwinds and returns a `Box` pointer
// that `free` reclaims; `FakeModel` is `Send + Sync`.
unsafe impl ModelKind for Fake {
    type Raw = FakeModel;

    const NAME: &'static str = "fake model";

    unsafe fn new_or_null(path: *const c_char) -> *mut Self::Raw {
        unsafe { boundary::new_or_null(path, FakeModel::load) }
    }

    unsafe fn free(raw: *mut Self::Raw) {
        drop(unsafe { Box::from_raw(raw) });
        RELEASED.set(RELEASED.get() + 1);
    }

    fn last_error() -> Option<String> {
        boundary::last_error()
    }
}

/// Creates a temporary directory laid out as a valid fake model.
pub(crate) fn model_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("am")).unwrap();
    fs::write(dir.path().join("am/final.mdl"), b"weights").unwrap();
    dir
}

/// Creates a temporary directory that is not a model.
pub(crate) fn malformed_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README"), b"not a model").unwrap();
    dir
}
