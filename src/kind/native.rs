use std::ffi::{CStr, c_char};

use crate::sys;

use super::ModelKind;

/// Speech recognition model loaded by Vosk's `Model`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Acoustic;

/// Speaker identification model loaded by Vosk's `SpkModel`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Speaker;

// SAFETY: the C++ adapter catches every exception and returns null, and Vosk
// models hold read-only data that recognizers share across threads.
unsafe impl ModelKind for Acoustic {
    type Raw = sys::VoskModel;

    const NAME: &'static str = "model";

    unsafe fn new_or_null(path: *const c_char) -> *mut Self::Raw {
        unsafe { sys::vosk_model_new_or_null(path) }
    }

    unsafe fn free(raw: *mut Self::Raw) {
        unsafe { sys::vosk_model_free(raw) }
    }

    fn last_error() -> Option<String> {
        adapter_last_error()
    }
}

// SAFETY: as for `Acoustic`.
unsafe impl ModelKind for Speaker {
    type Raw = sys::VoskSpkModel;

    const NAME: &'static str = "speaker model";

    unsafe fn new_or_null(path: *const c_char) -> *mut Self::Raw {
        unsafe { sys::vosk_spk_model_new_or_null(path) }
    }

    unsafe fn free(raw: *mut Self::Raw) {
        unsafe { sys::vosk_spk_model_free(raw) }
    }

    fn last_error() -> Option<String> {
        adapter_last_error()
    }
}

fn adapter_last_error() -> Option<String> {
    // SAFETY: the adapter returns null or a NUL-terminated thread-local
    // string that stays valid until the next adapter call on this thread.
    unsafe {
        let message = sys::vosk_wrap_last_error();
        if message.is_null() {
            None
        } else {
            Some(CStr::from_ptr(message).to_string_lossy().into_owned())
        }
    }
}
