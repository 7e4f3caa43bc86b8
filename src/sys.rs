//! Raw bindings to the Vosk model loaders and the exception-catching adapter.
//!
//! The functions are only declared when the crate is built with
//! `vosk-static` or `vosk-dylib`. The opaque types are always available so
//! that code naming them compiles without the native library.

#[cfg(vosk)]
use std::ffi::{c_char, c_int};

/// Model data required for recognition.
///
/// Holds static data only and can be shared across processing threads.
#[repr(C)]
#[derive(Debug)]
pub struct VoskModel {
    _unused: [u8; 0],
}

/// Speaker model: the same as [`VoskModel`] but with the data for speaker
/// identification.
#[repr(C)]
#[derive(Debug)]
pub struct VoskSpkModel {
    _unused: [u8; 0],
}

#[cfg(vosk)]
unsafe extern "C" {
    /// Loads model data from `model_path`, or returns null on any failure.
    pub fn vosk_model_new_or_null(model_path: *const c_char) -> *mut VoskModel;

    /// Releases the model.
    ///
    /// The model is reference-counted; recognizers still using it keep it
    /// alive until the last of them is released.
    pub fn vosk_model_free(model: *mut VoskModel);

    /// Loads speaker model data from `model_path`, or returns null on any
    /// failure.
    pub fn vosk_spk_model_new_or_null(model_path: *const c_char) -> *mut VoskSpkModel;

    /// Releases the speaker model.
    pub fn vosk_spk_model_free(model: *mut VoskSpkModel);

    /// Returns the message left by the last failed `*_new_or_null` call on
    /// this thread, or null.
    ///
    /// The string is owned by the adapter and is overwritten by the next
    /// call on the same thread.
    pub fn vosk_wrap_last_error() -> *const c_char;

    /// Sets the Kaldi log level: negative silences info messages, zero is
    /// the default, positive is more verbose.
    pub fn vosk_set_log_level(log_level: c_int);
}
