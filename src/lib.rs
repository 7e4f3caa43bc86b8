#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Vosk Models
//!
//! Fallible loading of Vosk speech recognition and speaker identification
//! models.
//!
//! The Vosk loaders signal failure by throwing C++ exceptions, which must not
//! cross a C boundary. This crate compiles a small adapter that catches every
//! exception and returns null instead, then wraps the null-returning
//! constructors in a [`Handle`] that reports failure as a [`LoadError`].
//!
//! ## Crate layout
//!
//! - [`handle`]: Owning handles and the [`Handle::new`] entry point.
//! - [`kind`]: The [`ModelKind`] trait tying a raw handle to its loader.
//! - [`boundary`]: The null-on-failure adapter for loaders written in Rust.
//! - [`sys`]: Raw bindings.
//! - [`log_level`]: Kaldi log verbosity.
//!
//! ## Features
//!
//! Without features the crate builds no native code; [`Handle`] and
//! [`boundary`] work with any [`ModelKind`].
//!
//! - `vosk-static`: builds Vosk from source (`VOSK_SRC`, default
//!   `vosk-api/src`) and links Kaldi statically (`KALDI_ROOT`, default
//!   `kaldi`).
//! - `vosk-dylib`: builds only the adapter and links the shared `libvosk`
//!   (searched in `VOSK_LIB_DIR` if set). Headers still come from `VOSK_SRC`
//!   and `KALDI_ROOT`.
//!
//! Either feature enables the `Model` and `SpkModel` aliases.

pub mod boundary;
pub mod handle;
pub mod kind;
pub mod log_level;
pub mod sys;

mod error;

pub use error::LoadError;
pub use handle::Handle;
pub use kind::ModelKind;
pub use log_level::LogLevel;

#[cfg(vosk)]
#[cfg_attr(docsrs, doc(cfg(any(feature = "vosk-static", feature = "vosk-dylib"))))]
pub use log_level::set_log_level;

/// A loaded speech recognition model.
#[cfg(vosk)]
#[cfg_attr(docsrs, doc(cfg(any(feature = "vosk-static", feature = "vosk-dylib"))))]
pub type Model = Handle<kind::Acoustic>;

/// A loaded speaker identification model.
#[cfg(vosk)]
#[cfg_attr(docsrs, doc(cfg(any(feature = "vosk-static", feature = "vosk-dylib"))))]
pub type SpkModel = Handle<kind::Speaker>;
