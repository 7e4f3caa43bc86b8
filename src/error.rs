use std::path::PathBuf;

use thiserror::Error;

/// Errors returned when a model cannot be loaded.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The path cannot be passed to the loader unchanged as a C string.
    ///
    /// It contains a NUL byte, or is not valid UTF-8 on a platform whose
    /// loader takes UTF-8 paths.
    #[error("model path cannot be passed to the loader: {}", path.display())]
    InvalidPath { path: PathBuf },

    /// The loader failed to construct the model.
    ///
    /// `reason` carries the loader's own message when one was captured.
    #[error("failed to load {kind} from {}: {}", path.display(), describe(reason))]
    Rejected {
        kind: &'static str,
        path: PathBuf,
        reason: Option<String>,
    },
}

impl LoadError {
    /// Returns the path that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::InvalidPath { path } | LoadError::Rejected { path, .. } => path,
        }
    }
}

fn describe(reason: &Option<String>) -> &str {
    reason.as_deref().unwrap_or("no diagnostic available")
}
