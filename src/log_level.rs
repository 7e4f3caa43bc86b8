//! Verbosity of the messages Kaldi prints while loading and decoding.

use std::ffi::c_int;

/// Kaldi log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Only errors are printed.
    Silent,
    /// Info and error messages, no debug output.
    #[default]
    Default,
    /// Debug output up to the given verbosity.
    Verbose(u8),
}

impl LogLevel {
    /// Returns the integer Kaldi expects.
    pub fn as_raw(self) -> c_int {
        match self {
            LogLevel::Silent => -1,
            LogLevel::Default => 0,
            LogLevel::Verbose(level) => c_int::from(level.max(1)),
        }
    }
}

/// Maps a `tracing` level so Kaldi can follow the application's filter.
impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR | tracing::Level::WARN => LogLevel::Silent,
            tracing::Level::INFO => LogLevel::Default,
            tracing::Level::DEBUG => LogLevel::Verbose(1),
            // TRACE
            _ => LogLevel::Verbose(2),
        }
    }
}

/// Sets the process-wide Kaldi log level.
#[cfg(vosk)]
#[cfg_attr(docsrs, doc(cfg(any(feature = "vosk-static", feature = "vosk-dylib"))))]
pub fn set_log_level(level: LogLevel) {
    tracing::debug!(level = level.as_raw(), "setting Kaldi log level");
    // SAFETY: takes a plain integer and touches no caller memory.
    unsafe { crate::sys::vosk_set_log_level(level.as_raw()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values() {
        assert_eq!(LogLevel::Silent.as_raw(), -1);
        assert_eq!(LogLevel::default().as_raw(), 0);
        assert_eq!(LogLevel::Verbose(3).as_raw(), 3);
        assert_eq!(LogLevel::Verbose(0).as_raw(), 1);
    }

    #[test]
    fn follows_tracing_levels() {
        assert_eq!(LogLevel::from(tracing::Level::WARN), LogLevel::Silent);
        assert_eq!(LogLevel::from(tracing::Level::INFO), LogLevel::Default);
        assert_eq!(LogLevel::from(tracing::Level::TRACE), LogLevel::Verbose(2));
    }
}
