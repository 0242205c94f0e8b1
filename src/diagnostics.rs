//! Leveled diagnostics for the extraction loop.
//!
//! The fitter reports progress through a [`DiagnosticSink`] it owns rather than
//! a global logger. The default [`NullSink`] discards everything; [`LogSink`]
//! forwards to the `log` facade so an application's existing logger
//! (`env_logger`, etc.) picks the messages up.
//!
//! Sinks only observe. Nothing they do feeds back into the algorithm, and
//! messages are only formatted when [`DiagnosticSink::enabled`] says so.

use std::fmt;

pub use log::Level;

/// Log target used by [`LogSink`].
pub const LOG_TARGET: &str = "rekha::ransac";

/// Receiver for leveled diagnostic messages.
pub trait DiagnosticSink: Send + Sync {
    /// Whether messages at `level` would be recorded.
    fn enabled(&self, level: Level) -> bool;

    /// Record a message. Only called after `enabled(level)` returned true.
    fn emit(&self, level: Level, message: fmt::Arguments<'_>);
}

/// Sink that drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    #[inline]
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    #[inline]
    fn emit(&self, _level: Level, _message: fmt::Arguments<'_>) {}
}

/// Sink that forwards to the `log` crate under [`LOG_TARGET`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    #[inline]
    fn enabled(&self, level: Level) -> bool {
        log::log_enabled!(target: LOG_TARGET, level)
    }

    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        log::log!(target: LOG_TARGET, level, "{}", message);
    }
}

/// Emit a formatted message to a sink if its level is enabled.
macro_rules! diag {
    ($sink:expr, $level:expr, $($arg:tt)+) => {{
        let sink: &dyn $crate::diagnostics::DiagnosticSink = $sink;
        let level = $level;
        if sink.enabled(level) {
            sink.emit(level, format_args!($($arg)+));
        }
    }};
}

pub(crate) use diag;
