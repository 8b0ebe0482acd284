//! Error types for stream capture and label rendering.
//!
//! This module provides:
//! - `CaptureError`: construction and configuration failures
//! - `ConsumeError`: failures raised by a line consumer
//! - `UiError`: failures dispatching work to the UI thread
//!
//! Every operation in this crate is a single attempt: errors are surfaced
//! to the caller immediately, never retried or swallowed.

use thiserror::Error;

/// Errors raised while building or configuring a capture stream.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// No consumer was registered before `build()`.
    ///
    /// A capture stream without a consumer has nowhere to deliver completed
    /// lines, so construction fails instead of producing a half-wired sink.
    #[error("capture stream requires a consumer")]
    MissingConsumer,

    /// Opening the configured mirror target failed.
    #[error("failed to open mirror target '{target}'")]
    Mirror {
        /// Identifier of the mirror target
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration was structurally valid but semantically unusable.
    #[error("invalid capture configuration: {0}")]
    Config(String),

    /// Parsing a configuration document failed.
    #[error("failed to parse capture configuration")]
    ConfigParse(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Reading a configuration file failed.
    #[error("failed to read capture configuration from '{path}'")]
    ConfigRead {
        /// Path that could not be read
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Spawning a redirection thread failed.
    #[error("failed to spawn {stream} redirection")]
    Redirect {
        /// "stdout" or "stderr"
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A child process was handed over without the requested piped stream.
    #[error("child process has no piped {stream} handle")]
    ChildStreamMissing {
        /// "stdout" or "stderr"
        stream: &'static str,
    },
}

/// Errors raised by a `Consume` implementation.
#[derive(Debug, Error)]
pub enum ConsumeError {
    /// The consumer is bound to a payload kind it did not receive.
    ///
    /// Consumers must reject unsupported payloads loudly rather than
    /// silently coercing them.
    #[error("consumer cannot process {kind} payloads")]
    UnsupportedPayload {
        /// Human-readable payload kind, e.g. "raw byte"
        kind: &'static str,
    },

    /// The UI dispatch backing the consumer is no longer available.
    #[error(transparent)]
    Ui(#[from] UiError),
}

/// Errors raised when scheduling work onto the UI thread.
#[derive(Debug, Error)]
pub enum UiError {
    /// The UI thread has shut down and its task queue is closed.
    #[error("UI thread is no longer running")]
    Disconnected,
}

impl From<ConsumeError> for std::io::Error {
    fn from(e: ConsumeError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
