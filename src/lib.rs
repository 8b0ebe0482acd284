//! # streamlabel
//!
//! Redirect a process's output streams into a live display label, one line
//! at a time.
//!
//! ## Overview
//!
//! streamlabel provides:
//! - **Line buffering**: `CaptureStream` implements `std::io::Write`,
//!   accumulates bytes into a prefixed line buffer, and delivers each
//!   completed line to a single consumer
//! - **Mirroring**: every raw byte can be teed to a secondary target
//!   (stdout, stderr, file, or an in-memory buffer) independent of line
//!   boundaries
//! - **Label rendering**: `CaptureLabel` escapes angle brackets, wraps the
//!   line in paragraph markup (red when error mode is set), and pushes it to
//!   a `LabelSurface`
//! - **UI-thread affinity**: surface mutations run only on a designated UI
//!   thread; off-thread consumers defer through a FIFO task queue
//! - **Process capture**: pump a child process's piped stdout/stderr into
//!   capture sinks on background threads
//! - **Configuration**: describe prefix, error mode, and mirror target in
//!   JSON or YAML documents
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::io::Write;
//! use std::sync::Arc;
//!
//! use streamlabel::{CaptureLabel, CaptureStreamBuilder, InMemoryLabel, UiThread};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ui = UiThread::spawn()?;
//!     let surface = Arc::new(InMemoryLabel::new());
//!     let label = Arc::new(CaptureLabel::new(surface.clone(), ui.handle()));
//!     label.set_err(true);
//!
//!     let mut stream = CaptureStreamBuilder::new()
//!         .prefix("STDERR")
//!         .consumer(label)
//!         .build()?;
//!
//!     stream.write_all(b"something went wrong\n")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - JSON configuration support (enabled by default)
//! - `yaml` - YAML configuration support
//! - `miette` - Pretty error reporting with miette
//!
//! ## Semantics
//!
//! - A line is delivered exactly once, when its `\n` terminator is written;
//!   a trailing partial line stays buffered and is never delivered early.
//! - Every delivered line begins with `"[" + prefix + "] "` and ends with
//!   the terminating newline. An empty prefix still yields the `"[] "`
//!   marker.
//! - Bytes carry byte-stream semantics: each byte widens to one character
//!   and multi-byte UTF-8 sequences are not reassembled. `\r` is not a
//!   terminator.
//! - The mirror sees every byte, in order, on every write, whether or not a
//!   line ever completes; a mirror write failure is surfaced to the caller
//!   of the triggering write.
//! - Error-mode styling is snapshotted when a line is consumed, before any
//!   deferral to the UI thread.

// Core modules
pub mod builder;
pub mod config;
pub mod consumer;
pub mod error;
pub mod label;
pub mod markup;
pub mod mirror;
pub mod redirect;
pub mod stream;
pub mod ui;

// Re-exports for convenience
pub use builder::CaptureStreamBuilder;
pub use config::{CaptureConfig, MirrorConfig, builder_from_config};
pub use consumer::{Consume, Payload};
pub use error::{CaptureError, ConsumeError, UiError};
pub use label::{CaptureLabel, LabelSurface};
pub use markup::{escape_markup, render_line};
pub use mirror::{
    FileMirror, InMemoryLabel, InMemoryMirror, MirrorTarget, StderrMirror, StdoutMirror,
};
pub use redirect::{Redirection, capture_child, pump};
pub use stream::CaptureStream;
pub use ui::{UiHandle, UiThread};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::CaptureDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
