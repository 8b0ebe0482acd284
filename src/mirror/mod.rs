//! Mirror targets: secondary raw-byte destinations.
//!
//! A capture stream can tee every raw byte it receives to one mirror,
//! independent of line buffering. This module provides:
//! - `MirrorTarget`: trait for mirror destinations
//! - Standard implementations for stdout, stderr, and files
//! - An in-memory implementation for testing

mod memory;
mod std_io;

pub use memory::{InMemoryLabel, InMemoryMirror};
pub use std_io::{FileMirror, StderrMirror, StdoutMirror};

use std::fmt::Debug;
use std::io::Write;

/// Trait for mirror destinations.
///
/// Implementors provide a writable stream the capture stream tees raw bytes
/// into, such as the original stdout/stderr, a file, or an in-memory buffer.
pub trait MirrorTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this mirror target.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Open the target for writing.
    fn open(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
