//! Line-buffering capture sink.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::trace;

use crate::consumer::{Consume, Payload};

/// Initial line-buffer capacity; grows as needed.
const BUFFER_CAPACITY: usize = 128;

/// A byte-at-a-time output sink that buffers a character stream into lines
/// and delivers each completed line to a single consumer.
///
/// Every buffered line is prefixed with `"[" + prefix + "] "`. When a
/// line-feed byte is seen, the full buffer (prefix, accumulated text, and
/// the trailing newline) is handed to the consumer and the buffer is
/// re-seeded with the prefix marker. Carriage returns are not line
/// terminators; they pass through into the buffered text.
///
/// Bytes are interpreted independently with byte-stream semantics: each
/// byte widens to one character, and multi-byte UTF-8 sequences are not
/// reassembled.
///
/// An optional mirror sink receives every raw byte unconditionally, on
/// every write, independent of line boundaries. A mirror write failure is
/// surfaced to the caller of the triggering `write`; it is never swallowed.
///
/// A `CaptureStream` is written from one logical stream. Interleaved writes
/// from multiple threads need external synchronization; the buffer append
/// is not atomic across calls.
pub struct CaptureStream {
    buffer: String,
    prefix: String,
    consumer: Arc<dyn Consume>,
    mirror: Option<Box<dyn Write + Send>>,
}

impl CaptureStream {
    /// Create a new capture stream delivering completed lines to `consumer`.
    ///
    /// The buffer starts seeded with the bracketed prefix marker. An empty
    /// prefix is valid and yields the marker `"[] "`.
    pub fn new(
        prefix: impl Into<String>,
        consumer: Arc<dyn Consume>,
        mirror: Option<Box<dyn Write + Send>>,
    ) -> Self {
        let prefix = prefix.into();
        let mut buffer = String::with_capacity(BUFFER_CAPACITY);
        seed(&mut buffer, &prefix);
        Self {
            buffer,
            prefix,
            consumer,
            mirror,
        }
    }

    /// The prefix prepended (in brackets) to every delivered line.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Current buffered content, including the prefix marker.
    ///
    /// A trailing partial line stays here until its terminator arrives; it
    /// is never delivered early.
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        // Byte-stream semantics: widen the single byte, no UTF-8 decoding.
        let c = b as char;
        self.buffer.push(c);

        // The mirror sees every byte, not just completed lines.
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.write_all(&[b])?;
        }

        if c == '\n' {
            trace!(prefix = %self.prefix, len = self.buffer.len(), "line complete");
            let line = std::mem::replace(&mut self.buffer, String::with_capacity(BUFFER_CAPACITY));
            seed(&mut self.buffer, &self.prefix);
            self.consumer.consume(Payload::Text(line))?;
        }
        Ok(())
    }
}

fn seed(buffer: &mut String, prefix: &str) {
    buffer.push('[');
    buffer.push_str(prefix);
    buffer.push_str("] ");
}

impl Write for CaptureStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &b in buf {
            self.write_byte(b)?;
        }
        Ok(buf.len())
    }

    /// Flushes the mirror sink, if any. Partial lines are defined by the
    /// line terminator alone and are never force-delivered here.
    fn flush(&mut self) -> io::Result<()> {
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for CaptureStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureStream")
            .field("prefix", &self.prefix)
            .field("buffered", &self.buffer.len())
            .field("mirrored", &self.mirror.is_some())
            .finish()
    }
}
