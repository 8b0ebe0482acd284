//! In-memory mirror and label implementations for testing.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::MirrorTarget;
use crate::label::LabelSurface;

/// In-memory mirror target for testing.
///
/// Cloning shares the underlying buffer, so a test can keep one clone and
/// hand another to the capture stream.
#[derive(Debug, Clone)]
pub struct InMemoryMirror {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemoryMirror {
    /// Create a new empty in-memory mirror.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the mirrored bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.buf.lock().unwrap().clone()
    }

    /// Get the mirrored bytes as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Clear the mirrored bytes.
    pub fn clear(&self) {
        self.buf.lock().unwrap().clear();
    }
}

impl MirrorTarget for InMemoryMirror {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(InMemoryWriteHandle {
            buf: self.buf.clone(),
        }))
    }
}

/// Write handle for the in-memory mirror.
struct InMemoryWriteHandle {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self.buf.lock().unwrap();
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory label surface for testing.
///
/// Records every markup string pushed to it, in order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLabel {
    updates: Arc<Mutex<Vec<String>>>,
}

impl InMemoryLabel {
    /// Create a new empty in-memory label.
    pub fn new() -> Self {
        Self::default()
    }

    /// All markup updates received so far, oldest first.
    pub fn updates(&self) -> Vec<String> {
        self.updates.lock().unwrap().clone()
    }

    /// The most recent markup update, if any.
    pub fn text(&self) -> Option<String> {
        self.updates.lock().unwrap().last().cloned()
    }
}

impl LabelSurface for InMemoryLabel {
    fn set_text(&self, markup: String) {
        self.updates.lock().unwrap().push(markup);
    }
}
