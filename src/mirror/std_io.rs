//! Standard mirror implementations for stdout, stderr, and files.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use super::MirrorTarget;

/// Mirror target writing to stdout.
#[derive(Debug, Clone)]
pub struct StdoutMirror {
    id: String,
}

impl StdoutMirror {
    /// Create a new stdout mirror target.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdoutMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorTarget for StdoutMirror {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }
}

/// Mirror target writing to stderr.
#[derive(Debug, Clone)]
pub struct StderrMirror {
    id: String,
}

impl StderrMirror {
    /// Create a new stderr mirror target.
    pub fn new() -> Self {
        Self {
            id: "stderr".into(),
        }
    }
}

impl Default for StderrMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorTarget for StderrMirror {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stderr()))
    }
}

/// Mirror target appending to a file.
#[derive(Debug, Clone)]
pub struct FileMirror {
    id: String,
    path: PathBuf,
}

impl FileMirror {
    /// Create a new file mirror target.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl MirrorTarget for FileMirror {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }
}
