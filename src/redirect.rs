//! Pumping a process's output streams into capture sinks.
//!
//! Reassigning a process's own global stdout/stderr is not something this
//! crate does; instead, the composing application owns an explicit
//! redirection step: it obtains a readable stream (typically the piped
//! stdout or stderr of a child process) and hands it here together with the
//! capture sink that should receive it.

use std::io::{self, Read, Write};
use std::process::Child;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::stream::CaptureStream;

/// Copy `reader` into `stream` until EOF, one buffered chunk at a time.
///
/// Returns the number of bytes pumped. Errors from the reader, the mirror,
/// or the consumer are returned immediately.
pub fn pump<R: Read>(mut reader: R, stream: &mut CaptureStream) -> io::Result<u64> {
    let mut buf = [0u8; 1024];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        stream.write_all(&buf[..n])?;
        total += n as u64;
    }
    stream.flush()?;
    Ok(total)
}

/// A background thread pumping one readable stream into a capture sink.
#[derive(Debug)]
pub struct Redirection {
    join: JoinHandle<io::Result<u64>>,
    name: String,
}

impl Redirection {
    /// Spawn a named thread pumping `reader` into `stream` until EOF.
    pub fn spawn<R>(name: impl Into<String>, reader: R, mut stream: CaptureStream) -> io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        let name = name.into();
        let thread_name = format!("streamlabel-pump-{name}");
        debug!(redirection = %name, "starting stream redirection");
        let join = thread::Builder::new().name(thread_name).spawn({
            let name = name.clone();
            move || {
                let result = pump(reader, &mut stream);
                match &result {
                    Ok(bytes) => debug!(redirection = %name, bytes, "redirection finished"),
                    Err(e) => debug!(redirection = %name, error = %e, "redirection failed"),
                }
                result
            }
        })?;
        Ok(Self { join, name })
    }

    /// Name this redirection was spawned with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wait for the pump to reach EOF and return the byte count.
    pub fn join(self) -> io::Result<u64> {
        self.join
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("redirection thread panicked")))
    }
}

/// Redirect a child process's piped stdout and stderr into capture sinks.
///
/// The child must have been spawned with `Stdio::piped()` for both streams;
/// a missing handle fails with [`CaptureError::ChildStreamMissing`] before
/// any thread is spawned.
///
/// [`CaptureError::ChildStreamMissing`]: crate::error::CaptureError::ChildStreamMissing
pub fn capture_child(
    child: &mut Child,
    stdout_stream: CaptureStream,
    stderr_stream: CaptureStream,
) -> Result<(Redirection, Redirection), crate::error::CaptureError> {
    let stdout = child
        .stdout
        .take()
        .ok_or(crate::error::CaptureError::ChildStreamMissing { stream: "stdout" })?;
    let stderr = child
        .stderr
        .take()
        .ok_or(crate::error::CaptureError::ChildStreamMissing { stream: "stderr" })?;

    let out = Redirection::spawn("stdout", stdout, stdout_stream).map_err(|source| {
        crate::error::CaptureError::Redirect {
            stream: "stdout",
            source,
        }
    })?;
    let err = Redirection::spawn("stderr", stderr, stderr_stream).map_err(|source| {
        crate::error::CaptureError::Redirect {
            stream: "stderr",
            source,
        }
    })?;
    Ok((out, err))
}
