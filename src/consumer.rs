//! The line-consumer capability.

use std::fmt;

use crate::error::ConsumeError;

/// A unit of data delivered to a [`Consume`] implementation.
///
/// The capture stream only ever emits [`Payload::Text`]; the raw variant
/// exists so consumers bound to text keep a real rejection path instead of
/// silently coercing whatever they are handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A complete line of text, including its trailing newline.
    Text(String),
    /// Raw bytes with no textual interpretation.
    Raw(Vec<u8>),
}

impl Payload {
    /// Human-readable kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Raw(_) => "raw byte",
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Text(s) => f.write_str(s),
            Payload::Raw(b) => write!(f, "{} raw bytes", b.len()),
        }
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_owned())
    }
}

/// Trait for consumers of completed lines.
///
/// A capture stream delivers every buffered line to exactly one consumer.
/// Implementations must be callable from any thread and must not block the
/// caller for unbounded time; a consumer that updates UI state is expected
/// to defer that mutation to its own UI context (see
/// [`CaptureLabel`](crate::label::CaptureLabel)).
pub trait Consume: Send + Sync {
    /// Process one delivered payload.
    ///
    /// Consumers bound to a fixed payload kind must fail with
    /// [`ConsumeError::UnsupportedPayload`] on anything else.
    fn consume(&self, payload: Payload) -> Result<(), ConsumeError>;
}

impl<F> Consume for F
where
    F: Fn(Payload) -> Result<(), ConsumeError> + Send + Sync,
{
    fn consume(&self, payload: Payload) -> Result<(), ConsumeError> {
        self(payload)
    }
}
