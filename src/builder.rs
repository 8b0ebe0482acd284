//! Builder for creating CaptureStream instances.

use std::io::Write;
use std::sync::Arc;

use crate::consumer::Consume;
use crate::error::CaptureError;
use crate::mirror::MirrorTarget;
use crate::stream::CaptureStream;

/// Builder validating a [`CaptureStream`]'s dependencies at construction.
///
/// The consumer is required; `build()` fails with
/// [`CaptureError::MissingConsumer`] when none was registered, so no sink
/// without a delivery destination is ever created. The prefix defaults to
/// the empty string and the mirror to none.
#[derive(Default)]
pub struct CaptureStreamBuilder {
    prefix: Option<String>,
    consumer: Option<Arc<dyn Consume>>,
    mirror: Option<Arc<dyn MirrorTarget>>,
}

impl CaptureStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text prepended (in brackets) to every delivered line.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Destination for completed lines. Required.
    pub fn consumer(mut self, consumer: Arc<dyn Consume>) -> Self {
        self.consumer = Some(consumer);
        self
    }

    /// Optional target that receives every raw byte, regardless of line
    /// boundaries.
    pub fn mirror(mut self, target: Arc<dyn MirrorTarget>) -> Self {
        self.mirror = Some(target);
        self
    }

    pub fn build(self) -> Result<CaptureStream, CaptureError> {
        let consumer = self.consumer.ok_or(CaptureError::MissingConsumer)?;
        let prefix = self.prefix.unwrap_or_default();

        let mirror: Option<Box<dyn Write + Send>> = match self.mirror {
            Some(target) => {
                let writer = target.open().map_err(|source| CaptureError::Mirror {
                    target: target.id().to_owned(),
                    source,
                })?;
                Some(writer)
            }
            None => None,
        };

        Ok(CaptureStream::new(prefix, consumer, mirror))
    }
}

impl std::fmt::Debug for CaptureStreamBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureStreamBuilder")
            .field("prefix", &self.prefix)
            .field("has_consumer", &self.consumer.is_some())
            .field("mirror", &self.mirror.as_ref().map(|m| m.id().to_owned()))
            .finish()
    }
}
