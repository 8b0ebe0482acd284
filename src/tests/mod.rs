//! Internal test modules, one per source module.

mod label_tests;
mod markup_tests;
mod mirror;
mod ui_tests;

use std::sync::{Arc, Mutex};

use crate::consumer::{Consume, Payload};
use crate::error::ConsumeError;

/// Recording consumer: collects every delivered text line.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingConsumer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingConsumer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Consume for RecordingConsumer {
    fn consume(&self, payload: Payload) -> Result<(), ConsumeError> {
        match payload {
            Payload::Text(line) => {
                self.lines.lock().unwrap().push(line);
                Ok(())
            }
            other => Err(ConsumeError::UnsupportedPayload { kind: other.kind() }),
        }
    }
}
