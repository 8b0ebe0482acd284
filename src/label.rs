//! Reference consumer: render lines onto a UI label surface.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::consumer::{Consume, Payload};
use crate::error::ConsumeError;
use crate::markup::render_line;
use crate::ui::UiHandle;

/// The display surface a [`CaptureLabel`] owns exclusively.
///
/// One operation: replace the displayed text with a rendered markup string.
/// Implementations are only ever called on the UI thread.
pub trait LabelSurface: Send + Sync {
    /// Replace the displayed text.
    fn set_text(&self, markup: String);
}

/// A consumer that displays the most recent captured line on a label.
///
/// Each consumed line is escaped, wrapped in paragraph markup (plus a red
/// font wrapper when error mode is set), and pushed to the surface. When
/// `consume` is called off the UI thread, the surface mutation is deferred
/// onto the UI thread's FIFO queue instead of running in place.
///
/// Error mode is snapshotted when the line is consumed, so the styling of a
/// delivered line is fixed before any deferral; toggling the flag affects
/// only lines consumed afterwards.
pub struct CaptureLabel {
    surface: Arc<dyn LabelSurface>,
    ui: UiHandle,
    is_err: AtomicBool,
}

impl CaptureLabel {
    /// Create a label consumer pushing rendered lines to `surface` via `ui`.
    pub fn new(surface: Arc<dyn LabelSurface>, ui: UiHandle) -> Self {
        Self {
            surface,
            ui,
            is_err: AtomicBool::new(false),
        }
    }

    /// Whether consumed lines are rendered with error styling.
    pub fn is_err(&self) -> bool {
        self.is_err.load(Ordering::Relaxed)
    }

    /// Set error styling for lines consumed from now on.
    pub fn set_err(&self, is_err: bool) {
        self.is_err.store(is_err, Ordering::Relaxed);
    }
}

impl Consume for CaptureLabel {
    fn consume(&self, payload: Payload) -> Result<(), ConsumeError> {
        let text = match payload {
            Payload::Text(text) => text,
            other => {
                return Err(ConsumeError::UnsupportedPayload { kind: other.kind() });
            }
        };

        let markup = render_line(&text, self.is_err());
        if self.ui.is_ui_thread() {
            self.surface.set_text(markup);
        } else {
            let surface = Arc::clone(&self.surface);
            self.ui.invoke_later(move || surface.set_text(markup))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for CaptureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureLabel")
            .field("is_err", &self.is_err())
            .finish()
    }
}
