//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::CaptureError;

/// A diagnostic wrapper for capture errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct CaptureDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<CaptureError> for CaptureDiagnostic {
    fn from(e: CaptureError) -> Self {
        let help = match &e {
            CaptureError::MissingConsumer => {
                Some("register a consumer with CaptureStreamBuilder::consumer".into())
            }
            CaptureError::Config(_) | CaptureError::ConfigParse(_) => {
                Some("check the capture configuration document".into())
            }
            CaptureError::ConfigRead { .. } => {
                Some("check that the configuration file exists and is readable".into())
            }
            CaptureError::Mirror { .. } => Some("check the mirror target path".into()),
            CaptureError::Redirect { .. } => None,
            CaptureError::ChildStreamMissing { .. } => {
                Some("spawn the child with Stdio::piped() for the captured stream".into())
            }
        };
        CaptureDiagnostic {
            message: e.to_string(),
            source: Some(Box::new(e)),
            help,
            severity: Severity::Error,
        }
    }
}

impl From<CaptureError> for miette::Report {
    fn from(e: CaptureError) -> Self {
        miette::Report::new(CaptureDiagnostic::from(e))
    }
}
