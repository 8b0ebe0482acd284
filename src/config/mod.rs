//! Declarative capture configuration.
//!
//! This module provides:
//! - `CaptureConfig`: Configuration for a single captured stream
//! - `MirrorConfig`: Configuration for the optional mirror target
//! - Loaders for JSON (default) and YAML (feature `yaml`) documents
//!
//! The consumer is a live object, not configuration; a config describes
//! everything else (prefix, error mode, mirror target) and is turned into a
//! builder with [`builder_from_config`], to which the caller attaches the
//! consumer before building.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::builder::CaptureStreamBuilder;
use crate::error::CaptureError;
use crate::mirror::{FileMirror, MirrorTarget, StderrMirror, StdoutMirror};

/// Configuration for a single captured stream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptureConfig {
    /// Prefix prepended (in brackets) to every delivered line
    #[serde(default)]
    pub prefix: Option<String>,
    /// Whether the captured stream represents an error channel
    #[serde(default)]
    pub error_mode: bool,
    /// Optional mirror target receiving every raw byte
    #[serde(default)]
    pub mirror: Option<MirrorConfig>,
}

/// Configuration for the optional mirror target.
#[derive(Debug, Clone, Deserialize)]
pub struct MirrorConfig {
    /// Kind of mirror: "stdout", "stderr", or "file"
    pub kind: String,
    /// File path (for file mirrors)
    #[serde(default)]
    pub path: Option<String>,
}

impl CaptureConfig {
    /// Parse a capture configuration from a JSON document.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, CaptureError> {
        serde_json::from_str(s).map_err(|e| CaptureError::ConfigParse(Box::new(e)))
    }

    /// Parse a capture configuration from a YAML document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, CaptureError> {
        serde_yaml::from_str(s).map_err(|e| CaptureError::ConfigParse(Box::new(e)))
    }

    /// Load a capture configuration from a file, dispatching on extension.
    ///
    /// `.yaml`/`.yml` requires the `yaml` feature; everything else is
    /// parsed as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CaptureError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CaptureError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => {
                #[cfg(feature = "yaml")]
                {
                    Self::from_yaml_str(&content)
                }
                #[cfg(not(feature = "yaml"))]
                {
                    Err(CaptureError::Config(
                        "YAML configuration requires the 'yaml' feature".into(),
                    ))
                }
            }
            _ => {
                #[cfg(feature = "json")]
                {
                    Self::from_json_str(&content)
                }
                #[cfg(not(feature = "json"))]
                {
                    Err(CaptureError::Config(
                        "JSON configuration requires the 'json' feature".into(),
                    ))
                }
            }
        }
    }

    /// Resolve the configured mirror into a target, if any.
    pub fn mirror_target(&self) -> Result<Option<Arc<dyn MirrorTarget>>, CaptureError> {
        let Some(mirror) = &self.mirror else {
            return Ok(None);
        };
        let target: Arc<dyn MirrorTarget> = match mirror.kind.as_str() {
            "stdout" | "-" => Arc::new(StdoutMirror::new()),
            "stderr" => Arc::new(StderrMirror::new()),
            "file" => {
                let path = mirror.path.as_ref().ok_or_else(|| {
                    CaptureError::Config("file mirror requires 'path' field".into())
                })?;
                Arc::new(FileMirror::new(path.into()))
            }
            other => {
                return Err(CaptureError::Config(format!(
                    "unknown mirror kind: {other}"
                )));
            }
        };
        Ok(Some(target))
    }
}

/// Build a [`CaptureStreamBuilder`] pre-populated from a configuration.
///
/// The caller still attaches the consumer before calling `build()`.
pub fn builder_from_config(config: &CaptureConfig) -> Result<CaptureStreamBuilder, CaptureError> {
    let mut builder = CaptureStreamBuilder::new();
    if let Some(prefix) = &config.prefix {
        builder = builder.prefix(prefix.clone());
    }
    if let Some(target) = config.mirror_target()? {
        builder = builder.mirror(target);
    }
    Ok(builder)
}
