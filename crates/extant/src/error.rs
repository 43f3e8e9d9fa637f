//! Error types for configuration loading and theme initialization.

use std::path::PathBuf;

use thiserror::Error;

use extant_render::{RenderError, SpecError};

/// Configuration could not be read or parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid theme config: {0}")]
    Invalid(String),
}

/// Theme initialization failed.
#[derive(Debug, Error)]
pub enum InitError {
    /// The host could not tell where the theme is installed. There is no
    /// recovery; the host reports this through its own error channel.
    #[error("host could not resolve the theme {0}")]
    UnresolvedInstallPath(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid capability spec: {0}")]
    Spec(#[from] SpecError),
    #[error("renderer setup failed: {0}")]
    Render(#[from] RenderError),
}
