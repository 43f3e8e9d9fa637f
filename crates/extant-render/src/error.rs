//! Error types for spec validation and template rendering.
//!
//! [`RenderError`] is the error type for all rendering operations. It wraps the
//! underlying template engine's errors so that engine details stay out of the
//! public API. [`SpecError`] reports capability specs that fail validation.

use std::fmt;

/// Error type for template rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error or compilation failure.
    TemplateError(String),

    /// Template not found in the environment.
    TemplateNotFound(String),

    /// Data serialization error.
    SerializationError(String),

    /// Other operational error.
    OperationError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::OperationError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::TemplateError(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}

/// A capability spec that cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// An image size with a zero dimension.
    ZeroDimension {
        name: String,
        width: u32,
        height: u32,
    },
    /// A spec with an empty name or handle.
    EmptyName(&'static str),
    /// A layout preview template without exactly one `%s` placeholder.
    BadPreviewTemplate(String),
    /// A font spec with no families.
    NoFontFamilies(String),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::ZeroDimension {
                name,
                width,
                height,
            } => write!(f, "image size '{}' has a zero dimension ({}x{})", name, width, height),
            SpecError::EmptyName(kind) => write!(f, "{} name must not be empty", kind),
            SpecError::BadPreviewTemplate(name) => write!(
                f,
                "layout '{}' preview template must contain exactly one %s",
                name
            ),
            SpecError::NoFontFamilies(handle) => {
                write!(f, "font '{}' declares no families", handle)
            }
        }
    }
}

impl std::error::Error for SpecError {}
