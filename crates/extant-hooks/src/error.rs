//! Error type returned by callbacks and by [`CallbackRegistry::fire`](crate::CallbackRegistry::fire).

use thiserror::Error;

/// Error returned by a callback.
///
/// When a callback fails inside [`fire`](crate::CallbackRegistry::fire), the
/// registry stamps the event name onto the error before returning it, so the
/// caller can tell which lifecycle point aborted.
#[derive(Debug, Error)]
#[error("callback error ({}): {message}", .event.as_deref().unwrap_or("unfired"))]
pub struct HookError {
    /// Human-readable error message
    pub message: String,
    /// The event being fired when the error occurred
    pub event: Option<String>,
    /// The underlying error source, if any
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl HookError {
    /// Creates a new callback error with no event attached yet.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            event: None,
            source: None,
        }
    }

    /// Sets the source error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        self.source = Some(source.into());
        self
    }

    /// Records the event this error surfaced from. An event set by the
    /// callback itself is kept.
    pub fn in_event(mut self, event: &str) -> Self {
        if self.event.is_none() {
            self.event = Some(event.to_string());
        }
        self
    }
}
