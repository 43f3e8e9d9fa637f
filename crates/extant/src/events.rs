//! Lifecycle events fired by the host.

use std::fmt;

/// Named points in the host lifecycle the theme attaches to.
///
/// The host fires them in this order: [`AfterSetup`](Event::AfterSetup),
/// [`Init`](Event::Init), [`RegisterLayouts`](Event::RegisterLayouts), then
/// one of the enqueue events per page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    AfterSetup,
    Init,
    RegisterLayouts,
    /// A full page is being rendered.
    EnqueueScripts,
    /// An embedded (oEmbed) view of a post is being rendered.
    EnqueueEmbedScripts,
}

impl Event {
    pub const ALL: [Event; 5] = [
        Event::AfterSetup,
        Event::Init,
        Event::RegisterLayouts,
        Event::EnqueueScripts,
        Event::EnqueueEmbedScripts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Event::AfterSetup => "after-setup",
            Event::Init => "init",
            Event::RegisterLayouts => "register-layouts",
            Event::EnqueueScripts => "enqueue-scripts",
            Event::EnqueueEmbedScripts => "enqueue-embed-scripts",
        }
    }
}

impl AsRef<str> for Event {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Event> for String {
    fn from(event: Event) -> Self {
        event.as_str().to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let names: Vec<&str> = Event::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "after-setup",
                "init",
                "register-layouts",
                "enqueue-scripts",
                "enqueue-embed-scripts"
            ]
        );
        assert_eq!(Event::Init.to_string(), "init");
    }
}
