//! The host platform as seen by the theme.
//!
//! The theme never inspects its surroundings directly. Install locations, the
//! presence of other plugins, child-theme status and admin context all come
//! through [`HostEnvironment`].

use std::collections::HashSet;
use std::path::PathBuf;

/// Queries the theme makes of its host.
pub trait HostEnvironment {
    /// Filesystem directory of the (parent) theme. `None` if unresolvable.
    fn template_directory(&self) -> Option<PathBuf>;

    /// Public URI of the (parent) theme directory. `None` if unresolvable.
    fn template_directory_uri(&self) -> Option<String>;

    /// Public URI of the active stylesheet directory. This is the child theme's
    /// directory when a child theme is active, otherwise the template directory.
    fn stylesheet_directory_uri(&self) -> Option<String> {
        self.template_directory_uri()
    }

    /// Capability probe, e.g. whether a commerce plugin is installed.
    fn has_capability(&self, name: &str) -> bool;

    /// Whether a child theme is active on top of this one.
    fn is_child_theme(&self) -> bool;

    /// Whether the current request serves an admin screen.
    fn is_admin(&self) -> bool {
        false
    }
}

/// A host with fixed answers, configured up front.
///
/// # Example
///
/// ```rust
/// use extant::{HostEnvironment, StaticHost};
///
/// let host = StaticHost::new("/srv/themes/extant", "https://example.com/themes/extant")
///     .with_capability("easy-digital-downloads")
///     .child_theme("https://example.com/themes/extant-child");
///
/// assert!(host.has_capability("easy-digital-downloads"));
/// assert!(host.is_child_theme());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    template_directory: Option<PathBuf>,
    template_directory_uri: Option<String>,
    child_directory_uri: Option<String>,
    capabilities: HashSet<String>,
    admin: bool,
}

impl StaticHost {
    pub fn new(directory: impl Into<PathBuf>, uri: impl Into<String>) -> Self {
        Self {
            template_directory: Some(directory.into()),
            template_directory_uri: Some(uri.into()),
            ..Self::default()
        }
    }

    /// A host that cannot locate the theme.
    pub fn unresolved() -> Self {
        Self::default()
    }

    pub fn with_capability(mut self, name: impl Into<String>) -> Self {
        self.capabilities.insert(name.into());
        self
    }

    /// Activates a child theme served from `uri`.
    pub fn child_theme(mut self, uri: impl Into<String>) -> Self {
        self.child_directory_uri = Some(uri.into());
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }
}

impl HostEnvironment for StaticHost {
    fn template_directory(&self) -> Option<PathBuf> {
        self.template_directory.clone()
    }

    fn template_directory_uri(&self) -> Option<String> {
        self.template_directory_uri.clone()
    }

    fn stylesheet_directory_uri(&self) -> Option<String> {
        self.child_directory_uri
            .clone()
            .or_else(|| self.template_directory_uri())
    }

    fn has_capability(&self, name: &str) -> bool {
        self.capabilities.contains(name)
    }

    fn is_child_theme(&self) -> bool {
        self.child_directory_uri.is_some()
    }

    fn is_admin(&self) -> bool {
        self.admin
    }
}
