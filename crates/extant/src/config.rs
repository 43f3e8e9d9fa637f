//! Theme configuration.
//!
//! Configuration is plain YAML. Every key is optional and falls back to the
//! theme's stock value, so an empty document is a valid configuration.
//!
//! ```yaml
//! slug: extant
//! content_width: 950
//! debug_assets: false
//! fonts:
//!   families: ["Roboto Condensed:300,400,700", "Merriweather:400,400i,700"]
//!   subsets: [latin, latin-ext]
//! media:
//!   fallback_image: images/featured-fallback.png
//!   default_image: { uri: "https://example.com/default.jpg", width: 1200, height: 675 }
//!   title_max_chars: 80
//!   separator: "&middot;"
//! modules:
//!   - name: commerce
//!     requires_capability: easy-digital-downloads
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use extant_render::MediaSettings;

use crate::error::ConfigError;

/// Capability probed before loading the commerce module.
pub const COMMERCE_CAPABILITY: &str = "easy-digital-downloads";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Prefix for script, style and font handles.
    pub slug: String,
    /// Maximum width, in pixels, of embeds and images in post content.
    pub content_width: u32,
    /// Serve unminified stylesheets.
    pub debug_assets: bool,
    pub fonts: FontConfig,
    pub media: MediaSettings,
    pub modules: Vec<ModuleSpec>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            slug: "extant".to_string(),
            content_width: 950,
            debug_assets: false,
            fonts: FontConfig::default(),
            media: MediaSettings::default(),
            modules: default_modules(),
        }
    }
}

impl ThemeConfig {
    /// Parses a YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or on values that fail validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str::<Self>(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slug.trim().is_empty() {
            return Err(ConfigError::Invalid("slug must not be empty".into()));
        }
        if self.content_width == 0 {
            return Err(ConfigError::Invalid("content_width must be positive".into()));
        }
        if let Some(module) = self.modules.iter().find(|m| m.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "module names must not be empty (requires {:?})",
                module.requires_capability
            )));
        }
        Ok(())
    }

    /// Handle for a theme-owned asset, e.g. `handle("embed")` → `extant-embed`.
    pub fn handle(&self, suffix: &str) -> String {
        format!("{}-{}", self.slug, suffix)
    }
}

/// Web fonts requested by the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub families: Vec<String>,
    pub subsets: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            families: vec![
                "Roboto Condensed:300,400,700".to_string(),
                "Merriweather:400,400i,700".to_string(),
            ],
            subsets: vec!["latin".to_string(), "latin-ext".to_string()],
        }
    }
}

/// An optional unit of theme functionality.
///
/// A module is loaded when its capability probe passes and, for admin-only
/// modules, when the host is serving an admin screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub name: String,
    #[serde(default)]
    pub requires_capability: Option<String>,
    #[serde(default)]
    pub admin_only: bool,
}

impl ModuleSpec {
    pub fn always(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_capability: None,
            admin_only: false,
        }
    }

    pub fn requires(name: impl Into<String>, capability: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_capability: Some(capability.into()),
            admin_only: false,
        }
    }

    pub fn admin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_capability: None,
            admin_only: true,
        }
    }
}

fn default_modules() -> Vec<ModuleSpec> {
    vec![
        ModuleSpec::always("customize"),
        ModuleSpec::always("filters"),
        ModuleSpec::always("icons"),
        ModuleSpec::always("options"),
        ModuleSpec::always("scripts"),
        ModuleSpec::always("template"),
        ModuleSpec::requires("commerce", COMMERCE_CAPABILITY),
        ModuleSpec::admin("admin-welcome"),
    ]
}
