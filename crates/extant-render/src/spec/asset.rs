//! Script, style and web-font declarations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Base URL of the web-font stylesheet service.
pub const FONT_SERVICE_URI: &str = "https://fonts.googleapis.com/css";

/// A registered script or stylesheet.
///
/// Registration only declares the asset. Whether and where it is printed is
/// up to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpec {
    pub handle: String,
    pub source_uri: String,
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
    /// `None` means no version query string is appended.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub load_in_footer: bool,
}

impl AssetSpec {
    pub fn new(handle: impl Into<String>, source_uri: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            source_uri: source_uri.into(),
            dependencies: BTreeSet::new(),
            version: None,
            load_in_footer: false,
        }
    }

    pub fn depends_on(mut self, handle: impl Into<String>) -> Self {
        self.dependencies.insert(handle.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn in_footer(mut self) -> Self {
        self.load_in_footer = true;
        self
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if self.handle.is_empty() {
            return Err(SpecError::EmptyName("asset handle"));
        }
        Ok(())
    }
}

/// A web font built from family and subset lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub handle: String,
    /// Families in `Name:weights` form, e.g. `Merriweather:400,700`.
    pub families: Vec<String>,
    #[serde(default)]
    pub subsets: Vec<String>,
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub load_in_footer: bool,
}

impl FontSpec {
    pub fn new(
        handle: impl Into<String>,
        families: impl IntoIterator<Item = impl Into<String>>,
        subsets: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            handle: handle.into(),
            families: families.into_iter().map(Into::into).collect(),
            subsets: subsets.into_iter().map(Into::into).collect(),
            dependencies: BTreeSet::new(),
            version: None,
            load_in_footer: false,
        }
    }

    /// Stylesheet URL requesting every family and subset.
    ///
    /// Families are joined with `|`, spaces become `+`, and subsets are
    /// comma-joined. The subset parameter is omitted when there are none.
    pub fn source_uri(&self) -> String {
        let family = self
            .families
            .iter()
            .map(|f| f.trim().replace(' ', "+"))
            .collect::<Vec<_>>()
            .join("|");

        let mut uri = format!("{}?family={}", FONT_SERVICE_URI, family);
        if !self.subsets.is_empty() {
            uri.push_str("&subset=");
            uri.push_str(&self.subsets.join(","));
        }
        uri
    }

    /// The stylesheet this font resolves to.
    pub fn to_asset(&self) -> AssetSpec {
        AssetSpec {
            handle: self.handle.clone(),
            source_uri: self.source_uri(),
            dependencies: self.dependencies.clone(),
            version: self.version.clone(),
            load_in_footer: self.load_in_footer,
        }
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if self.handle.is_empty() {
            return Err(SpecError::EmptyName("font handle"));
        }
        if self.families.iter().all(|f| f.trim().is_empty()) {
            return Err(SpecError::NoFontFamilies(self.handle.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_builder() {
        let script = AssetSpec::new("extant", "https://example.com/js/theme.js")
            .depends_on("jquery")
            .in_footer();
        assert!(script.dependencies.contains("jquery"));
        assert!(script.load_in_footer);
        assert!(script.version.is_none());
        assert!(script.validate().is_ok());
        assert!(AssetSpec::new("", "x").validate().is_err());
    }

    #[test]
    fn test_font_source_uri() {
        let font = FontSpec::new(
            "extant",
            ["Roboto Condensed:300,400,700", "Merriweather:400,400i,700"],
            ["latin", "latin-ext"],
        );
        assert_eq!(
            font.source_uri(),
            "https://fonts.googleapis.com/css?family=Roboto+Condensed:300,400,700|Merriweather:400,400i,700&subset=latin,latin-ext"
        );
    }

    #[test]
    fn test_font_without_subsets() {
        let font = FontSpec::new("f", ["Lora"], Vec::<String>::new());
        assert_eq!(font.source_uri(), "https://fonts.googleapis.com/css?family=Lora");
        assert_eq!(font.to_asset().handle, "f");
    }

    #[test]
    fn test_font_requires_family() {
        let font = FontSpec::new("f", [" "], ["latin"]);
        assert_eq!(font.validate(), Err(SpecError::NoFontFamilies("f".into())));
    }
}
