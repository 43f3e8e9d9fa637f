//! The host-side capability store.
//!
//! Registration callbacks write into [`Capabilities`]. Every table is keyed by
//! name, so declaring the same thing twice overwrites the earlier entry and
//! leaves a single record.

use std::collections::BTreeMap;

use serde::Serialize;

use extant_render::spec::{AssetSpec, FontSpec, ImageSizeSpec, ImageSizeTable, LayoutSpec};
use extant_render::{PostFormat, SpecError};

/// A declared theme feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ThemeSupport {
    /// A feature with no arguments.
    Flag,
    /// Layout selection with the layout used when none is chosen.
    Layouts { default: String },
    PostFormats { formats: Vec<PostFormat> },
}

/// Everything the theme has declared to its host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub supports: BTreeMap<String, ThemeSupport>,
    pub content_width: Option<u32>,
    pub menus: BTreeMap<String, String>,
    pub post_thumbnail: Option<ImageSizeSpec>,
    pub image_sizes: ImageSizeTable,
    pub layouts: BTreeMap<String, LayoutSpec>,
    pub default_layout: Option<String>,
    pub scripts: BTreeMap<String, AssetSpec>,
    pub styles: BTreeMap<String, AssetSpec>,
    pub fonts: BTreeMap<String, FontSpec>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_theme_support(&mut self, feature: impl Into<String>, support: ThemeSupport) {
        let feature = feature.into();
        if let ThemeSupport::Layouts { default } = &support {
            self.default_layout = Some(default.clone());
        }
        log::debug!("theme support: {}", feature);
        self.supports.insert(feature, support);
    }

    pub fn supports(&self, feature: &str) -> bool {
        self.supports.contains_key(feature)
    }

    pub fn set_content_width(&mut self, width: u32) {
        self.content_width = Some(width);
    }

    pub fn register_menu(&mut self, location: impl Into<String>, description: impl Into<String>) {
        self.menus.insert(location.into(), description.into());
    }

    pub fn set_post_thumbnail(&mut self, spec: ImageSizeSpec) -> Result<(), SpecError> {
        spec.validate()?;
        self.post_thumbnail = Some(spec);
        Ok(())
    }

    pub fn add_image_size(&mut self, spec: ImageSizeSpec) -> Result<(), SpecError> {
        spec.validate()?;
        log::debug!("image size {} {}x{}", spec.name, spec.width, spec.height);
        self.image_sizes.insert(spec);
        Ok(())
    }

    pub fn register_layout(&mut self, layout: LayoutSpec) -> Result<(), SpecError> {
        layout.validate()?;
        self.layouts.insert(layout.name.clone(), layout);
        Ok(())
    }

    pub fn register_script(&mut self, script: AssetSpec) -> Result<(), SpecError> {
        script.validate()?;
        log::debug!("script {} -> {}", script.handle, script.source_uri);
        self.scripts.insert(script.handle.clone(), script);
        Ok(())
    }

    pub fn register_style(&mut self, style: AssetSpec) -> Result<(), SpecError> {
        style.validate()?;
        log::debug!("style {} -> {}", style.handle, style.source_uri);
        self.styles.insert(style.handle.clone(), style);
        Ok(())
    }

    pub fn register_font(&mut self, font: FontSpec) -> Result<(), SpecError> {
        font.validate()?;
        self.fonts.insert(font.handle.clone(), font);
        Ok(())
    }
}
