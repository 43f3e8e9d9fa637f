//! Capability spec tables.
//!
//! Typed, immutable declarations of what the theme registers with its host:
//! image sizes, layouts, scripts, styles and fonts. Each spec validates itself
//! once, at registration time. Registries keyed by name overwrite on
//! re-registration, so declaring the same entry twice leaves one record.

mod asset;
mod image;
mod layout;

pub use asset::{AssetSpec, FontSpec, FONT_SERVICE_URI};
pub use image::{
    ImageSizeSpec, ImageSizeTable, HIGH_DENSITY_SUFFIX, LARGE, LARGE_WIDTH, POST_THUMBNAIL, XLARGE,
    XLARGE_WIDTH,
};
pub use layout::{theme_layouts, LayoutSpec, DEFAULT_LAYOUT};
