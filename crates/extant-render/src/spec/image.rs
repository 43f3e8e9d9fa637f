//! Named image sizes.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Size name of the default post thumbnail.
pub const POST_THUMBNAIL: &str = "post-thumbnail";
/// Featured image size for sticky posts on the home page.
pub const XLARGE: &str = "xlarge";
/// Featured image size for everything else in listings.
pub const LARGE: &str = "large";
/// Width of [`XLARGE`], and the narrowest image allowed in that slot.
pub const XLARGE_WIDTH: u32 = 950;
/// Width of [`LARGE`], and the narrowest image allowed in that slot.
pub const LARGE_WIDTH: u32 = 750;
/// Suffix appended to a size name to get its high-density counterpart.
pub const HIGH_DENSITY_SUFFIX: &str = "-2x";

/// A named image size.
///
/// With `crop` set, images are hard-cropped to the exact box. Without it they
/// are scaled proportionally to fit inside the box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSizeSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub crop: bool,
}

impl ImageSizeSpec {
    /// Creates a hard-cropped size.
    pub fn cropped(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            crop: true,
        }
    }

    /// Creates a proportionally scaled size.
    pub fn scaled(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            crop: false,
        }
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::EmptyName("image size"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SpecError::ZeroDimension {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Dimensions an `orig_w`×`orig_h` image takes at this size.
    ///
    /// Returns `None` when no intermediate image would be generated, which
    /// happens when the original already fits. Callers then use the original.
    pub fn fit(&self, orig_w: u32, orig_h: u32) -> Option<(u32, u32)> {
        if orig_w == 0 || orig_h == 0 {
            return None;
        }

        let (w, h) = if self.crop {
            (self.width.min(orig_w), self.height.min(orig_h))
        } else {
            let ratio = f64::min(
                self.width as f64 / orig_w as f64,
                self.height as f64 / orig_h as f64,
            );
            if ratio >= 1.0 {
                return None;
            }
            let w = ((orig_w as f64 * ratio).round() as u32).max(1);
            let h = ((orig_h as f64 * ratio).round() as u32).max(1);
            (w, h)
        };

        if w == orig_w && h == orig_h {
            None
        } else {
            Some((w, h))
        }
    }

    /// Name of the matching high-density size.
    pub fn high_density_name(&self) -> String {
        format!("{}{}", self.name, HIGH_DENSITY_SUFFIX)
    }
}

/// Ordered collection of named image sizes.
///
/// Inserting a size whose name is already present replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageSizeTable {
    sizes: Vec<ImageSizeSpec>,
}

impl ImageSizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The theme's custom sizes: `xlarge`, `xlarge-2x`, `large`, `large-2x`.
    pub fn theme_defaults() -> Self {
        let mut table = Self::new();
        table.insert(ImageSizeSpec::cropped(XLARGE, XLARGE_WIDTH, 535));
        table.insert(ImageSizeSpec::cropped("xlarge-2x", XLARGE_WIDTH * 2, 1069));
        table.insert(ImageSizeSpec::cropped(LARGE, LARGE_WIDTH, 422));
        table.insert(ImageSizeSpec::cropped("large-2x", LARGE_WIDTH * 2, 844));
        table
    }

    /// The post thumbnail size, kept apart from the named sizes.
    pub fn post_thumbnail() -> ImageSizeSpec {
        ImageSizeSpec::cropped(POST_THUMBNAIL, 213, 160)
    }

    pub fn insert(&mut self, spec: ImageSizeSpec) {
        match self.sizes.iter_mut().find(|s| s.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.sizes.push(spec),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ImageSizeSpec> {
        self.sizes.iter().find(|s| s.name == name)
    }

    /// Looks up the `-2x` counterpart of `name`.
    pub fn high_density(&self, name: &str) -> Option<&ImageSizeSpec> {
        self.get(&format!("{}{}", name, HIGH_DENSITY_SUFFIX))
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        self.sizes.iter().try_for_each(ImageSizeSpec::validate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageSizeSpec> {
        self.sizes.iter()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
