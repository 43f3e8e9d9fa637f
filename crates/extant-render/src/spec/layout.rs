//! Named page layouts.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Layout used when a page has none selected.
pub const DEFAULT_LAYOUT: &str = "grid-landscape";

/// A selectable layout with an admin preview image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub name: String,
    pub label: String,
    /// Whether the layout can be chosen per post, rather than only globally.
    pub is_post_layout: bool,
    /// Preview path with one `%s` standing in for the base URI.
    pub preview_image_template: String,
}

impl LayoutSpec {
    /// A global (non-post) layout whose preview lives at
    /// `%s/images/layouts/<name>.png`.
    pub fn global(name: impl Into<String>, label: impl Into<String>) -> Self {
        let name = name.into();
        let preview_image_template = format!("%s/images/layouts/{}.png", name);
        Self {
            name,
            label: label.into(),
            is_post_layout: false,
            preview_image_template,
        }
    }

    /// Expands the preview template against `base`. A trailing slash on
    /// `base` is dropped so the result never contains `//`.
    pub fn preview_image(&self, base: &str) -> String {
        self.preview_image_template
            .replacen("%s", base.trim_end_matches('/'), 1)
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::EmptyName("layout"));
        }
        if self.preview_image_template.matches("%s").count() != 1 {
            return Err(SpecError::BadPreviewTemplate(self.name.clone()));
        }
        Ok(())
    }
}

/// The theme's layouts, default first.
pub fn theme_layouts() -> Vec<LayoutSpec> {
    vec![
        LayoutSpec::global(DEFAULT_LAYOUT, "Grid: Landscape"),
        LayoutSpec::global("grid-portrait", "Grid: Portrait"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_layouts() {
        let layouts = theme_layouts();
        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0].name, "grid-landscape");
        assert_eq!(layouts[1].label, "Grid: Portrait");
        assert!(layouts.iter().all(|l| !l.is_post_layout));
        assert!(layouts.iter().all(|l| l.validate().is_ok()));
    }

    #[test]
    fn test_preview_image() {
        let layout = LayoutSpec::global("grid-portrait", "Grid: Portrait");
        assert_eq!(
            layout.preview_image("https://example.com/themes/extant/"),
            "https://example.com/themes/extant/images/layouts/grid-portrait.png"
        );
        assert_eq!(
            layout.preview_image("/t"),
            "/t/images/layouts/grid-portrait.png"
        );
    }

    #[test]
    fn test_validate_template() {
        let mut layout = LayoutSpec::global("x", "X");
        layout.preview_image_template = "images/x.png".into();
        assert_eq!(
            layout.validate(),
            Err(SpecError::BadPreviewTemplate("x".into()))
        );
    }
}
