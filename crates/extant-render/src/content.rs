//! Content items as handed over by the host's query.
//!
//! These types sit at the host boundary. The host builds them (or
//! deserializes them from JSON) and passes them in read-only. Permalinks and
//! dates arrive already formatted, because URL generation and localisation
//! belong to the host.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::spec::ImageSizeSpec;

/// Marker that splits a post body into pages.
pub const PAGE_BREAK: &str = "<!--nextpage-->";

/// Post formats the theme declares support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    #[default]
    Standard,
    Aside,
    Audio,
    Chat,
    Image,
    Gallery,
    Link,
    Quote,
    Status,
    Video,
}

impl PostFormat {
    /// Every non-standard format, in declaration order.
    pub const SUPPORTED: [PostFormat; 9] = [
        PostFormat::Aside,
        PostFormat::Audio,
        PostFormat::Chat,
        PostFormat::Image,
        PostFormat::Gallery,
        PostFormat::Link,
        PostFormat::Quote,
        PostFormat::Status,
        PostFormat::Video,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PostFormat::Standard => "standard",
            PostFormat::Aside => "aside",
            PostFormat::Audio => "audio",
            PostFormat::Chat => "chat",
            PostFormat::Image => "image",
            PostFormat::Gallery => "gallery",
            PostFormat::Link => "link",
            PostFormat::Quote => "quote",
            PostFormat::Status => "status",
            PostFormat::Video => "video",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostFormat::Standard => "Standard",
            PostFormat::Aside => "Aside",
            PostFormat::Audio => "Audio",
            PostFormat::Chat => "Chat",
            PostFormat::Image => "Image",
            PostFormat::Gallery => "Gallery",
            PostFormat::Link => "Link",
            PostFormat::Quote => "Quote",
            PostFormat::Status => "Status",
            PostFormat::Video => "Video",
        }
    }
}

/// A concrete image file at known dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub uri: String,
    pub width: u32,
    pub height: u32,
}

/// A media file attached to a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u64,
    /// URI of the full-size original.
    pub uri: String,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    #[serde(default)]
    pub alt: String,
    /// Intermediate sizes the host has already generated, by size name.
    #[serde(default)]
    pub sizes: BTreeMap<String, ImageVariant>,
}

fn default_mime_type() -> String {
    "image/jpeg".to_string()
}

impl Attachment {
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// The file this attachment serves for `size`.
    ///
    /// A pre-generated intermediate wins. Otherwise the dimensions are derived
    /// from the size's box and the URI follows the `<stem>-<w>x<h>.<ext>` naming of
    /// generated sizes. An original that already fits the size is returned
    /// as-is.
    pub fn variant(&self, size: &ImageSizeSpec) -> ImageVariant {
        if let Some(existing) = self.sizes.get(&size.name) {
            return existing.clone();
        }

        match size.fit(self.width, self.height) {
            Some((w, h)) => ImageVariant {
                uri: sized_uri(&self.uri, w, h),
                width: w,
                height: h,
            },
            None => ImageVariant {
                uri: self.uri.clone(),
                width: self.width,
                height: self.height,
            },
        }
    }
}

/// Inserts `-<w>x<h>` before the extension of the last path segment.
fn sized_uri(uri: &str, width: u32, height: u32) -> String {
    let (base, query) = match uri.find(['?', '#']) {
        Some(i) => uri.split_at(i),
        None => (uri, ""),
    };
    let slash = base.rfind('/').map_or(0, |i| i + 1);
    let file = &base[slash..];

    let sized = match Path::new(file).extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let stem = &file[..file.len() - ext.len() - 1];
            format!("{}-{}x{}.{}", stem, width, height, ext)
        }
        None => format!("{}-{}x{}", file, width, height),
    };
    format!("{}{}{}", &base[..slash], sized, query)
}

/// A taxonomy term linked from the post footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    pub uri: String,
}

/// A post or page as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub title: String,
    pub permalink: String,
    /// Body markup, possibly split into pages with [`PAGE_BREAK`].
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub format: PostFormat,
    /// Archive link for the post format. Standard posts link to themselves.
    #[serde(default)]
    pub format_link: Option<String>,
    #[serde(default)]
    pub is_sticky: bool,
    /// Machine-readable publish date (ISO 8601).
    pub date: String,
    /// Publish date as the site displays it.
    pub date_display: String,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default = "default_true")]
    pub comments_open: bool,
    #[serde(default)]
    pub categories: Vec<Term>,
    #[serde(default)]
    pub tags: Vec<Term>,
    #[serde(default)]
    pub featured_image: Option<Attachment>,
    /// Attached media in menu order.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// 1-based page of a paginated body.
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_true() -> bool {
    true
}

fn default_page() -> usize {
    1
}

impl ContentItem {
    /// Minimal item with a title and permalink; everything else empty.
    pub fn new(id: u64, title: impl Into<String>, permalink: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            permalink: permalink.into(),
            content: String::new(),
            format: PostFormat::Standard,
            format_link: None,
            is_sticky: false,
            date: String::new(),
            date_display: String::new(),
            comment_count: 0,
            comments_open: true,
            categories: Vec::new(),
            tags: Vec::new(),
            featured_image: None,
            attachments: Vec::new(),
            page: 1,
        }
    }

    pub fn attachment(&self, id: u64) -> Option<&Attachment> {
        self.attachments
            .iter()
            .chain(self.featured_image.iter())
            .find(|a| a.id == id)
    }

    /// The first attachment that is an image.
    pub fn first_image_attachment(&self) -> Option<&Attachment> {
        self.attachments.iter().find(|a| a.is_image())
    }

    /// Body pages split on [`PAGE_BREAK`]. Always at least one page.
    pub fn pages(&self) -> Vec<&str> {
        self.content.split(PAGE_BREAK).map(str::trim).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(width: u32, height: u32) -> Attachment {
        Attachment {
            id: 7,
            uri: "https://example.com/uploads/photo.jpg".into(),
            width,
            height,
            mime_type: "image/jpeg".into(),
            alt: String::new(),
            sizes: BTreeMap::new(),
        }
    }

    #[test]
    fn test_sized_uri() {
        assert_eq!(
            sized_uri("https://example.com/uploads/photo.jpg", 950, 535),
            "https://example.com/uploads/photo-950x535.jpg"
        );
        assert_eq!(
            sized_uri("https://example.com/a.b/photo.tar.png?v=2", 10, 20),
            "https://example.com/a.b/photo.tar-10x20.png?v=2"
        );
        assert_eq!(sized_uri("photo", 1, 2), "photo-1x2");
    }

    #[test]
    fn test_variant_derived() {
        let spec = ImageSizeSpec::cropped("xlarge", 950, 535);
        let v = photo(2000, 1200).variant(&spec);
        assert_eq!(v.uri, "https://example.com/uploads/photo-950x535.jpg");
        assert_eq!((v.width, v.height), (950, 535));
    }

    #[test]
    fn test_variant_original_when_small() {
        let spec = ImageSizeSpec::cropped("xlarge-2x", 1900, 1069);
        let v = photo(960, 540).variant(&spec);
        assert_eq!(v.uri, "https://example.com/uploads/photo.jpg");
        assert_eq!(v.width, 960);
    }

    #[test]
    fn test_variant_prefers_generated() {
        let spec = ImageSizeSpec::cropped("large", 750, 422);
        let mut a = photo(2000, 1200);
        a.sizes.insert(
            "large".into(),
            ImageVariant {
                uri: "https://cdn.example.com/large.jpg".into(),
                width: 750,
                height: 422,
            },
        );
        assert_eq!(a.variant(&spec).uri, "https://cdn.example.com/large.jpg");
    }

    #[test]
    fn test_pages() {
        let mut item = ContentItem::new(1, "Paged", "https://example.com/paged/");
        item.content = "<p>one</p>\n<!--nextpage-->\n<p>two</p>".into();
        assert_eq!(item.pages(), vec!["<p>one</p>", "<p>two</p>"]);

        item.content = String::new();
        assert_eq!(item.pages().len(), 1);
    }

    #[test]
    fn test_first_image_attachment_skips_non_images() {
        let mut item = ContentItem::new(1, "t", "p");
        let mut pdf = photo(0, 0);
        pdf.id = 1;
        pdf.mime_type = "application/pdf".into();
        item.attachments = vec![pdf, photo(800, 600)];
        assert_eq!(item.first_image_attachment().unwrap().id, 7);
        assert!(item.attachment(1).is_some());
    }

    #[test]
    fn test_deserialize_defaults() {
        let item: ContentItem = serde_json::from_str(
            r#"{"id": 3, "title": "Hi", "permalink": "/hi/", "date": "2016-01-01", "date_display": "January 1, 2016"}"#,
        )
        .unwrap();
        assert_eq!(item.format, PostFormat::Standard);
        assert!(item.comments_open);
        assert_eq!(item.page, 1);
    }
}
