//! Finds the first image embedded in body markup.

use once_cell::sync::Lazy;
use regex::Regex;

static IMG_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<img\b[^>]*>").expect("img tag pattern is valid")
});

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\b([a-z-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute pattern is valid")
});

static ATTACHMENT_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bwp-image-(\d+)\b").expect("attachment class pattern is valid")
});

/// An `<img>` lifted out of body markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedImage {
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: String,
    /// Attachment id from a `wp-image-<id>` class, if present.
    pub attachment_id: Option<u64>,
}

/// Returns the first `<img>` in `html` that has a non-empty `src`.
pub fn first_image(html: &str) -> Option<ScannedImage> {
    IMG_TAG.find_iter(html).find_map(|tag| parse_tag(tag.as_str()))
}

fn parse_tag(tag: &str) -> Option<ScannedImage> {
    let mut image = ScannedImage {
        src: String::new(),
        width: None,
        height: None,
        alt: String::new(),
        attachment_id: None,
    };

    for caps in ATTRIBUTE.captures_iter(tag) {
        let name = caps[1].to_ascii_lowercase();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str())
            .trim();

        match name.as_str() {
            "src" => image.src = value.to_string(),
            "width" => image.width = value.parse().ok(),
            "height" => image.height = value.parse().ok(),
            "alt" => image.alt = value.to_string(),
            "class" => {
                image.attachment_id = ATTACHMENT_CLASS
                    .captures(value)
                    .and_then(|c| c[1].parse().ok());
            }
            _ => {}
        }
    }

    if image.src.is_empty() {
        None
    } else {
        Some(image)
    }
}
