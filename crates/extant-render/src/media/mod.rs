//! Responsive featured-media resolution.
//!
//! Listing views show one image per post. [`MediaResolver`] decides which one
//! by trying four sources in a fixed order and taking the first image that is
//! wide enough:
//!
//! ```text
//! featured image → first <img> in the body → first image attachment → site default
//! ```
//!
//! The search is an ordered fallback, not a best match. A later source is
//! never preferred over an earlier one that qualifies, even if it is larger.
//!
//! # Size selection
//!
//! | Context                  | Size     | High density | Minimum width |
//! |--------------------------|----------|--------------|---------------|
//! | home page and sticky     | `xlarge` | `xlarge-2x`  | 950           |
//! | anything else            | `large`  | `large-2x`   | 750           |
//!
//! Attachment-backed images are measured at the target size, so an image only
//! qualifies if the file actually served is at least the minimum width. Raw
//! images (a scanned `<img>` with no attachment, or the site default) are
//! measured by their declared width. If that width is unknown, the image does
//! not qualify.
//!
//! A `None` result is not an error. The renderer shows the theme placeholder
//! instead.

mod scan;

use serde::{Deserialize, Serialize};

use crate::content::{Attachment, ContentItem, ImageVariant};
use crate::spec::{ImageSizeSpec, ImageSizeTable, LARGE, LARGE_WIDTH, XLARGE, XLARGE_WIDTH};

pub use scan::{first_image, ScannedImage};

/// Per-request view state derived from the current query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    pub is_single_view: bool,
    pub is_sticky: bool,
    pub is_home_page: bool,
}

impl RenderContext {
    /// Context for a single post view.
    pub fn single() -> Self {
        Self {
            is_single_view: true,
            ..Self::default()
        }
    }

    /// Context for a post shown in a listing.
    pub fn listing() -> Self {
        Self::default()
    }

    pub fn sticky(mut self, is_sticky: bool) -> Self {
        self.is_sticky = is_sticky;
        self
    }

    pub fn home(mut self, is_home_page: bool) -> Self {
        self.is_home_page = is_home_page;
        self
    }

    /// True for a sticky post on the home page, which gets the wide treatment.
    pub fn is_featured_slot(&self) -> bool {
        self.is_home_page && self.is_sticky
    }

    /// Size name the featured image is requested at.
    pub fn size_name(&self) -> &'static str {
        if self.is_featured_slot() {
            XLARGE
        } else {
            LARGE
        }
    }

    /// Narrowest image allowed in this context.
    pub fn minimum_width(&self) -> u32 {
        if self.is_featured_slot() {
            XLARGE_WIDTH
        } else {
            LARGE_WIDTH
        }
    }
}

/// Where a candidate image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Featured,
    Scan,
    Attachment,
    Default,
}

impl SourceKind {
    /// Search order.
    pub const ORDER: [SourceKind; 4] = [
        SourceKind::Featured,
        SourceKind::Scan,
        SourceKind::Attachment,
        SourceKind::Default,
    ];
}

/// An image rendered at a named size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizedVariant {
    pub size_name: String,
    pub uri: String,
    pub width: u32,
    pub height: u32,
}

/// The image chosen for a listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaCandidate {
    pub source_kind: SourceKind,
    pub uri: String,
    pub width: u32,
    pub height: u32,
    /// Size the image was resolved at. `None` for raw images.
    pub size_name: Option<String>,
    pub alt: String,
    pub attachment_id: Option<u64>,
    /// Double-density alternate, for attachment-backed images.
    pub high_density: Option<SizedVariant>,
}

impl MediaCandidate {
    /// `srcset` value offering the high-density file, when it is a distinct
    /// file from the one in `src`.
    pub fn srcset(&self) -> Option<String> {
        let hd = self.high_density.as_ref()?;
        if hd.uri == self.uri {
            return None;
        }
        Some(format!("{} 1x, {} 2x", self.uri, hd.uri))
    }
}

/// Picks the featured media for a content item.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    sizes: ImageSizeTable,
    default_image: Option<ImageVariant>,
}

impl MediaResolver {
    pub fn new(sizes: ImageSizeTable) -> Self {
        Self {
            sizes,
            default_image: None,
        }
    }

    /// Sets the site-wide image used when the item has nothing suitable.
    pub fn with_default_image(mut self, image: Option<ImageVariant>) -> Self {
        self.default_image = image;
        self
    }

    pub fn sizes(&self) -> &ImageSizeTable {
        &self.sizes
    }

    /// Resolves the featured media for `item` in `context`.
    ///
    /// Returns the first candidate, in [`SourceKind::ORDER`], whose width is at
    /// least [`RenderContext::minimum_width`]. Returns `None` when no source
    /// qualifies.
    pub fn resolve_featured_media(
        &self,
        context: &RenderContext,
        item: &ContentItem,
    ) -> Option<MediaCandidate> {
        let min_width = context.minimum_width();
        let size = self.sizes.get(context.size_name());
        if size.is_none() {
            log::warn!(
                "image size '{}' is not registered; measuring originals",
                context.size_name()
            );
        }

        for kind in SourceKind::ORDER {
            let Some(candidate) = self.candidate(kind, item, size) else {
                log::trace!("post {}: no {:?} image", item.id, kind);
                continue;
            };
            if candidate.width >= min_width {
                log::debug!(
                    "post {}: using {:?} image {} ({}px)",
                    item.id,
                    kind,
                    candidate.uri,
                    candidate.width
                );
                return Some(candidate);
            }
            log::trace!(
                "post {}: {:?} image {} is {}px, below {}px",
                item.id,
                kind,
                candidate.uri,
                candidate.width,
                min_width
            );
        }

        log::debug!("post {}: no image at least {}px wide", item.id, min_width);
        None
    }

    fn candidate(
        &self,
        kind: SourceKind,
        item: &ContentItem,
        size: Option<&ImageSizeSpec>,
    ) -> Option<MediaCandidate> {
        match kind {
            SourceKind::Featured => item
                .featured_image
                .as_ref()
                .filter(|a| a.is_image())
                .map(|a| self.from_attachment(kind, a, size)),
            SourceKind::Scan => {
                let scanned = first_image(&item.content)?;
                let attached = scanned.attachment_id.and_then(|id| item.attachment(id));
                match attached {
                    Some(a) => {
                        let mut candidate = self.from_attachment(kind, a, size);
                        if !scanned.alt.is_empty() {
                            candidate.alt = scanned.alt;
                        }
                        Some(candidate)
                    }
                    None => Some(raw(
                        kind,
                        scanned.src,
                        scanned.width?,
                        scanned.height.unwrap_or(0),
                        scanned.alt,
                    )),
                }
            }
            SourceKind::Attachment => item
                .first_image_attachment()
                .map(|a| self.from_attachment(kind, a, size)),
            SourceKind::Default => self.default_image.as_ref().map(|image| {
                raw(
                    kind,
                    image.uri.clone(),
                    image.width,
                    image.height,
                    String::new(),
                )
            }),
        }
    }

    fn from_attachment(
        &self,
        kind: SourceKind,
        attachment: &Attachment,
        size: Option<&ImageSizeSpec>,
    ) -> MediaCandidate {
        let (variant, size_name) = match size {
            Some(spec) => (attachment.variant(spec), Some(spec.name.clone())),
            None => (
                ImageVariant {
                    uri: attachment.uri.clone(),
                    width: attachment.width,
                    height: attachment.height,
                },
                None,
            ),
        };

        let high_density = size
            .and_then(|spec| self.sizes.high_density(&spec.name))
            .map(|hd| {
                let v = attachment.variant(hd);
                SizedVariant {
                    size_name: hd.name.clone(),
                    uri: v.uri,
                    width: v.width,
                    height: v.height,
                }
            });

        MediaCandidate {
            source_kind: kind,
            uri: variant.uri,
            width: variant.width,
            height: variant.height,
            size_name,
            alt: attachment.alt.clone(),
            attachment_id: Some(attachment.id),
            high_density,
        }
    }
}

fn raw(kind: SourceKind, uri: String, width: u32, height: u32, alt: String) -> MediaCandidate {
    MediaCandidate {
        source_kind: kind,
        uri,
        width,
        height,
        size_name: None,
        alt,
        attachment_id: None,
        high_density: None,
    }
}
