//! # Extant Render - Responsive Media and Post Templates
//!
//! `extant-render` holds the decision logic behind the theme's markup:
//!
//! - [`spec`]: typed capability declarations (image sizes, layouts, assets, fonts)
//! - [`media`]: picks the featured image for a post in a given view context
//! - [`template`]: renders single and listing views with MiniJinja
//!
//! ## Quick Start
//!
//! ```rust
//! use extant_render::{Attachment, ContentItem, MediaResolver, RenderContext, SourceKind};
//! use extant_render::spec::ImageSizeTable;
//!
//! let mut item = ContentItem::new(1, "Lake", "https://example.com/lake/");
//! item.featured_image = Some(Attachment {
//!     id: 10,
//!     uri: "https://example.com/uploads/lake.jpg".into(),
//!     width: 2400,
//!     height: 1600,
//!     mime_type: "image/jpeg".into(),
//!     alt: "A lake".into(),
//!     sizes: Default::default(),
//! });
//!
//! let resolver = MediaResolver::new(ImageSizeTable::theme_defaults());
//! let ctx = RenderContext::listing().home(true).sticky(true);
//! let media = resolver.resolve_featured_media(&ctx, &item).unwrap();
//!
//! assert_eq!(media.source_kind, SourceKind::Featured);
//! assert_eq!(media.uri, "https://example.com/uploads/lake-950x535.jpg");
//! assert_eq!(media.high_density.unwrap().size_name, "xlarge-2x");
//! ```

mod content;
mod error;
pub mod media;
pub mod spec;
pub mod template;

pub use content::{Attachment, ContentItem, ImageVariant, PostFormat, Term, PAGE_BREAK};
pub use error::{RenderError, SpecError};
pub use media::{MediaCandidate, MediaResolver, RenderContext, SizedVariant, SourceKind};
pub use template::{MediaSettings, PostRenderer, ViewState};
