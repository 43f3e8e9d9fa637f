//! Post renderer: single view vs. listing view.

use serde::{Deserialize, Serialize};

use super::engine::{TemplateEngine, POST_TEMPLATE};
use crate::content::{ContentItem, ImageVariant, PostFormat, Term};
use crate::error::RenderError;
use crate::media::{MediaCandidate, MediaResolver, RenderContext};

/// Presentation settings shared by every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSettings {
    /// Placeholder shown when no image qualifies. Relative paths resolve
    /// against the theme's root URI.
    pub fallback_image: String,
    /// Site-wide image tried after every content-derived source.
    pub default_image: Option<ImageVariant>,
    /// Listing titles longer than this are cut; `0` disables truncation.
    pub title_max_chars: usize,
    /// Markup placed between byline items and before the tag list.
    pub separator: String,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            fallback_image: "images/featured-fallback.png".to_string(),
            default_image: None,
            title_max_chars: 80,
            separator: "&middot;".to_string(),
        }
    }
}

/// Which markup a render produces. Chosen once per call from
/// [`RenderContext::is_single_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Single,
    Listing,
}

impl ViewState {
    pub fn for_context(context: &RenderContext) -> Self {
        if context.is_single_view {
            ViewState::Single
        } else {
            ViewState::Listing
        }
    }
}

#[derive(Serialize)]
struct PostView<'a> {
    single: bool,
    id: u64,
    title: &'a str,
    permalink: &'a str,
    classes: String,
    separator: &'a str,
    title_max_chars: usize,
    date: &'a str,
    date_display: &'a str,
    byline: Byline,
    body: &'a str,
    page_links: Vec<PageLink>,
    categories: &'a [Term],
    tags: &'a [Term],
    media: Option<MediaView>,
    fallback_uri: Option<String>,
}

#[derive(Serialize)]
struct Byline {
    format_label: &'static str,
    format_uri: String,
    comments_label: String,
    comments_uri: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct PageLink {
    number: usize,
    uri: String,
    current: bool,
}

#[derive(Serialize)]
struct MediaView {
    uri: String,
    srcset: Option<String>,
    width: u32,
    height: u32,
    alt: String,
    class: String,
}

impl From<MediaCandidate> for MediaView {
    fn from(media: MediaCandidate) -> Self {
        let srcset = media.srcset();
        let class = match &media.size_name {
            Some(size) => format!("{} featured", size),
            None => "featured".to_string(),
        };
        Self {
            uri: media.uri,
            srcset,
            width: media.width,
            height: media.height,
            alt: media.alt,
            class,
        }
    }
}

/// Renders content items into article markup.
///
/// # Example
///
/// ```rust
/// use extant_render::{ContentItem, MediaResolver, MediaSettings, PostRenderer, RenderContext};
/// use extant_render::spec::ImageSizeTable;
///
/// let renderer = PostRenderer::new(
///     MediaResolver::new(ImageSizeTable::theme_defaults()),
///     MediaSettings::default(),
///     "https://example.com/themes/extant/",
/// )
/// .unwrap();
///
/// let item = ContentItem::new(1, "Hello", "https://example.com/hello/");
/// let html = renderer.render(&RenderContext::listing(), &item).unwrap();
/// assert!(html.contains(r#"<div class="featured-media">"#));
/// assert!(html.contains("featured-fallback"));
/// ```
pub struct PostRenderer {
    engine: TemplateEngine,
    resolver: MediaResolver,
    settings: MediaSettings,
    root_uri: String,
}

impl PostRenderer {
    pub fn new(
        resolver: MediaResolver,
        settings: MediaSettings,
        root_uri: impl Into<String>,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            resolver,
            settings,
            root_uri: root_uri.into(),
        })
    }

    pub fn resolver(&self) -> &MediaResolver {
        &self.resolver
    }

    pub fn engine_mut(&mut self) -> &mut TemplateEngine {
        &mut self.engine
    }

    /// URI of the placeholder graphic.
    pub fn fallback_uri(&self) -> String {
        let image = &self.settings.fallback_image;
        if image.contains("://") || image.starts_with('/') {
            image.clone()
        } else {
            format!("{}/{}", self.root_uri.trim_end_matches('/'), image)
        }
    }

    /// Renders `item` for `context`.
    ///
    /// Listing views resolve featured media and fall back to the placeholder.
    /// Single views never touch the media resolver.
    pub fn render(&self, context: &RenderContext, item: &ContentItem) -> Result<String, RenderError> {
        let state = ViewState::for_context(context);
        log::debug!("rendering post {} as {:?}", item.id, state);

        let pages = item.pages();
        let page = item.page.clamp(1, pages.len());

        let (body, page_links, media, fallback_uri) = match state {
            ViewState::Single => (pages[page - 1], page_links(item, pages.len(), page), None, None),
            ViewState::Listing => {
                let media = self.resolver.resolve_featured_media(context, item);
                let fallback = media.is_none().then(|| self.fallback_uri());
                ("", Vec::new(), media.map(MediaView::from), fallback)
            }
        };

        let view = PostView {
            single: state == ViewState::Single,
            id: item.id,
            title: &item.title,
            permalink: &item.permalink,
            classes: post_classes(item),
            separator: &self.settings.separator,
            title_max_chars: self.settings.title_max_chars,
            date: &item.date,
            date_display: &item.date_display,
            byline: byline(item),
            body,
            page_links,
            categories: &item.categories,
            tags: &item.tags,
            media,
            fallback_uri,
        };

        self.engine.render_named(POST_TEMPLATE, &view)
    }
}

fn post_classes(item: &ContentItem) -> String {
    let mut classes = vec![
        "entry".to_string(),
        "post".to_string(),
        format!("post-{}", item.id),
        format!("format-{}", item.format.slug()),
    ];
    if item.is_sticky {
        classes.push("sticky".to_string());
    }
    classes.join(" ")
}

fn byline(item: &ContentItem) -> Byline {
    let format_uri = match (item.format, &item.format_link) {
        (PostFormat::Standard, _) | (_, None) => item.permalink.clone(),
        (_, Some(link)) => link.clone(),
    };
    let (comments_label, comments_uri) = comments_link(item);
    Byline {
        format_label: item.format.label(),
        format_uri,
        comments_label,
        comments_uri,
    }
}

/// Label and target of the comments link. `None` target means comments are
/// closed with nothing to show, rendered as plain text.
fn comments_link(item: &ContentItem) -> (String, Option<String>) {
    match (item.comment_count, item.comments_open) {
        (0, false) => ("Comments Off".to_string(), None),
        (0, true) => (
            "Leave a comment".to_string(),
            Some(format!("{}#respond", item.permalink)),
        ),
        (1, _) => (
            "1 Comment".to_string(),
            Some(format!("{}#comments", item.permalink)),
        ),
        (n, _) => (
            format!("{} Comments", n),
            Some(format!("{}#comments", item.permalink)),
        ),
    }
}

/// Links to every page of a paginated body. Empty for single-page bodies.
fn page_links(item: &ContentItem, total: usize, current: usize) -> Vec<PageLink> {
    if total < 2 {
        return Vec::new();
    }
    (1..=total)
        .map(|number| PageLink {
            number,
            uri: if number == 1 {
                item.permalink.clone()
            } else {
                format!("{}/{}/", item.permalink.trim_end_matches('/'), number)
            },
            current: number == current,
        })
        .collect()
}
