//! Listing and single-view rendering through the public API.

use std::collections::BTreeMap;

use extant_render::spec::ImageSizeTable;
use extant_render::{
    Attachment, ContentItem, MediaResolver, MediaSettings, PostFormat, PostRenderer,
    RenderContext, Term,
};

const ROOT_URI: &str = "https://example.com/wp-content/themes/extant/";

fn renderer() -> PostRenderer {
    PostRenderer::new(
        MediaResolver::new(ImageSizeTable::theme_defaults()),
        MediaSettings::default(),
        ROOT_URI,
    )
    .unwrap()
}

fn image(id: u64, width: u32, height: u32) -> Attachment {
    Attachment {
        id,
        uri: format!("https://example.com/uploads/photo-{}.jpg", id),
        width,
        height,
        mime_type: "image/jpeg".into(),
        alt: "Mountains & sky".into(),
        sizes: BTreeMap::new(),
    }
}

fn post() -> ContentItem {
    let mut item = ContentItem::new(42, "Into the Hills", "https://example.com/into-the-hills/");
    item.date = "2016-05-04T08:30:00+00:00".into();
    item.date_display = "May 4, 2016".into();
    item
}

#[test]
fn home_sticky_with_narrow_attachment_shows_fallback() {
    let mut item = post();
    item.attachments = vec![image(1, 900, 600)];
    let ctx = RenderContext::listing().home(true).sticky(true);

    let renderer = renderer();
    assert!(renderer
        .resolver()
        .resolve_featured_media(&ctx, &item)
        .is_none());

    let html = renderer.render(&ctx, &item).unwrap();
    assert!(html.contains(r#"<div class="featured-media">"#));
    assert!(html.contains(
        r#"src="https://example.com/wp-content/themes/extant/images/featured-fallback.png""#
    ));
    assert!(html.contains(r#"class="featured-fallback""#));
    assert!(!html.contains("photo-1"));
}

#[test]
fn home_sticky_with_wide_featured_image_offers_2x() {
    let mut item = post();
    item.featured_image = Some(image(7, 2400, 1600));
    let ctx = RenderContext::listing().home(true).sticky(true);

    let html = renderer().render(&ctx, &item).unwrap();
    assert!(html.contains(r#"src="https://example.com/uploads/photo-7-950x535.jpg""#));
    assert!(html.contains(
        r#"srcset="https://example.com/uploads/photo-7-950x535.jpg 1x, https://example.com/uploads/photo-7-1900x1069.jpg 2x""#
    ));
    assert!(html.contains(r#"width="950" height="535""#));
    assert!(html.contains(r#"class="xlarge featured""#));
    assert!(html.contains(r#"alt="Mountains &amp; sky""#));
    assert!(!html.contains("featured-fallback"));
}

#[test]
fn listing_title_is_linked_and_truncated() {
    let mut item = post();
    item.title = "x".repeat(120);
    let settings = MediaSettings {
        title_max_chars: 10,
        ..MediaSettings::default()
    };
    let renderer = PostRenderer::new(
        MediaResolver::new(ImageSizeTable::theme_defaults()),
        settings,
        ROOT_URI,
    )
    .unwrap();

    let html = renderer.render(&RenderContext::listing(), &item).unwrap();
    assert!(html.contains(&format!(
        r#"rel="bookmark" itemprop="url">{}…</a></h2>"#,
        "x".repeat(9)
    )));
}

#[test]
fn both_views_share_the_byline() {
    let mut item = post();
    item.comment_count = 3;
    item.format = PostFormat::Aside;
    item.format_link = Some("https://example.com/type/aside/".into());

    let renderer = renderer();
    let single = renderer.render(&RenderContext::single(), &item).unwrap();
    let listing = renderer.render(&RenderContext::listing(), &item).unwrap();

    for html in [&single, &listing] {
        assert!(html.contains(r#"<div class="entry-byline">"#));
        assert!(html.contains(
            r#"<a href="https://example.com/type/aside/" class="post-format-link">Aside</a>"#
        ));
        assert!(html.contains(r#"<span class="sep">&middot;</span>"#));
        assert!(html.contains(">May 4, 2016</time>"));
        assert!(html.contains(
            r#"<a href="https://example.com/into-the-hills/#comments" class="comments-link">3 Comments</a>"#
        ));
    }

    assert!(listing.contains(
        r#"<a class="entry-permalink" href="https://example.com/into-the-hills/" rel="bookmark" itemprop="url"><time"#
    ));
    assert!(!single.contains("entry-permalink"));
}

#[test]
fn single_view_ignores_media_and_lists_terms() {
    let mut item = post();
    item.featured_image = Some(image(7, 2400, 1600));
    item.content = "<p>Walk.</p>".into();
    item.categories = vec![
        Term {
            name: "Travel".into(),
            uri: "https://example.com/category/travel/".into(),
        },
        Term {
            name: "Outdoors".into(),
            uri: "https://example.com/category/outdoors/".into(),
        },
    ];
    item.tags = vec![Term {
        name: "hiking".into(),
        uri: "https://example.com/tag/hiking/".into(),
    }];

    let html = renderer().render(&RenderContext::single(), &item).unwrap();
    assert!(!html.contains("featured-media"));
    assert!(!html.contains("photo-7"));
    assert!(html.contains("<p>Walk.</p>"));

    let category = html.find(r#"class="entry-terms category""#).unwrap();
    let tag = html.find(r#"class="entry-terms post_tag""#).unwrap();
    assert!(category < tag);
    assert!(html.contains(
        r#"<a href="https://example.com/category/travel/" rel="tag">Travel</a>, <a href="https://example.com/category/outdoors/" rel="tag">Outdoors</a>"#
    ));
    assert!(html.contains(r#"<span class="sep">&middot;</span><span class="entry-terms post_tag""#));
}

#[test]
fn single_view_without_tags_has_no_tag_separator() {
    let mut item = post();
    item.categories = vec![Term {
        name: "Travel".into(),
        uri: "https://example.com/category/travel/".into(),
    }];
    let html = renderer().render(&RenderContext::single(), &item).unwrap();
    assert!(!html.contains("post_tag"));
}

#[test]
fn single_view_paginates_body() {
    let mut item = post();
    item.content = "<p>First</p><!--nextpage--><p>Second</p><!--nextpage--><p>Third</p>".into();
    item.page = 2;

    let html = renderer().render(&RenderContext::single(), &item).unwrap();
    assert!(html.contains("<p>Second</p>"));
    assert!(!html.contains("<p>First</p>"));
    assert!(!html.contains("<p>Third</p>"));
    assert!(html.contains(r#"<p class="page-links">Pages:"#));
    assert!(html.contains(r#"<span class="page-numbers current">2</span>"#));
    assert!(html.contains(r#"<a class="page-numbers" href="https://example.com/into-the-hills/3/">3</a>"#));
}

#[test]
fn article_wrapper_carries_post_markup() {
    let mut item = post();
    item.is_sticky = true;
    let html = renderer()
        .render(&RenderContext::listing().sticky(true), &item)
        .unwrap();
    assert!(html.starts_with(r#"<article id="post-42" class="entry post post-42 format-standard sticky" itemscope itemtype="http://schema.org/BlogPosting" itemprop="blogPost">"#));
    assert!(html.trim_end().ends_with("</article><!-- .entry -->"));
}

#[test]
fn title_is_escaped() {
    let mut item = post();
    item.title = "Fish & <Chips>".into();
    let html = renderer().render(&RenderContext::single(), &item).unwrap();
    assert!(html.contains("Fish &amp; &lt;Chips&gt;"));
}
