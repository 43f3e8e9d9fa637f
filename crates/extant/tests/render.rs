//! Rendering through an initialized theme.

use extant::{initialize, CallbackRegistry, ContentItem, RenderContext, StaticHost, ThemeConfig};
use extant_render::SourceKind;

fn theme_with(yaml: &str) -> std::rc::Rc<extant::ThemeInstance> {
    let host = StaticHost::new("/srv/themes/extant", "https://example.com/themes/extant/");
    let mut registry = CallbackRegistry::new();
    initialize(&host, ThemeConfig::from_yaml(yaml).unwrap(), &mut registry).unwrap()
}

fn post_from_json(json: &str) -> ContentItem {
    serde_json::from_str(json).unwrap()
}

const POST: &str = r#"{
    "id": 7,
    "title": "Harbour at Dusk",
    "permalink": "https://example.com/harbour/",
    "content": "<p>Boats.</p><img class=\"wp-image-31\" src=\"https://example.com/uploads/harbour.jpg\" width=\"2000\" height=\"1200\">",
    "date": "2016-06-01T19:00:00+00:00",
    "date_display": "June 1, 2016",
    "attachments": [
        {"id": 31, "uri": "https://example.com/uploads/harbour.jpg", "width": 2000, "height": 1200}
    ]
}"#;

#[test]
fn scanned_image_resolves_through_its_attachment() {
    let theme = theme_with("");
    let item = post_from_json(POST);
    let ctx = RenderContext::listing();

    let renderer = theme.renderer().unwrap();
    let media = renderer
        .resolver()
        .resolve_featured_media(&ctx, &item)
        .unwrap();
    assert_eq!(media.source_kind, SourceKind::Scan);
    assert_eq!(media.attachment_id, Some(31));
    assert_eq!((media.width, media.height), (750, 422));

    let html = renderer.render(&ctx, &item).unwrap();
    assert!(html.contains(r#"src="https://example.com/uploads/harbour-750x422.jpg""#));
    assert!(html.contains("harbour-1500x844.jpg 2x"));
}

#[test]
fn configured_default_image_fills_the_slot() {
    let theme = theme_with(
        r#"
media:
  default_image:
    uri: https://example.com/uploads/site-default.jpg
    width: 1200
    height: 675
"#,
    );
    let item = ContentItem::new(9, "Plain", "https://example.com/plain/");
    let ctx = RenderContext::listing().home(true).sticky(true);

    let html = theme.renderer().unwrap().render(&ctx, &item).unwrap();
    assert!(html.contains(r#"src="https://example.com/uploads/site-default.jpg""#));
    assert!(!html.contains("srcset"));
    assert!(!html.contains("featured-fallback"));
}

#[test]
fn custom_fallback_and_separator() {
    let theme = theme_with(
        r#"
media:
  fallback_image: img/placeholder.svg
  separator: "|"
"#,
    );
    let item = ContentItem::new(9, "Plain", "https://example.com/plain/");

    let html = theme
        .renderer()
        .unwrap()
        .render(&RenderContext::listing(), &item)
        .unwrap();
    assert!(html.contains(r#"src="https://example.com/themes/extant/img/placeholder.svg""#));
    assert!(html.contains(r#"<span class="sep">|</span>"#));
}

#[test]
fn single_view_of_json_post() {
    let theme = theme_with("");
    let item = post_from_json(POST);

    let html = theme
        .renderer()
        .unwrap()
        .render(&RenderContext::single(), &item)
        .unwrap();
    assert!(html.contains(r#"<h1 class="entry-title" itemprop="headline">Harbour at Dusk</h1>"#));
    assert!(html.contains("<p>Boats.</p>"));
    assert!(html.contains("Leave a comment"));
    assert!(!html.contains("featured-media"));
}
