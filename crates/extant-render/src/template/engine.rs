//! MiniJinja environment holding the theme's templates.
//!
//! Templates are embedded at compile time. Auto-escaping is off: output is
//! escaped explicitly with the `esc_html` and `esc_attr` filters, which lets
//! trusted markup (post bodies, the separator entity) pass through untouched.
//! Both filters use MiniJinja's own escaper.

use minijinja::{AutoEscape, Environment, HtmlEscape};
use serde::Serialize;

use crate::error::RenderError;

/// Name of the post template.
pub const POST_TEMPLATE: &str = "post";
/// Name of the shared byline partial.
pub const BYLINE_TEMPLATE: &str = "partials/byline";

const TEMPLATES: &[(&str, &str)] = &[
    (POST_TEMPLATE, include_str!("../../templates/post.jinja")),
    (BYLINE_TEMPLATE, include_str!("../../templates/partials/byline.jinja")),
];

/// Template environment with the theme's templates and filters loaded.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Creates an environment with the embedded templates and the theme's
    /// filters registered.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env);

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Returns a mutable reference to the underlying MiniJinja environment,
    /// e.g. to override a template.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders a registered template.
    pub fn render_named<S: Serialize>(&self, name: &str, data: &S) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}

/// Registers the theme's filters with a MiniJinja environment.
///
/// - `esc_html`: escapes text for element content
/// - `esc_attr`: escapes text for a quoted attribute value
/// - `truncate_title(max)`: shortens to `max` characters with a trailing
///   ellipsis; `0` leaves the value alone
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("esc_html", |value: String| -> String { escape_html(&value) });
    env.add_filter("esc_attr", |value: String| -> String { escape_html(&value) });
    env.add_filter("truncate_title", |value: String, max: usize| -> String {
        truncate_chars(&value, max)
    });
}

/// Escapes `& < > " '` with MiniJinja's HTML escaper.
///
/// MiniJinja also escapes `/`; it is put back so URIs in attributes stay
/// readable. An escaped `&` can never precede `#x2f;`, so the reversal only
/// touches slashes.
pub fn escape_html(input: &str) -> String {
    HtmlEscape(input).to_string().replace("&#x2f;", "/")
}

/// Cuts `input` to at most `max` characters, ending in `…` when shortened.
pub fn truncate_chars(input: &str, max: usize) -> String {
    if max == 0 || input.chars().count() <= max {
        return input.to_string();
    }
    let kept: String = input.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_templates_compile() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.has_template(POST_TEMPLATE));
        assert!(engine.has_template(BYLINE_TEMPLATE));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_keeps_slashes() {
        assert_eq!(
            escape_html("https://example.com/a/b?x=1&y=2"),
            "https://example.com/a/b?x=1&amp;y=2"
        );
        assert_eq!(escape_html("&#x2f;"), "&amp;#x2f;");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_chars("a long title here", 8), "a long…");
        assert_eq!(truncate_chars("anything", 0), "anything");
        assert_eq!(truncate_chars("ünïcödé", 4), "ünï…");
    }

    #[test]
    fn test_filters_in_template() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .environment_mut()
            .add_template("probe", "{{ t | truncate_title(5) | esc_html }}")
            .unwrap();
        let out = engine
            .render_named("probe", &json!({"t": "<b>bold</b>"}))
            .unwrap();
        assert_eq!(out, "&lt;b&gt;b…");
    }

    #[test]
    fn test_missing_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render_named("nope", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(_)));
    }
}
