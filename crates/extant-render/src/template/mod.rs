//! Post templates.
//!
//! A post renders in one of two mutually exclusive states, chosen once per
//! call:
//!
//! - Single view: `h1` title, byline, full (paginated) body, term lists.
//!   No featured media.
//! - Listing view: featured media or the placeholder inside
//!   `div.featured-media`, then a linked `h2` title and the byline.
//!
//! Both states include the same byline partial. The only difference is the
//! `link_timestamp` flag, which wraps the publish time in the permalink in
//! listings.
//!
//! ## Key Types
//!
//! - [`PostRenderer`]: renders a [`ContentItem`](crate::ContentItem) for a
//!   [`RenderContext`](crate::RenderContext)
//! - [`TemplateEngine`]: MiniJinja environment with the embedded templates
//! - [`MediaSettings`]: placeholder, default image, separator and title length

mod engine;
mod renderer;

pub use engine::{
    escape_html, register_filters, truncate_chars, TemplateEngine, BYLINE_TEMPLATE, POST_TEMPLATE,
};
pub use renderer::{MediaSettings, PostRenderer, ViewState};
