//! # Extant - Theme Bootstrap
//!
//! `extant` ties the theme together: it reads configuration, asks the host
//! where the theme lives and which optional features are available, and
//! attaches the theme's registrations to the host's lifecycle events.
//!
//! The pieces it builds on live in their own crates:
//!
//! - [`extant_hooks`]: the deferred callback registry
//! - [`extant_render`]: spec tables, featured media resolution, post templates
//!
//! ## Lifecycle
//!
//! ```rust
//! use extant::{Capabilities, Event, StaticHost, ThemeCell, ThemeConfig};
//! use extant_hooks::CallbackRegistry;
//!
//! let host = StaticHost::new("/srv/themes/extant", "https://example.com/themes/extant");
//! let mut registry = CallbackRegistry::new();
//! let cell = ThemeCell::new();
//!
//! let theme = cell
//!     .get_or_init(&host, ThemeConfig::default(), &mut registry)
//!     .unwrap();
//!
//! // The host fires its events; the theme declares itself.
//! let mut caps = Capabilities::new();
//! for event in [Event::AfterSetup, Event::Init, Event::RegisterLayouts, Event::EnqueueScripts] {
//!     registry.fire(event.as_str(), &mut caps).unwrap();
//! }
//!
//! assert_eq!(caps.content_width, Some(950));
//! assert!(caps.menus.contains_key("primary"));
//! assert!(caps.image_sizes.get("xlarge").is_some());
//! assert_eq!(theme.root_uri(), "https://example.com/themes/extant/");
//! ```

mod capabilities;
pub mod config;
mod error;
mod events;
mod host;
mod theme;

pub use capabilities::{Capabilities, ThemeSupport};
pub use config::{FontConfig, ModuleSpec, ThemeConfig, COMMERCE_CAPABILITY};
pub use error::{ConfigError, InitError};
pub use events::Event;
pub use host::{HostEnvironment, StaticHost};
pub use theme::{initialize, ThemeCell, ThemeInstance, SCRIPTS_PRIORITY, SETUP_PRIORITY};

pub use extant_hooks::{CallbackRegistry, HookError};
pub use extant_render::{ContentItem, MediaSettings, PostRenderer, RenderContext};
