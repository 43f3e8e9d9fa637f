//! Theme bootstrap.
//!
//! [`initialize`] resolves where the theme lives, loads its optional modules
//! and attaches the registration callbacks to the host's lifecycle events.
//! Nothing is declared to the host until those events fire.
//!
//! ```text
//! initialize()
//!   ├─ resolve root path / URIs
//!   ├─ load modules (capability probe, admin gate)
//!   └─ register callbacks
//!        after-setup            5   theme_setup
//!        init                  10   register_menus, register_image_sizes
//!        register-layouts      10   register_layouts
//!        enqueue-scripts        0   register_scripts
//!        enqueue-embed-scripts  0   register_scripts
//! ```

use std::path::{Path, PathBuf};
use std::rc::Rc;

use once_cell::unsync::OnceCell;

use extant_hooks::{CallbackFn, CallbackRegistry, HookError, DEFAULT_PRIORITY};
use extant_render::spec::{
    theme_layouts, AssetSpec, FontSpec, ImageSizeTable, DEFAULT_LAYOUT,
};
use extant_render::{MediaResolver, PostFormat, PostRenderer, SpecError};

use crate::capabilities::{Capabilities, ThemeSupport};
use crate::config::ThemeConfig;
use crate::error::InitError;
use crate::events::Event;
use crate::host::HostEnvironment;

/// Priority of [`ThemeInstance::theme_setup`] on `after-setup`.
pub const SETUP_PRIORITY: i32 = 5;
/// Priority of [`ThemeInstance::register_scripts`] on both enqueue events.
pub const SCRIPTS_PRIORITY: i32 = 0;

/// Feature flags declared by [`ThemeInstance::theme_setup`], besides layouts
/// and post formats.
const FLAG_SUPPORTS: &[&str] = &[
    "custom-content-portfolio",
    "breadcrumb-trail",
    "template-hierarchy",
    "get-the-image",
    "cleaner-gallery",
    "automatic-feed-links",
];

/// The initialized theme.
#[derive(Debug)]
pub struct ThemeInstance {
    root_path: PathBuf,
    root_uri: String,
    stylesheet_uri: String,
    child_theme: bool,
    config: ThemeConfig,
    modules: Vec<String>,
    sizes: ImageSizeTable,
}

/// Initializes the theme and attaches its callbacks to `registry`.
///
/// Every call performs a full initialization. Use [`ThemeCell`] to run it
/// at most once.
///
/// # Errors
///
/// Fails with [`InitError::UnresolvedInstallPath`] when the host cannot
/// locate the theme, and with a config or spec error when the configuration
/// does not validate. No callback is registered on failure.
pub fn initialize(
    host: &dyn HostEnvironment,
    config: ThemeConfig,
    registry: &mut CallbackRegistry<Capabilities>,
) -> Result<Rc<ThemeInstance>, InitError> {
    config.validate()?;

    let root_path = host
        .template_directory()
        .ok_or(InitError::UnresolvedInstallPath("directory"))?;
    let root_uri = host
        .template_directory_uri()
        .ok_or(InitError::UnresolvedInstallPath("URI"))?;
    let stylesheet_uri = host
        .stylesheet_directory_uri()
        .ok_or(InitError::UnresolvedInstallPath("stylesheet URI"))?;

    let sizes = ImageSizeTable::theme_defaults();
    sizes.validate()?;
    ImageSizeTable::post_thumbnail().validate()?;

    let modules = load_modules(host, &config);

    let theme = Rc::new(ThemeInstance {
        root_path: with_trailing_separator(&root_path),
        root_uri: with_trailing_slash(&root_uri),
        stylesheet_uri: with_trailing_slash(&stylesheet_uri),
        child_theme: host.is_child_theme(),
        config,
        modules,
        sizes,
    });
    log::info!(
        "theme '{}' at {} ({} modules)",
        theme.config.slug,
        theme.root_uri,
        theme.modules.len()
    );

    register_callbacks(&theme, registry);
    Ok(theme)
}

fn load_modules(host: &dyn HostEnvironment, config: &ThemeConfig) -> Vec<String> {
    let mut loaded = Vec::new();
    for module in &config.modules {
        if let Some(capability) = &module.requires_capability {
            if !host.has_capability(capability) {
                log::debug!("skipping module {}: no {}", module.name, capability);
                continue;
            }
        }
        if module.admin_only && !host.is_admin() {
            log::debug!("skipping module {}: admin only", module.name);
            continue;
        }
        log::debug!("loaded module {}", module.name);
        loaded.push(module.name.clone());
    }
    loaded
}

fn register_callbacks(theme: &Rc<ThemeInstance>, registry: &mut CallbackRegistry<Capabilities>) {
    registry.register(
        Event::AfterSetup,
        SETUP_PRIORITY,
        bind(theme, ThemeInstance::theme_setup),
    );
    registry.register(
        Event::Init,
        DEFAULT_PRIORITY,
        bind(theme, ThemeInstance::register_menus),
    );
    registry.register(
        Event::Init,
        DEFAULT_PRIORITY,
        bind(theme, ThemeInstance::register_image_sizes),
    );
    registry.register(
        Event::RegisterLayouts,
        DEFAULT_PRIORITY,
        bind(theme, ThemeInstance::register_layouts),
    );

    let scripts: CallbackFn<Capabilities> = Rc::new(bind(theme, ThemeInstance::register_scripts));
    registry.register_rc(Event::EnqueueScripts, SCRIPTS_PRIORITY, Rc::clone(&scripts));
    registry.register_rc(Event::EnqueueEmbedScripts, SCRIPTS_PRIORITY, scripts);
}

/// Turns a registration method into a callback holding its own handle on
/// the theme.
fn bind<F>(
    theme: &Rc<ThemeInstance>,
    method: F,
) -> impl Fn(&mut Capabilities) -> Result<(), HookError> + 'static
where
    F: Fn(&ThemeInstance, &mut Capabilities) -> Result<(), SpecError> + 'static,
{
    let theme = Rc::clone(theme);
    move |caps: &mut Capabilities| {
        method(&*theme, caps).map_err(|e| HookError::new(e.to_string()).with_source(e))
    }
}

impl ThemeInstance {
    /// Theme directory, ending in a path separator.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Theme directory URI, ending in `/`.
    pub fn root_uri(&self) -> &str {
        &self.root_uri
    }

    /// Active stylesheet directory URI, ending in `/`.
    pub fn stylesheet_uri(&self) -> &str {
        &self.stylesheet_uri
    }

    pub fn is_child_theme(&self) -> bool {
        self.child_theme
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Names of the modules that passed their probes, in declaration order.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn has_module(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m == name)
    }

    pub fn sizes(&self) -> &ImageSizeTable {
        &self.sizes
    }

    /// Builds a renderer wired to the theme's sizes and media settings.
    pub fn renderer(&self) -> Result<PostRenderer, InitError> {
        let media = &self.config.media;
        let resolver =
            MediaResolver::new(self.sizes.clone()).with_default_image(media.default_image.clone());
        Ok(PostRenderer::new(resolver, media.clone(), self.root_uri.clone())?)
    }

    /// Declares theme supports and the content width.
    pub fn theme_setup(&self, caps: &mut Capabilities) -> Result<(), SpecError> {
        for feature in FLAG_SUPPORTS {
            caps.add_theme_support(*feature, ThemeSupport::Flag);
        }
        caps.add_theme_support(
            "theme-layouts",
            ThemeSupport::Layouts {
                default: DEFAULT_LAYOUT.to_string(),
            },
        );
        caps.add_theme_support(
            "post-formats",
            ThemeSupport::PostFormats {
                formats: PostFormat::SUPPORTED.to_vec(),
            },
        );
        caps.set_content_width(self.config.content_width);
        Ok(())
    }

    pub fn register_menus(&self, caps: &mut Capabilities) -> Result<(), SpecError> {
        caps.register_menu("primary", "Primary");
        caps.register_menu("secondary", "Secondary");
        Ok(())
    }

    /// Sets the post thumbnail, then every named size.
    pub fn register_image_sizes(&self, caps: &mut Capabilities) -> Result<(), SpecError> {
        caps.set_post_thumbnail(ImageSizeTable::post_thumbnail())?;
        for size in self.sizes.iter() {
            caps.add_image_size(size.clone())?;
        }
        Ok(())
    }

    pub fn register_layouts(&self, caps: &mut Capabilities) -> Result<(), SpecError> {
        for layout in theme_layouts() {
            caps.register_layout(layout)?;
        }
        Ok(())
    }

    /// Declares the theme script, web font and stylesheets.
    ///
    /// The parent embed style is only declared when a child theme is active,
    /// since otherwise the theme's own embed style already covers it.
    pub fn register_scripts(&self, caps: &mut Capabilities) -> Result<(), SpecError> {
        let slug = &self.config.slug;

        caps.register_script(
            AssetSpec::new(slug.as_str(), format!("{}js/theme.js", self.root_uri))
                .depends_on("jquery")
                .in_footer(),
        )?;

        let fonts = &self.config.fonts;
        caps.register_font(FontSpec::new(
            slug.as_str(),
            fonts.families.iter().cloned(),
            fonts.subsets.iter().cloned(),
        ))?;

        caps.register_style(AssetSpec::new(
            "font-awesome",
            self.stylesheet(&self.root_uri, "font-awesome"),
        ))?;
        caps.register_style(AssetSpec::new(
            self.config.handle("mediaelement"),
            self.stylesheet(&self.root_uri, "mediaelement"),
        ))?;
        caps.register_style(AssetSpec::new(
            self.config.handle("embed"),
            self.stylesheet(&self.stylesheet_uri, "embed"),
        ))?;
        if self.child_theme {
            caps.register_style(AssetSpec::new(
                self.config.handle("parent-embed"),
                self.stylesheet(&self.root_uri, "embed"),
            ))?;
        }
        Ok(())
    }

    /// `<dir>css/<name>.min.css`, or `.css` with `debug_assets`.
    fn stylesheet(&self, dir: &str, name: &str) -> String {
        let suffix = if self.config.debug_assets { "" } else { ".min" };
        format!("{}css/{}{}.css", dir, name, suffix)
    }
}

/// Holds at most one [`ThemeInstance`].
///
/// The first successful [`get_or_init`](Self::get_or_init) initializes the
/// theme. Later calls return the same instance and register nothing.
#[derive(Debug, Default)]
pub struct ThemeCell {
    instance: OnceCell<Rc<ThemeInstance>>,
}

impl ThemeCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Rc<ThemeInstance>> {
        self.instance.get()
    }

    /// Returns the instance, initializing it on first use.
    ///
    /// `config` is ignored once the cell holds an instance. A failed
    /// initialization leaves the cell empty.
    pub fn get_or_init(
        &self,
        host: &dyn HostEnvironment,
        config: ThemeConfig,
        registry: &mut CallbackRegistry<Capabilities>,
    ) -> Result<Rc<ThemeInstance>, InitError> {
        self.instance
            .get_or_try_init(|| initialize(host, config, registry))
            .map(Rc::clone)
    }
}

fn with_trailing_slash(uri: &str) -> String {
    format!("{}/", uri.trim_end_matches('/'))
}

// Joining an empty component appends a separator.
fn with_trailing_separator(path: &Path) -> PathBuf {
    path.join("")
}
