//! Renders a post the way the theme would, without a host.
//!
//! ```text
//! extant-preview --post post.json --home --sticky
//! extant-preview --config theme.yaml --child-theme https://example.com/child --dump-capabilities
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use extant::{
    Capabilities, CallbackRegistry, ContentItem, Event, RenderContext, StaticHost, ThemeCell,
    ThemeConfig,
};

/// Preview Extant post markup and capability registration
#[derive(Parser, Debug)]
#[command(name = "extant-preview")]
#[command(version, about, long_about = None)]
struct Args {
    /// Post to render, as JSON
    #[arg(short, long, value_name = "FILE", required_unless_present = "dump_capabilities")]
    post: Option<PathBuf>,

    /// Theme configuration (YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme install directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Public URI of the theme directory
    #[arg(long, value_name = "URI", default_value = "http://localhost/themes/extant")]
    uri: String,

    /// Activate a child theme served from this URI
    #[arg(long, value_name = "URI")]
    child_theme: Option<String>,

    /// Capability reported as present (can be repeated)
    #[arg(long, value_name = "NAME")]
    capability: Vec<String>,

    /// Pretend the request serves an admin screen
    #[arg(long)]
    admin: bool,

    /// Render the single view instead of the listing view
    #[arg(long)]
    single: bool,

    /// Treat the post as sticky
    #[arg(long)]
    sticky: bool,

    /// Render as part of the home page
    #[arg(long)]
    home: bool,

    /// Print the registered capabilities as JSON instead of rendering
    #[arg(long)]
    dump_capabilities: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => ThemeConfig::from_file(path)?,
        None => ThemeConfig::default(),
    };

    let host = build_host(&args);
    let mut registry = CallbackRegistry::new();
    let cell = ThemeCell::new();
    let theme = cell
        .get_or_init(&host, config, &mut registry)
        .context("theme initialization failed")?;

    let mut caps = Capabilities::new();
    for event in [Event::AfterSetup, Event::Init, Event::RegisterLayouts, Event::EnqueueScripts] {
        registry.fire(event.as_str(), &mut caps)?;
    }

    if args.dump_capabilities {
        println!("{}", serde_json::to_string_pretty(&caps)?);
        return Ok(());
    }

    let Some(post_path) = &args.post else {
        anyhow::bail!("--post is required unless --dump-capabilities is given");
    };
    let json = fs::read_to_string(post_path)
        .with_context(|| format!("failed to read {}", post_path.display()))?;
    let mut item: ContentItem = serde_json::from_str(&json)
        .with_context(|| format!("invalid post JSON in {}", post_path.display()))?;
    item.is_sticky |= args.sticky;

    let context = if args.single {
        RenderContext::single()
    } else {
        RenderContext::listing()
    }
    .sticky(item.is_sticky)
    .home(args.home);

    let html = theme.renderer()?.render(&context, &item)?;
    println!("{}", html);
    Ok(())
}

fn build_host(args: &Args) -> StaticHost {
    let mut host = StaticHost::new(&args.root, &args.uri).admin(args.admin);
    for capability in &args.capability {
        host = host.with_capability(capability.as_str());
    }
    if let Some(child) = &args.child_theme {
        host = host.child_theme(child.as_str());
    }
    host
}

fn init_logging(verbose: u8) {
    use log::LevelFilter;

    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
