//! vite-bundle-tags - render Vite build manifests into page markup
//!
//! Usage: vite-bundle-tags <COMMAND>
//!
//! Commands:
//!   render   Print the tags for the root entry
//!   entries  List manifest entries
//!   page     Substitute the tags into a page template
//!   route    Show which handler a request path dispatches to

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vite_bundle_tags::{AssetResolver, ResolverConfig, RouteTable, RouteTarget};

/// Render Vite build manifests into script and stylesheet tags
#[derive(Parser, Debug)]
#[command(name = "vite-bundle-tags")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for debug output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Settings shared by every manifest-reading command.
#[derive(Args, Debug)]
struct ResolverArgs {
    /// Directory searched for bundle.config.json
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Frontend build directory (overrides the config file)
    #[arg(long)]
    app_dir: Option<PathBuf>,

    /// Manifest file name inside the dist directory
    #[arg(long)]
    manifest_file: Option<String>,

    /// URL prefix for static assets
    #[arg(long)]
    static_url: Option<String>,

    /// Manifest entry to render
    #[arg(long)]
    entry: Option<String>,
}

impl ResolverArgs {
    fn into_config(self) -> ResolverConfig {
        let mut config = ResolverConfig::discover(&self.config_dir);
        if let Some(app_dir) = self.app_dir {
            config.app_dir = app_dir;
        }
        if let Some(manifest_file) = self.manifest_file {
            config.manifest_file = manifest_file;
        }
        if let Some(static_url) = self.static_url {
            config.static_url = static_url;
        }
        if let Some(entry) = self.entry {
            config.root_entry = entry;
        }
        config
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tags for the root entry
    Render {
        #[command(flatten)]
        resolver: ResolverArgs,
    },

    /// List manifest entries and their emitted files
    Entries {
        /// Print the parsed manifest as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        resolver: ResolverArgs,
    },

    /// Substitute the tags into a page template
    Page {
        /// Template containing the bundle tag
        template: PathBuf,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        resolver: ResolverArgs,
    },

    /// Show which handler a request path dispatches to
    Route {
        /// Request path, e.g. /api/sample-api-view/
        path: String,

        /// Use the debug route table (no PWA routes)
        #[arg(long)]
        debug: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render { resolver } => {
            let resolver = AssetResolver::new(resolver.into_config());
            let markup = resolver.render().context("failed to render bundle tags")?;
            println!("{markup}");
        }
        Commands::Entries { json, resolver } => {
            let resolver = AssetResolver::new(resolver.into_config());
            let manifest = resolver.load_manifest()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
                return Ok(());
            }
            for (name, record) in &manifest.entries {
                let marker = if record.is_entry { "*" } else { " " };
                println!("{marker} {name} -> {}", record.file);
            }
        }
        Commands::Page {
            template,
            output,
            resolver,
        } => {
            let text = fs::read_to_string(&template)
                .with_context(|| format!("failed to read {}", template.display()))?;
            let resolver = AssetResolver::new(resolver.into_config());
            let page = resolver
                .render_page(&text)
                .with_context(|| format!("failed to render {}", template.display()))?;
            match output {
                Some(path) => {
                    fs::write(&path, page)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(output = %path.display(), "wrote page");
                }
                None => print!("{page}"),
            }
        }
        Commands::Route { path, debug } => match RouteTable::project(debug).resolve(&path) {
            Some(RouteTarget::Api(endpoint)) => {
                println!("api {endpoint:?}");
                println!("{}", serde_json::to_string_pretty(&endpoint.payload())?);
            }
            Some(target) => println!("{target:?}"),
            None => anyhow::bail!("no route matches {path}"),
        },
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = if verbose > 0 { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
