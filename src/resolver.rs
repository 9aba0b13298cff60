//! Config-owning entry point used by the page-rendering layer.

use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::manifest::{BuildManifest, read_manifest};
use crate::page::inject_bundle;
use crate::tags::{AssetTag, render_entry_markup, resolve_entry_tags};

/// Resolves the configured build manifest into page markup.
///
/// Holds no state besides its configuration: every call reads the manifest from disk
/// again, so a fresh build is visible to the next request without invalidation.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    config: ResolverConfig,
}

impl AssetResolver {
    /// Create a resolver for the provided configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Configuration the resolver was built with.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Read and parse the configured manifest.
    pub fn load_manifest(&self) -> Result<BuildManifest> {
        read_manifest(&self.config.manifest_path())
    }

    /// Ordered tags for the configured root entry.
    pub fn resolve_tags(&self) -> Result<Vec<AssetTag>> {
        let manifest = self.load_manifest()?;
        resolve_entry_tags(&manifest, &self.config.root_entry)
    }

    /// Markup for the configured root entry.
    pub fn render(&self) -> Result<String> {
        self.render_entry(&self.config.root_entry)
    }

    /// Markup for an arbitrary manifest entry.
    pub fn render_entry(&self, entry: &str) -> Result<String> {
        let manifest = self.load_manifest()?;
        render_entry_markup(&manifest, entry, &self.config.static_url)
    }

    /// Render the root entry and substitute it into a page template.
    pub fn render_page(&self, template: &str) -> Result<String> {
        let markup = self.render()?;
        debug!(placeholder = %self.config.bundle_placeholder, "injecting bundle markup");
        inject_bundle(template, &self.config.bundle_placeholder, &markup)
    }
}
