//! Resolver configuration: where the build lives and how its assets are served.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::manifest::{DEFAULT_DIST_DIR, DEFAULT_MANIFEST_FILE, manifest_path};
use crate::page::DEFAULT_PLACEHOLDER;
use crate::tags::{DEFAULT_ROOT_ENTRY, DEFAULT_STATIC_URL};

const DEFAULT_CONFIG_FILE: &str = "bundle.config.json";

/// Explicit settings passed to [`crate::AssetResolver`] at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Frontend build directory containing the dist output.
    pub app_dir: PathBuf,
    /// Subdirectory of `app_dir` the bundler writes into.
    pub dist_dir: String,
    /// Manifest file name inside the dist directory.
    pub manifest_file: String,
    /// URL prefix the static asset root is served under.
    pub static_url: String,
    /// Manifest entry rendered into pages.
    pub root_entry: String,
    /// Template tag name replaced with the rendered markup.
    pub bundle_placeholder: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            app_dir: PathBuf::from("."),
            dist_dir: DEFAULT_DIST_DIR.into(),
            manifest_file: DEFAULT_MANIFEST_FILE.into(),
            static_url: DEFAULT_STATIC_URL.into(),
            root_entry: DEFAULT_ROOT_ENTRY.into(),
            bundle_placeholder: DEFAULT_PLACEHOLDER.into(),
        }
    }
}

impl ResolverConfig {
    /// Attempt to load `bundle.config.json` from the provided directory.
    ///
    /// A missing or unparsable file yields the defaults. A relative `app_dir` is resolved
    /// against `dir`.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        let mut config = Self::from_path(&candidate).unwrap_or_default();
        if config.app_dir.is_relative() {
            config.app_dir = dir.join(&config.app_dir);
        }
        config
    }

    /// Read configuration from a specific JSON file.
    ///
    /// Returns `None` when the file cannot be read or parsed; the reason is logged.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "no resolver config loaded");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unparsable resolver config");
                None
            }
        }
    }

    /// Configuration for a build directory with every other setting defaulted.
    pub fn for_app_dir(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the manifest this configuration points at.
    pub fn manifest_path(&self) -> PathBuf {
        manifest_path(&self.app_dir, &self.dist_dir, &self.manifest_file)
    }
}
