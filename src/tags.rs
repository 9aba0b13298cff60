//! Turn a manifest entry into the script and stylesheet tags a page embeds.

use std::fmt;

use tracing::debug;

use crate::error::{BundleError, Result};
use crate::manifest::BuildManifest;

/// Entry rendered when no other name is requested.
pub const DEFAULT_ROOT_ENTRY: &str = "index.html";

/// Base URL the static asset root is served under.
pub const DEFAULT_STATIC_URL: &str = "/static/";

/// A single asset reference in the rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetTag {
    /// `<script type="module">` for an emitted JavaScript file.
    ModuleScript(String),
    /// `<link rel="stylesheet">` for an emitted CSS file.
    Stylesheet(String),
}

impl AssetTag {
    /// Path of the referenced file relative to the static root.
    pub fn path(&self) -> &str {
        match self {
            Self::ModuleScript(path) | Self::Stylesheet(path) => path,
        }
    }

    /// Render the tag with its path resolved against `static_base`.
    pub fn render(&self, static_base: &str) -> String {
        let url = static_url(static_base, self.path());
        let url = html_escape::encode_double_quoted_attribute(&url);
        match self {
            Self::ModuleScript(_) => format!(r#"<script type="module" src="{url}"></script>"#),
            Self::Stylesheet(_) => {
                format!(r#"<link rel="stylesheet" type="text/css" href="{url}" />"#)
            }
        }
    }
}

impl fmt::Display for AssetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_STATIC_URL))
    }
}

/// Join the static base URL and a manifest path with exactly one `/` between them.
///
/// Manifest paths use forward slashes; backslashes from Windows builds are normalised.
pub fn static_url(static_base: &str, path: &str) -> String {
    let base = static_base.trim_end_matches('/');
    let path = path.replace('\\', "/");
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Resolve the ordered tags for `root_entry`.
///
/// The order is fixed: the entry's own script, its first stylesheet, then one script per
/// import in the order the manifest declares them. Imports are trusted to already be in
/// dependency order.
pub fn resolve_entry_tags(manifest: &BuildManifest, root_entry: &str) -> Result<Vec<AssetTag>> {
    let record = manifest
        .entry(root_entry)
        .ok_or_else(|| BundleError::MissingEntry {
            name: root_entry.to_string(),
        })?;

    let stylesheet = record
        .css
        .first()
        .ok_or_else(|| BundleError::MissingStylesheet {
            entry: root_entry.to_string(),
        })?;

    let mut tags = Vec::with_capacity(record.imports.len() + 2);
    tags.push(AssetTag::ModuleScript(record.file.clone()));
    tags.push(AssetTag::Stylesheet(stylesheet.clone()));

    for import in &record.imports {
        let imported = manifest
            .entry(import)
            .ok_or_else(|| BundleError::MissingEntry {
                name: import.clone(),
            })?;
        tags.push(AssetTag::ModuleScript(imported.file.clone()));
    }

    debug!(entry = root_entry, tags = tags.len(), "resolved entry tags");
    Ok(tags)
}

/// Render the markup for `root_entry`, one tag per line.
///
/// The result is final markup and must be embedded without further escaping.
pub fn render_entry_markup(
    manifest: &BuildManifest,
    root_entry: &str,
    static_base: &str,
) -> Result<String> {
    let tags = resolve_entry_tags(manifest, root_entry)?;
    Ok(tags
        .iter()
        .map(|tag| tag.render(static_base))
        .collect::<Vec<_>>()
        .join("\n"))
}
