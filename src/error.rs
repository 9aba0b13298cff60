//! Failure taxonomy shared by manifest loading, tag rendering and page injection.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, BundleError>;

/// Errors raised while resolving a build manifest into page markup.
///
/// None of these are recovered locally. A missing or broken manifest is a deployment
/// problem, so callers are expected to surface them as server errors.
#[derive(Debug, Error)]
pub enum BundleError {
    /// No manifest file exists at the expected location.
    #[error("Vite manifest file not found on path: {}", path.display())]
    ManifestNotFound {
        /// Path that was checked.
        path: PathBuf,
    },
    /// The manifest exists but could not be read.
    #[error("failed to read Vite manifest {}: {source}", path.display())]
    ManifestUnreadable {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The manifest exists but is empty or does not describe a build.
    #[error("Vite manifest file invalid. Maybe your {} file is empty? ({source})", path.display())]
    ManifestInvalid {
        /// Path that was parsed.
        path: PathBuf,
        /// Parse error reported by `serde_json`.
        source: serde_json::Error,
    },
    /// The requested entry (or one of its imports) is not in the manifest.
    #[error("entry `{name}` is not present in the Vite manifest")]
    MissingEntry {
        /// Entry name that was looked up.
        name: String,
    },
    /// The root entry has no stylesheet although the first one is required.
    ///
    /// This is the index-out-of-range case of reading `css[0]` on an empty list.
    #[error("entry `{entry}` has no stylesheet to link (css list is empty)")]
    MissingStylesheet {
        /// Entry whose `css` list was empty.
        entry: String,
    },
    /// The page template has no bundle tag to replace.
    #[error("template does not contain a `{{% {placeholder} %}}` tag")]
    PlaceholderMissing {
        /// Tag name that was searched for.
        placeholder: String,
    },
}
