//! Build manifest emitted by the frontend bundler and the loader that reads it.
//!
//! The manifest is the only contract between the external build step and page rendering:
//! it maps logical entry names to the files the build produced. Loading is split from the
//! data model so the records can be constructed directly in tests and by callers that
//! already hold the JSON.

mod loading;
mod model;

pub use loading::{
    DEFAULT_DIST_DIR, DEFAULT_MANIFEST_FILE, load_manifest, manifest_path, parse_manifest,
    read_manifest,
};
pub use model::{BuildManifest, EntryRecord};
