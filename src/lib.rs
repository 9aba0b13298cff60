#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod manifest;
pub mod page;
pub mod resolver;
pub mod routes;
pub mod tags;

pub use config::ResolverConfig;
pub use error::{BundleError, Result};
pub use manifest::{BuildManifest, EntryRecord, load_manifest};
pub use page::inject_bundle;
pub use resolver::AssetResolver;
pub use routes::{ApiEndpoint, RouteTable, RouteTarget};
pub use tags::{AssetTag, render_entry_markup, resolve_entry_tags};
