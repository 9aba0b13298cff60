use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parsed representation of a build manifest.
///
/// Entries are keyed by their logical name (for example `index.html`). The map is ordered
/// so listings are deterministic; render order never depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BuildManifest {
    /// Entry records keyed by logical entry name.
    pub entries: BTreeMap<String, EntryRecord>,
}

/// One build artifact described by the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    /// Emitted file, relative to the static asset root.
    pub file: String,
    /// Source module the entry was built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Whether the bundler considers this a top-level entry point.
    #[serde(default)]
    pub is_entry: bool,
    /// Stylesheets extracted for this entry, in emission order.
    #[serde(default)]
    pub css: Vec<String>,
    /// Entry names that must be loaded alongside this one, in dependency order.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Entry names loaded lazily at runtime.
    #[serde(default)]
    pub dynamic_imports: Vec<String>,
    /// Other static files (fonts, images) referenced by the entry.
    #[serde(default)]
    pub assets: Vec<String>,
}

impl BuildManifest {
    /// Look up a record by entry name.
    pub fn entry(&self, name: &str) -> Option<&EntryRecord> {
        self.entries.get(name)
    }

    /// Entry names in sorted order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Records flagged as top-level entry points.
    pub fn entry_points(&self) -> impl Iterator<Item = (&str, &EntryRecord)> {
        self.entries
            .iter()
            .filter(|(_, record)| record.is_entry)
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Number of entries in the manifest.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the manifest lists no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, EntryRecord)> for BuildManifest {
    fn from_iter<I: IntoIterator<Item = (String, EntryRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
