use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::BuildManifest;
use crate::error::{BundleError, Result};

/// Subdirectory of the build directory the bundler writes into.
pub const DEFAULT_DIST_DIR: &str = "dist";

/// File name of the manifest inside the dist directory.
pub const DEFAULT_MANIFEST_FILE: &str = "manifest.json";

/// Location of the manifest for a build directory: `build_dir/dist_dir/manifest_file`.
pub fn manifest_path(build_dir: &Path, dist_dir: &str, manifest_file: &str) -> PathBuf {
    build_dir.join(dist_dir).join(manifest_file)
}

/// Load `build_dir/dist/<manifest_file>`.
///
/// The file is read in full on every call; nothing is cached between calls.
pub fn load_manifest(build_dir: &Path, manifest_file: &str) -> Result<BuildManifest> {
    read_manifest(&manifest_path(build_dir, DEFAULT_DIST_DIR, manifest_file))
}

/// Read and parse a manifest from an explicit path.
pub fn read_manifest(path: &Path) -> Result<BuildManifest> {
    debug!(path = %path.display(), "reading build manifest");
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Err(BundleError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => {
            return Err(BundleError::ManifestUnreadable {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    parse_manifest(path, &bytes)
}

/// Parse manifest bytes, attributing failures to `path`.
pub fn parse_manifest(path: &Path, bytes: &[u8]) -> Result<BuildManifest> {
    let manifest: BuildManifest =
        serde_json::from_slice(bytes).map_err(|err| BundleError::ManifestInvalid {
            path: path.to_path_buf(),
            source: err,
        })?;
    debug!(path = %path.display(), entries = manifest.len(), "parsed build manifest");
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "index.html": {"file": "main.js", "css": ["main.css"], "imports": ["vendor.js"]},
        "vendor.js": {"file": "vendor.js", "css": [], "imports": []}
    }"#;

    fn write_manifest(build_dir: &Path, contents: &[u8]) -> PathBuf {
        let dist = build_dir.join(DEFAULT_DIST_DIR);
        fs::create_dir_all(&dist).expect("failed to create dist dir");
        let path = dist.join(DEFAULT_MANIFEST_FILE);
        fs::write(&path, contents).expect("failed to write manifest");
        path
    }

    #[test]
    fn joins_build_dir_dist_and_file_name() {
        let path = manifest_path(Path::new("react-app"), "dist", "manifest.json");
        assert_eq!(
            path,
            PathBuf::from("react-app").join("dist").join("manifest.json")
        );
    }

    #[test]
    fn loads_manifest_from_dist_directory() {
        let temp = tempdir().expect("failed to create temp dir");
        write_manifest(temp.path(), SAMPLE.as_bytes());

        let manifest = load_manifest(temp.path(), DEFAULT_MANIFEST_FILE).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.entry("index.html").unwrap().file, "main.js");
    }

    #[test]
    fn missing_file_reports_attempted_path() {
        let temp = tempdir().expect("failed to create temp dir");
        let expected = manifest_path(temp.path(), DEFAULT_DIST_DIR, "other.json");

        let err = load_manifest(temp.path(), "other.json").unwrap_err();
        match &err {
            BundleError::ManifestNotFound { path } => assert_eq!(path, &expected),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains(&expected.display().to_string()));
    }

    #[test]
    fn file_in_place_of_dist_directory_is_not_found() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(temp.path().join(DEFAULT_DIST_DIR), "not a directory").unwrap();

        let err = load_manifest(temp.path(), DEFAULT_MANIFEST_FILE).unwrap_err();
        match err {
            BundleError::ManifestNotFound { path } => assert_eq!(
                path,
                manifest_path(temp.path(), DEFAULT_DIST_DIR, DEFAULT_MANIFEST_FILE)
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_invalid() {
        let temp = tempdir().expect("failed to create temp dir");
        let written = write_manifest(temp.path(), b"");

        let err = load_manifest(temp.path(), DEFAULT_MANIFEST_FILE).unwrap_err();
        match err {
            BundleError::ManifestInvalid { path, .. } => assert_eq!(path, written),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_and_mistyped_content_is_invalid() {
        let temp = tempdir().expect("failed to create temp dir");
        for contents in [
            &b"{not json"[..],
            &b"[1, 2, 3]"[..],
            &b"{\"index.html\": 4}"[..],
            &b"\xff\xfe"[..],
        ] {
            write_manifest(temp.path(), contents);
            let err = load_manifest(temp.path(), DEFAULT_MANIFEST_FILE).unwrap_err();
            assert!(
                matches!(err, BundleError::ManifestInvalid { .. }),
                "expected invalid manifest, got {err:?}"
            );
        }
    }

    #[test]
    fn directory_in_place_of_file_is_unreadable() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join(DEFAULT_DIST_DIR).join(DEFAULT_MANIFEST_FILE);
        fs::create_dir_all(&path).unwrap();

        let err = read_manifest(&path).unwrap_err();
        assert!(matches!(err, BundleError::ManifestUnreadable { .. }));
    }

    #[test]
    fn repeated_loads_are_equal() {
        let temp = tempdir().expect("failed to create temp dir");
        write_manifest(temp.path(), SAMPLE.as_bytes());

        let first = load_manifest(temp.path(), DEFAULT_MANIFEST_FILE).unwrap();
        let second = load_manifest(temp.path(), DEFAULT_MANIFEST_FILE).unwrap();
        assert_eq!(first, second);
    }
}
