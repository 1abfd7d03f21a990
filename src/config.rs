//! Inliner configuration loaded from the extension root.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::asset_paths::AssetReference;
use crate::error::ConfigError;
use crate::inliner::{DEFAULT_IMAGES_DIR, ResourceInliner};
use crate::injection::DEFAULT_ELEMENT_ID;
use crate::models::BundleResolution;

/// File name looked up in the extension root by [`InlinerConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "resource-inliner.config.json";

/// Discoverable configuration describing where assets live and how they are injected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlinerConfig {
    /// Segments of the directory holding the bundled images, relative to the root.
    pub images_dir: Vec<String>,
    /// Base location the front-end falls back to for assets that were not inlined.
    pub images_base_uri: String,
    /// Root-relative stylesheet paths inlined into the document head, in order.
    pub stylesheets: Vec<String>,
    /// Whether bundle assets are resolved concurrently or sequentially.
    pub resolution: BundleResolution,
    /// Id of the element carrying the front-end resource configuration.
    pub element_id: String,
}

impl Default for InlinerConfig {
    fn default() -> Self {
        Self {
            images_dir: DEFAULT_IMAGES_DIR.iter().map(|s| s.to_string()).collect(),
            images_base_uri: String::new(),
            stylesheets: Vec::new(),
            resolution: BundleResolution::default(),
            element_id: DEFAULT_ELEMENT_ID.into(),
        }
    }
}

impl InlinerConfig {
    /// Attempt to load configuration from the provided extension root.
    ///
    /// A missing file is the normal case and yields defaults silently. A file that exists
    /// but cannot be read or parsed is reported at `warn` and also yields defaults, so
    /// the webview always gets a bundle.
    pub fn discover(root: &Path) -> Self {
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        match Self::from_path(&candidate) {
            Ok(config) => config,
            Err(err) if err.is_not_found() => Self::default(),
            Err(err) => {
                warn!(error = %err, "ignoring unusable inliner configuration");
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Images directory as an asset reference.
    pub fn images_dir_reference(&self) -> AssetReference {
        AssetReference::new(self.images_dir.iter().map(String::as_str))
    }

    /// Configured stylesheets as asset references, preserving order.
    ///
    /// Blank entries are skipped; they would resolve to the root directory itself.
    pub fn stylesheet_references(&self) -> Vec<AssetReference> {
        self.stylesheets
            .iter()
            .map(|path| AssetReference::parse(path))
            .filter(|reference| !reference.is_empty())
            .collect()
    }

    /// Build a filesystem-backed inliner rooted at `root` using this configuration.
    pub fn to_inliner(&self, root: &Path) -> ResourceInliner {
        ResourceInliner::new(root)
            .with_images_dir(self.images_dir_reference())
            .with_resolution(self.resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_defaults_when_file_is_missing() {
        let dir = tempdir().unwrap();
        let config = InlinerConfig::discover(dir.path());

        assert_eq!(config, InlinerConfig::default());
        assert_eq!(config.images_dir_reference().to_string(), "assets/images");
        assert_eq!(config.element_id, DEFAULT_ELEMENT_ID);
    }

    #[test]
    fn discover_reads_partial_configuration() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{
              "imagesBaseUri": "https://file+.vscode-resource.example/assets/images",
              "stylesheets": ["webview-ui/build/assets/index.css", "", "assets\\codicons\\codicon.css"],
              "resolution": "sequential"
            }"#,
        )
        .unwrap();

        let config = InlinerConfig::discover(dir.path());

        assert_eq!(
            config.images_base_uri,
            "https://file+.vscode-resource.example/assets/images"
        );
        assert_eq!(config.resolution, BundleResolution::Sequential);
        assert_eq!(config.images_dir, vec!["assets", "images"]);
        let stylesheets: Vec<String> = config
            .stylesheet_references()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(stylesheets, vec![
            "webview-ui/build/assets/index.css",
            "assets/codicons/codicon.css"
        ]);
    }

    #[test]
    fn discover_falls_back_on_malformed_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();

        assert_eq!(InlinerConfig::discover(dir.path()), InlinerConfig::default());
    }

    #[test]
    fn from_path_reports_typed_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let err = InlinerConfig::from_path(&missing).unwrap_err();
        assert!(err.is_not_found());

        let malformed = dir.path().join("bad.json");
        fs::write(&malformed, "42").unwrap();
        let err = InlinerConfig::from_path(&malformed).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn builds_inliner_from_configuration() {
        let dir = tempdir().unwrap();
        let config = InlinerConfig {
            images_dir: vec!["media".into()],
            resolution: BundleResolution::Sequential,
            ..InlinerConfig::default()
        };

        let inliner = config.to_inliner(dir.path());
        assert_eq!(inliner.images_dir().to_string(), "media");
        assert_eq!(inliner.resolution(), BundleResolution::Sequential);
    }
}
