//! Best-effort conversion of bundled assets into inline markup and data URIs.
//!
//! Every operation here is total: read failures are logged at `warn` and replaced by the
//! operation's fallback value, so callers embedding the output never handle errors.

mod bundle;
pub mod encode;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::asset_paths::{AssetReference, PathResolver, RootResolver};
use crate::error::AssetError;
use crate::models::{AssetClass, BundleResolution};
use crate::reader::{AssetReader, FsAssetReader};

/// Default location of the bundled images, relative to the extension root.
pub const DEFAULT_IMAGES_DIR: [&str; 2] = ["assets", "images"];

/// Inlines stylesheets and images found under a fixed root.
///
/// The inliner holds no mutable state; each call resolves and reads afresh, so calls may
/// run concurrently in any order.
#[derive(Debug, Clone)]
pub struct ResourceInliner<R = FsAssetReader, P = RootResolver> {
  resolver: P,
  reader: R,
  images_dir: AssetReference,
  resolution: BundleResolution,
}

impl ResourceInliner {
  /// Create an inliner reading from the local filesystem under `root`.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self::with_parts(RootResolver::new(root), FsAssetReader)
  }
}

impl<R, P> ResourceInliner<R, P> {
  /// Create an inliner from explicit resolution and reading capabilities.
  pub fn with_parts(resolver: P, reader: R) -> Self {
    Self {
      resolver,
      reader,
      images_dir: AssetReference::new(DEFAULT_IMAGES_DIR),
      resolution: BundleResolution::default(),
    }
  }

  /// Override the directory the bundled images are looked up in.
  pub fn with_images_dir(mut self, images_dir: AssetReference) -> Self {
    self.images_dir = images_dir;
    self
  }

  /// Choose whether bundle assets are resolved concurrently or sequentially.
  pub fn with_resolution(mut self, resolution: BundleResolution) -> Self {
    self.resolution = resolution;
    self
  }

  /// Directory the bundled images are looked up in.
  pub fn images_dir(&self) -> &AssetReference {
    &self.images_dir
  }

  /// Current bundle resolution mode.
  pub fn resolution(&self) -> BundleResolution {
    self.resolution
  }
}

impl<R: AssetReader, P: PathResolver> ResourceInliner<R, P> {
  /// Read a stylesheet and wrap it in a `<style>` block.
  ///
  /// On failure the result is an HTML comment naming the path, which is harmless when
  /// injected into the document head.
  pub async fn inline_stylesheet(&self, path: &AssetReference) -> String {
    match self.read_text(path).await {
      Ok(css) => {
        debug!(%path, bytes = css.len(), "inlined stylesheet");
        encode::style_block(&css)
      }
      Err(err) => {
        warn!(%path, error = %err, "failed to inline stylesheet");
        encode::stylesheet_placeholder(path)
      }
    }
  }

  /// Read an SVG as text and return it as an `image/svg+xml` data URI, or `""`.
  ///
  /// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
  pub async fn svg_to_data_uri(&self, path: &AssetReference) -> String {
    self.asset_to_data_uri(path, AssetClass::Vector).await
  }

  /// Read a binary image and return it as a data URI labelled `mime`, or `""`.
  pub async fn image_to_data_uri(&self, path: &AssetReference, mime: &str) -> String {
    self
      .asset_to_data_uri(path, AssetClass::Raster { mime })
      .await
  }

  /// Encode an asset as a data URI according to its class.
  ///
  /// Vector assets are decoded as UTF-8 with lossy replacement before encoding; raster
  /// assets are taken byte for byte. Any read failure yields the empty string.
  pub async fn asset_to_data_uri(&self, path: &AssetReference, class: AssetClass<'_>) -> String {
    let contents = match class {
      AssetClass::Vector => self
        .read_bytes(path)
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned().into_bytes()),
      AssetClass::Raster { .. } => self.read_bytes(path).await,
    };

    match contents {
      Ok(bytes) => {
        debug!(%path, bytes = bytes.len(), mime = class.mime(), "encoded data URI");
        encode::data_uri(class.mime(), &bytes)
      }
      Err(err) => {
        warn!(%path, error = %err, mime = class.mime(), "failed to convert asset to data URI");
        String::new()
      }
    }
  }

  /// Report whether `path` currently resolves to an accessible location.
  pub async fn exists(&self, path: &AssetReference) -> bool {
    let location = self.resolver.resolve(path);
    self.reader.is_accessible(&location).await
  }

  async fn read_text(&self, path: &AssetReference) -> Result<String, AssetError> {
    let location = self.resolver.resolve(path);
    self
      .reader
      .read_text(&location)
      .await
      .map_err(|source| unavailable(path, source))
  }

  async fn read_bytes(&self, path: &AssetReference) -> Result<Vec<u8>, AssetError> {
    let location = self.resolver.resolve(path);
    self
      .reader
      .read_bytes(&location)
      .await
      .map_err(|source| unavailable(path, source))
  }
}

fn unavailable(path: &AssetReference, source: std::io::Error) -> AssetError {
  AssetError::Unavailable {
    path: path.to_string(),
    source,
  }
}

#[cfg(test)]
mod tests {
  use std::fs;
  use std::io;
  use std::path::Path;

  use async_trait::async_trait;
  use base64::Engine as _;
  use base64::engine::general_purpose;
  use tempfile::tempdir;

  use super::*;

  struct DeniedReader;

  #[async_trait]
  impl AssetReader for DeniedReader {
    async fn read_text(&self, _location: &Path) -> io::Result<String> {
      Err(io::Error::from(io::ErrorKind::PermissionDenied))
    }

    async fn read_bytes(&self, _location: &Path) -> io::Result<Vec<u8>> {
      Err(io::Error::from(io::ErrorKind::PermissionDenied))
    }

    async fn is_accessible(&self, _location: &Path) -> bool {
      false
    }
  }

  #[tokio::test]
  async fn inlines_stylesheet_verbatim() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.css"), "body{color:red}").unwrap();

    let inliner = ResourceInliner::new(dir.path());
    let result = inliner.inline_stylesheet(&AssetReference::new(["a.css"])).await;

    assert_eq!(result, "<style>\nbody{color:red}\n</style>");
  }

  #[tokio::test]
  async fn missing_stylesheet_becomes_comment() {
    let dir = tempdir().unwrap();
    let inliner = ResourceInliner::new(dir.path());

    let result = inliner.inline_stylesheet(&AssetReference::new(["missing.css"])).await;
    assert_eq!(result, "<!-- Failed to inline CSS: missing.css -->");

    let nested = inliner
      .inline_stylesheet(&AssetReference::new(["assets", "missing.css"]))
      .await;
    assert_eq!(nested, "<!-- Failed to inline CSS: assets/missing.css -->");
  }

  #[tokio::test]
  async fn converts_svg_to_data_uri() {
    let dir = tempdir().unwrap();
    let svg = r#"<svg><path d="M0,0L10,10"/></svg>"#;
    fs::write(dir.path().join("icon.svg"), svg).unwrap();

    let inliner = ResourceInliner::new(dir.path());
    let result = inliner.svg_to_data_uri(&AssetReference::new(["icon.svg"])).await;

    assert_eq!(
      result,
      format!(
        "data:image/svg+xml;base64,{}",
        general_purpose::STANDARD.encode(svg)
      )
    );
  }

  #[tokio::test]
  async fn converts_binary_image_with_supplied_mime() {
    let dir = tempdir().unwrap();
    let bytes = [0x89, b'P', b'N', b'G', 0x00, 0xff];
    fs::write(dir.path().join("image.png"), bytes).unwrap();

    let inliner = ResourceInliner::new(dir.path());
    let result = inliner
      .image_to_data_uri(&AssetReference::new(["image.png"]), "image/png")
      .await;

    assert_eq!(
      result,
      format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(bytes))
    );
  }

  #[tokio::test]
  async fn unreadable_assets_yield_empty_data_uri() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("folder.svg")).unwrap();
    let inliner = ResourceInliner::new(dir.path());

    let missing_png = inliner
      .image_to_data_uri(&AssetReference::new(["icon.png"]), "image/png")
      .await;
    let missing_svg = inliner.svg_to_data_uri(&AssetReference::new(["missing.svg"])).await;
    let directory_svg = inliner.svg_to_data_uri(&AssetReference::new(["folder.svg"])).await;

    assert_eq!(missing_png, "");
    assert_eq!(missing_svg, "");
    assert_eq!(directory_svg, "");
  }

  #[tokio::test]
  async fn non_utf8_svg_is_decoded_lossily() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("logo.svg"), b"<svg><title>caf\xe9</title></svg>").unwrap();
    let inliner = ResourceInliner::new(dir.path());
    let path = AssetReference::new(["logo.svg"]);

    assert!(inliner.exists(&path).await);
    assert_eq!(
      inliner.svg_to_data_uri(&path).await,
      format!(
        "data:image/svg+xml;base64,{}",
        general_purpose::STANDARD.encode("<svg><title>caf\u{FFFD}</title></svg>")
      )
    );
  }

  #[tokio::test]
  async fn exists_reports_accessibility() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets").join("file.txt"), "x").unwrap();

    let inliner = ResourceInliner::new(dir.path());
    assert!(inliner.exists(&AssetReference::new(["assets", "file.txt"])).await);
    assert!(!inliner.exists(&AssetReference::new(["assets", "missing.txt"])).await);
  }

  #[tokio::test]
  async fn permission_errors_fall_back_quietly() {
    let inliner = ResourceInliner::with_parts(RootResolver::new("/ext"), DeniedReader);
    let path = AssetReference::new(["assets", "styles.css"]);

    assert!(!inliner.exists(&path).await);
    assert_eq!(
      inliner.inline_stylesheet(&path).await,
      "<!-- Failed to inline CSS: assets/styles.css -->"
    );
    assert_eq!(inliner.svg_to_data_uri(&path).await, "");
  }
}
