//! Assembly of the fixed-shape [`ResourceBundle`].

use futures::future::join_all;
use tracing::debug;

use super::ResourceInliner;
use crate::asset_paths::{AssetReference, PathResolver};
use crate::models::{BundleResolution, BundledAsset, ResourceBundle};
use crate::reader::AssetReader;

impl<R: AssetReader, P: PathResolver> ResourceInliner<R, P> {
  /// Inline every [`BundledAsset`] that is present under the images directory.
  ///
  /// Each asset is checked for existence first and only read when present, so a missing
  /// file costs no read attempt and no warning. The bundle always carries every key;
  /// absent or unreadable assets map to `""`.
  pub async fn build_resource_bundle(&self) -> ResourceBundle {
    let bundle = match self.resolution {
      BundleResolution::Concurrent => {
        let values = join_all(
          BundledAsset::ALL.map(|asset| self.resolve_bundled_asset(asset)),
        )
        .await;
        BundledAsset::ALL.into_iter().zip(values).collect()
      }
      BundleResolution::Sequential => {
        let mut bundle = ResourceBundle::default();
        for asset in BundledAsset::ALL {
          bundle.set(asset, self.resolve_bundled_asset(asset).await);
        }
        bundle
      }
    };

    debug!(
      inlined = bundle.inlined_count(),
      total = BundledAsset::ALL.len(),
      "assembled resource bundle"
    );
    bundle
  }

  /// Root-relative reference of a bundled asset under the configured images directory.
  pub fn bundled_asset_reference(&self, asset: BundledAsset) -> AssetReference {
    self.images_dir.child(asset.file_name())
  }

  async fn resolve_bundled_asset(&self, asset: BundledAsset) -> String {
    let reference = self.bundled_asset_reference(asset);
    if !self.exists(&reference).await {
      debug!(path = %reference, key = asset.key(), "bundled asset not present");
      return String::new();
    }

    self.asset_to_data_uri(&reference, asset.class()).await
  }
}
