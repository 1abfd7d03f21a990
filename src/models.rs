//! Data structures produced while inlining webview resources.

use serde::{Deserialize, Serialize};

/// MIME type used for every vector icon data URI.
pub const SVG_MIME: &str = "image/svg+xml";

/// MIME type of the bundled raster provider icons.
pub const PNG_MIME: &str = "image/png";

/// How an asset is read and which MIME type its data URI carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass<'a> {
  /// Text asset (SVG) read as UTF-8 and always labelled `image/svg+xml`.
  Vector,
  /// Binary asset read as raw bytes, labelled with the caller-supplied MIME type.
  Raster {
    /// MIME type written into the data URI verbatim.
    mime: &'a str,
  },
}

impl AssetClass<'_> {
  /// MIME type that the resulting data URI will carry.
  pub fn mime(&self) -> &str {
    match self {
      AssetClass::Vector => SVG_MIME,
      AssetClass::Raster { mime } => mime,
    }
  }
}

/// The fixed set of assets that make up a [`ResourceBundle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BundledAsset {
  /// Primary product logo (vector).
  RooLogo,
  /// First provider icon (raster).
  OpenRouterIcon,
  /// Second provider icon (raster).
  RequestyIcon,
}

impl BundledAsset {
  /// Every bundled asset, in serialization order.
  pub const ALL: [BundledAsset; 3] = [
    BundledAsset::RooLogo,
    BundledAsset::OpenRouterIcon,
    BundledAsset::RequestyIcon,
  ];

  /// Key under which the asset appears in the serialized bundle.
  pub fn key(self) -> &'static str {
    match self {
      BundledAsset::RooLogo => "rooLogoSvg",
      BundledAsset::OpenRouterIcon => "openrouterPng",
      BundledAsset::RequestyIcon => "requestyPng",
    }
  }

  /// Conventional file name inside the images directory.
  ///
  /// The front-end appends this to the images base location when the inlined value is
  /// empty, so it doubles as the fallback URL suffix.
  pub fn file_name(self) -> &'static str {
    match self {
      BundledAsset::RooLogo => "roo-logo.svg",
      BundledAsset::OpenRouterIcon => "openrouter.png",
      BundledAsset::RequestyIcon => "requesty.png",
    }
  }

  /// How the asset is read and encoded.
  pub fn class(self) -> AssetClass<'static> {
    match self {
      BundledAsset::RooLogo => AssetClass::Vector,
      BundledAsset::OpenRouterIcon | BundledAsset::RequestyIcon => {
        AssetClass::Raster { mime: PNG_MIME }
      }
    }
  }

  /// Look an asset up by its serialized key or its file name.
  pub fn from_key(value: &str) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|asset| asset.key() == value || asset.file_name() == value)
  }
}

/// Inlined values for every [`BundledAsset`], ready for injection into the webview.
///
/// Every field is always present. An empty string means "not inlined" and tells the
/// front-end to fall back to the images base location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceBundle {
  /// Data URI of the primary logo, or empty.
  pub roo_logo_svg: String,
  /// Data URI of the first provider icon, or empty.
  pub openrouter_png: String,
  /// Data URI of the second provider icon, or empty.
  pub requesty_png: String,
}

impl ResourceBundle {
  /// Inlined value stored for `asset`.
  pub fn get(&self, asset: BundledAsset) -> &str {
    match asset {
      BundledAsset::RooLogo => &self.roo_logo_svg,
      BundledAsset::OpenRouterIcon => &self.openrouter_png,
      BundledAsset::RequestyIcon => &self.requesty_png,
    }
  }

  /// Replace the value stored for `asset`.
  pub fn set(&mut self, asset: BundledAsset, value: String) {
    let slot = match asset {
      BundledAsset::RooLogo => &mut self.roo_logo_svg,
      BundledAsset::OpenRouterIcon => &mut self.openrouter_png,
      BundledAsset::RequestyIcon => &mut self.requesty_png,
    };
    *slot = value;
  }

  /// Iterate `(asset, value)` pairs in serialization order.
  pub fn iter(&self) -> impl Iterator<Item = (BundledAsset, &str)> + '_ {
    BundledAsset::ALL
      .into_iter()
      .map(move |asset| (asset, self.get(asset)))
  }

  /// Number of assets that carry a non-empty inline value.
  pub fn inlined_count(&self) -> usize {
    self.iter().filter(|(_, value)| !value.is_empty()).count()
  }
}

impl FromIterator<(BundledAsset, String)> for ResourceBundle {
  fn from_iter<I: IntoIterator<Item = (BundledAsset, String)>>(iter: I) -> Self {
    let mut bundle = Self::default();
    for (asset, value) in iter {
      bundle.set(asset, value);
    }
    bundle
  }
}

/// Whether bundle assets are resolved together or one after another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleResolution {
  /// Resolve every asset concurrently.
  #[default]
  Concurrent,
  /// Resolve assets strictly in declaration order.
  Sequential,
}
