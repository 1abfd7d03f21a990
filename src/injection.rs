//! Packaging of the inlined resources for the webview's initial document.
//!
//! The front-end receives one explicit configuration object instead of ambient globals.
//! It is embedded as an inert JSON element that the front-end reads once while
//! initializing; assets whose inlined value is empty are loaded from the images base
//! location instead.

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::asset_paths::{AssetReference, PathResolver};
use crate::inliner::ResourceInliner;
use crate::models::{BundledAsset, ResourceBundle};
use crate::reader::AssetReader;

/// Default id of the element carrying [`FrontendResources`].
pub const DEFAULT_ELEMENT_ID: &str = "webview-resources";

/// Configuration object handed to the webview front-end at initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendResources {
  /// Base location used to build fallback URLs for assets that were not inlined.
  pub images_base_uri: String,
  /// Inlined values keyed by bundled asset.
  pub inlined_resources: ResourceBundle,
}

impl FrontendResources {
  /// Pair a resource bundle with the base location used for fallbacks.
  pub fn new(images_base_uri: impl Into<String>, inlined_resources: ResourceBundle) -> Self {
    Self {
      images_base_uri: images_base_uri.into(),
      inlined_resources,
    }
  }

  /// Source the front-end should use for `asset`.
  ///
  /// A non-empty inlined value wins. Otherwise the asset's conventional file name is
  /// appended to the images base location, exactly as the front-end does.
  pub fn resolve_src(&self, asset: BundledAsset) -> String {
    let inlined = self.inlined_resources.get(asset);
    if !inlined.is_empty() {
      return inlined.to_string();
    }
    format!("{}/{}", self.images_base_uri, asset.file_name())
  }

  /// Render the configuration as an inert `application/json` script element.
  ///
  /// `<`, `>`, `&` and the U+2028/U+2029 line separators are emitted as unicode escapes,
  /// so no payload can close the element early and the text stays valid as a script
  /// literal.
  pub fn render_config_element(&self, element_id: &str) -> serde_json::Result<String> {
    let json = serde_json::to_string(self)?;
    Ok(format!(
      r#"<script type="application/json" id="{id}">{payload}</script>"#,
      id = html_escape::encode_double_quoted_attribute(element_id),
      payload = escape_script_json(&json),
    ))
  }
}

fn escape_script_json(json: &str) -> String {
  let mut escaped = String::with_capacity(json.len());
  for ch in json.chars() {
    match ch {
      '<' => escaped.push_str("\\u003c"),
      '>' => escaped.push_str("\\u003e"),
      '&' => escaped.push_str("\\u0026"),
      '\u{2028}' => escaped.push_str("\\u2028"),
      '\u{2029}' => escaped.push_str("\\u2029"),
      other => escaped.push(other),
    }
  }
  escaped
}

/// Assembles the head fragment injected into the webview's initial HTML.
pub struct BundleInjector<'a, R, P> {
  inliner: &'a ResourceInliner<R, P>,
  images_base_uri: String,
  stylesheets: Vec<AssetReference>,
  element_id: String,
}

impl<'a, R: AssetReader, P: PathResolver> BundleInjector<'a, R, P> {
  /// Create an injector that falls back to `images_base_uri` for non-inlined assets.
  pub fn new(inliner: &'a ResourceInliner<R, P>, images_base_uri: impl Into<String>) -> Self {
    Self {
      inliner,
      images_base_uri: images_base_uri.into(),
      stylesheets: Vec::new(),
      element_id: DEFAULT_ELEMENT_ID.to_string(),
    }
  }

  /// Stylesheets to inline ahead of the configuration element, in order.
  pub fn with_stylesheets(mut self, stylesheets: Vec<AssetReference>) -> Self {
    self.stylesheets = stylesheets;
    self
  }

  /// Override the id of the configuration element.
  pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
    self.element_id = element_id.into();
    self
  }

  /// Build a fresh resource bundle and pair it with the images base location.
  pub async fn frontend_resources(&self) -> FrontendResources {
    let bundle = self.inliner.build_resource_bundle().await;
    FrontendResources::new(self.images_base_uri.clone(), bundle)
  }

  /// Inline every stylesheet and append the front-end configuration element.
  ///
  /// Stylesheets and bundle assets are resolved concurrently; the output keeps the
  /// configured stylesheet order.
  pub async fn head_fragment(&self) -> serde_json::Result<String> {
    let stylesheets = join_all(
      self
        .stylesheets
        .iter()
        .map(|path| self.inliner.inline_stylesheet(path)),
    );
    let (styles, resources) = futures::join!(stylesheets, self.frontend_resources());

    let mut parts = styles;
    parts.push(resources.render_config_element(&self.element_id)?);
    Ok(parts.join("\n"))
  }
}
