//! Pure formatting of inline representations.

use base64::Engine as _;
use base64::engine::general_purpose;

use crate::asset_paths::AssetReference;

/// Wrap stylesheet text in a `<style>` block, content kept verbatim.
pub fn style_block(css: &str) -> String {
  format!("<style>\n{css}\n</style>")
}

/// Markup left in place of a stylesheet that could not be read.
pub fn stylesheet_placeholder(path: &AssetReference) -> String {
  format!("<!-- Failed to inline CSS: {path} -->")
}

/// Encode `bytes` as a `data:<mime>;base64,<payload>` URI using the standard alphabet.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
  let prefix_len = "data:".len() + mime.len() + ";base64,".len();
  let payload_len = base64::encoded_len(bytes.len(), true).unwrap_or(0);

  let mut uri = String::with_capacity(prefix_len + payload_len);
  uri.push_str("data:");
  uri.push_str(mime);
  uri.push_str(";base64,");
  general_purpose::STANDARD.encode_string(bytes, &mut uri);
  uri
}
