//! Error types for asset reads and configuration loading.
//!
//! None of these escape [`crate::ResourceInliner`]: every asset failure is logged and
//! converted to that operation's fallback value. They surface only from the lower level
//! primitives and from configuration loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain the contents of a bundled asset.
#[derive(Debug, Error)]
pub enum AssetError {
  /// The asset is missing, unreadable, or (for text reads) not valid UTF-8.
  #[error("asset {path} is unavailable: {source}")]
  Unavailable {
    /// Root-relative path of the asset, joined with `/`.
    path: String,
    /// Underlying read error.
    source: io::Error,
  },
}

/// Errors that can occur while loading an explicit configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Failed to read the configuration file from disk.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: io::Error,
  },
  /// Failed to parse the JSON configuration file.
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl ConfigError {
  /// Returns `true` when the configuration file simply does not exist.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
  }
}
