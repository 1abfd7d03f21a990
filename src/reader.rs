//! Byte-reading capability used by the inliner.

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Reads whole assets from a resolved location.
///
/// Implementations report failures as plain I/O errors; the inliner decides how each one
/// degrades.
#[async_trait]
pub trait AssetReader: Send + Sync {
  /// Read the full contents as UTF-8 text.
  async fn read_text(&self, location: &Path) -> io::Result<String>;

  /// Read the full contents as raw bytes.
  async fn read_bytes(&self, location: &Path) -> io::Result<Vec<u8>>;

  /// Report whether `location` is currently accessible. Must not fail.
  async fn is_accessible(&self, location: &Path) -> bool;
}

/// [`AssetReader`] backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetReader;

#[async_trait]
impl AssetReader for FsAssetReader {
  async fn read_text(&self, location: &Path) -> io::Result<String> {
    tokio::fs::read_to_string(location).await
  }

  async fn read_bytes(&self, location: &Path) -> io::Result<Vec<u8>> {
    tokio::fs::read(location).await
  }

  async fn is_accessible(&self, location: &Path) -> bool {
    tokio::fs::metadata(location).await.is_ok()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[tokio::test]
  async fn reads_text_and_bytes() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("icon.svg");
    std::fs::write(&file, "<svg/>").unwrap();

    let reader = FsAssetReader;
    assert_eq!(reader.read_text(&file).await.unwrap(), "<svg/>");
    assert_eq!(reader.read_bytes(&file).await.unwrap(), b"<svg/>");
    assert!(reader.is_accessible(&file).await);
  }

  #[tokio::test]
  async fn missing_file_is_inaccessible() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("missing.png");

    let reader = FsAssetReader;
    assert!(!reader.is_accessible(&file).await);
    let err = reader.read_bytes(&file).await.unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
  }

  #[tokio::test]
  async fn rejects_non_utf8_text() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("broken.svg");
    std::fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();

    let err = FsAssetReader.read_text(&file).await.unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
  }
}
