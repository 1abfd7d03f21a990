use std::path::{Path, PathBuf};

use super::AssetReference;

/// Joins a fixed root with the segments of an [`AssetReference`].
///
/// Hosts that already own a URI scheme for their install location implement this trait;
/// everything else can use [`RootResolver`].
pub trait PathResolver: Send + Sync {
    /// Produce the readable location for `reference`.
    fn resolve(&self, reference: &AssetReference) -> PathBuf;
}

/// Filesystem resolver anchored at the extension install directory.
#[derive(Debug, Clone)]
pub struct RootResolver {
    root: PathBuf,
}

impl RootResolver {
    /// Create a resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory every reference is resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathResolver for RootResolver {
    fn resolve(&self, reference: &AssetReference) -> PathBuf {
        let mut location = self.root.clone();
        // Separators inside a segment never reset the root.
        for segment in reference.segments() {
            for part in segment.split(['/', '\\']).filter(|part| !part.is_empty()) {
                location.push(part);
            }
        }
        location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_root_with_every_segment() {
        let resolver = RootResolver::new("/opt/extension");
        let location = resolver.resolve(&AssetReference::new(["assets", "images", "a.png"]));

        assert_eq!(
            location,
            PathBuf::from("/opt/extension")
                .join("assets")
                .join("images")
                .join("a.png")
        );
    }

    #[test]
    fn absolute_segments_stay_under_root() {
        let resolver = RootResolver::new("/opt/extension");
        let location = resolver.resolve(&AssetReference::new(["/etc", "\\passwd"]));

        assert_eq!(location, PathBuf::from("/opt/extension").join("etc").join("passwd"));
        assert!(location.starts_with(resolver.root()));
    }

    #[test]
    fn empty_reference_resolves_to_root() {
        let resolver = RootResolver::new("ext");
        assert_eq!(resolver.resolve(&AssetReference::parse("")), resolver.root());
    }
}
