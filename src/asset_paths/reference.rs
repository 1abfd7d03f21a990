use std::fmt;

/// Root-relative location of a bundled asset, stored as ordered path segments.
///
/// Segments are kept exactly as supplied so the joined form used in diagnostics matches
/// what the caller asked for. Use [`AssetReference::parse`] to build a reference from a
/// slash separated string coming from configuration or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetReference {
    segments: Vec<String>,
}

impl AssetReference {
    /// Build a reference from individual path segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a `/` or `\` separated path into a reference, dropping empty segments.
    ///
    /// Backslashes are accepted so configuration written on Windows resolves the same way
    /// on every platform.
    pub fn parse(path: &str) -> Self {
        Self::new(
            path.split(['/', '\\'])
                .filter(|segment| !segment.is_empty()),
        )
    }

    /// Return a new reference with `name` appended as the final segment.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Borrow the raw segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` when the reference points at the root itself.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for AssetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}
