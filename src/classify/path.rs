use std::fmt;
use std::path::{Component, Path};

/// A resource file location normalized for rule matching
///
/// Always `/`-separated with a leading `/`, e.g. `/app/res/layout/main.xml`,
/// so that patterns like `/res/layout` behave the same on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Build from a path relative to the scan root
    pub fn new(relative: &Path) -> Self {
        let mut normalized = String::new();
        for component in relative.components() {
            if let Component::Normal(segment) = component {
                normalized.push('/');
                normalized.push_str(&segment.to_string_lossy());
            }
        }
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.0.contains(pattern)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    pub fn file_name(&self) -> &str {
        self.segments().last().unwrap_or("")
    }
}

impl From<&str> for ResourcePath {
    /// Normalize a textual path, accepting either separator
    fn from(path: &str) -> Self {
        let segments = path.split(['/', '\\']).filter(|s| !s.is_empty() && *s != ".");
        let mut normalized = String::new();
        for segment in segments {
            normalized.push('/');
            normalized.push_str(segment);
        }
        Self(normalized)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
