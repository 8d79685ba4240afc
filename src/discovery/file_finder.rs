use crate::classify::ResourcePath;
use std::path::{Path, PathBuf};

const MANIFEST_FILE_NAME: &str = "AndroidManifest.xml";

/// Placeholder directory the decompiler uses for content it could not decode
const UNKNOWN_SEGMENT: &str = "unknown";

/// A candidate resource file found during the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    /// Path on disk
    pub path: PathBuf,

    /// Location relative to the scan root, used for classification
    pub resource_path: ResourcePath,
}

impl ResourceFile {
    pub fn new(scan_root: &Path, path: PathBuf) -> Self {
        let relative = path.strip_prefix(scan_root).unwrap_or(path.as_path());
        let resource_path = ResourcePath::new(relative);
        Self { path, resource_path }
    }
}

/// Decides which files are handed to the classifier
#[derive(Debug, Clone)]
pub struct FileFilter {
    extension: String,
}

impl FileFilter {
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Check the file extension (case-insensitive)
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }

    pub fn accepts(&self, file: &ResourceFile) -> bool {
        self.matches_extension(&file.path) && !is_excluded(&file.resource_path)
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::new("xml")
    }
}

/// Manifests and anything below an `unknown` directory are never classified
pub fn is_excluded(path: &ResourcePath) -> bool {
    path.file_name().eq_ignore_ascii_case(MANIFEST_FILE_NAME)
        || path
            .segments()
            .any(|segment| segment.eq_ignore_ascii_case(UNKNOWN_SEGMENT))
}
