use super::{FileFilter, QualifierCounts, ResourceFile};
use crate::classify;
use crate::metrics::ProjectRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, trace};
use walkdir::WalkDir;

/// Fatal errors opening the scan root
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("input directory does not exist: {0}")]
    NotFound(PathBuf),

    #[error("input path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read input directory '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options controlling the walk
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Extension of files handed to the classifier
    pub extension: String,

    /// Stop discovering projects after this many
    pub max_projects: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            extension: "xml".to_string(),
            max_projects: None,
        }
    }
}

/// Counters for one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub projects_discovered: usize,
    pub files_classified: usize,
    pub parse_failures: usize,
}

/// Lazily walks a directory of decompiled projects
///
/// Every direct subdirectory of the root is one project. Each call to
/// `next` walks one project depth-first, classifies its resource files and
/// yields the finished record, so output can be streamed as the walk goes.
pub struct ProjectWalker {
    root: PathBuf,
    projects: std::vec::IntoIter<PathBuf>,
    filter: FileFilter,
    max_projects: Option<usize>,
    stats: WalkStats,
}

impl ProjectWalker {
    pub fn new(root: impl Into<PathBuf>, options: &WalkOptions) -> Result<Self, WalkError> {
        let root = root.into();
        if !root.exists() {
            return Err(WalkError::NotFound(root));
        }
        if !root.is_dir() {
            return Err(WalkError::NotADirectory(root));
        }

        let entries = std::fs::read_dir(&root).map_err(|source| WalkError::Unreadable {
            path: root.clone(),
            source,
        })?;

        // Loose files at the top level are not projects
        let mut projects: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        projects.sort();

        debug!("Found {} project directories in {}", projects.len(), root.display());

        Ok(Self {
            root,
            projects: projects.into_iter(),
            filter: FileFilter::new(&options.extension),
            max_projects: options.max_projects,
            stats: WalkStats::default(),
        })
    }

    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    fn scan_project(&mut self, project_dir: &Path) -> ProjectRecord {
        let qualifiers = QualifierCounts::scan(project_dir);
        let mut record = ProjectRecord::new(project_dir.display().to_string())
            .with_qualifier_counts(qualifiers.drawable_density, qualifiers.value_locale);

        let walker = WalkDir::new(project_dir)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.filter.matches_extension(entry.path()) {
                continue;
            }

            let file = ResourceFile::new(&self.root, entry.into_path());
            if !self.filter.accepts(&file) {
                trace!("Excluding: {}", file.path.display());
                continue;
            }

            match classify::classify_file(&mut record, &file) {
                Ok(kind) => {
                    trace!("{} -> {}", file.resource_path, kind.display_name());
                    self.stats.files_classified += 1;
                }
                Err(e) => {
                    error!("{}: {}", file.path.display(), e);
                    self.stats.parse_failures += 1;
                }
            }
        }

        record
    }
}

impl Iterator for ProjectWalker {
    type Item = ProjectRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(max) = self.max_projects {
            if self.stats.projects_discovered >= max {
                return None;
            }
        }

        let project_dir = self.projects.next()?;
        self.stats.projects_discovered += 1;
        info!("dir {}", project_dir.display());

        Some(self.scan_project(&project_dir))
    }
}
