use glob::Pattern;
use std::path::Path;
use tracing::debug;

const DRAWABLE_DENSITY_PATTERN: &str = "drawable-*";
const VALUE_LOCALE_PATTERN: &str = "values-??";

/// Qualifier folders found directly under a project's `res` directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualifierCounts {
    /// `res/drawable-*` (hdpi, xxhdpi, night, ...)
    pub drawable_density: usize,
    /// `res/values-??` (two-letter locales such as `values-fr`)
    pub value_locale: usize,
}

impl QualifierCounts {
    /// Count qualifier folders; a project without `res` has none
    pub fn scan(project_dir: &Path) -> Self {
        let res_dir = project_dir.join("res");
        if !res_dir.is_dir() {
            debug!("No res directory in {}", project_dir.display());
            return Self::default();
        }

        Self {
            drawable_density: count_dirs(&res_dir, DRAWABLE_DENSITY_PATTERN),
            value_locale: count_dirs(&res_dir, VALUE_LOCALE_PATTERN),
        }
    }
}

fn count_dirs(parent: &Path, pattern: &str) -> usize {
    let full_pattern = format!(
        "{}/{}",
        Pattern::escape(&parent.to_string_lossy()),
        pattern
    );

    match glob::glob(&full_pattern) {
        Ok(paths) => paths
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_dir())
            .count(),
        Err(e) => {
            debug!("Invalid glob pattern {}: {}", full_pattern, e);
            0
        }
    }
}
