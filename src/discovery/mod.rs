//! Project discovery
//!
//! Finds the projects under a scan root and walks each one for resource
//! files to classify.

mod file_finder;
mod qualifiers;
mod walker;

pub use file_finder::{is_excluded, FileFilter, ResourceFile};
pub use qualifiers::QualifierCounts;
pub use walker::{ProjectWalker, WalkError, WalkOptions, WalkStats};
