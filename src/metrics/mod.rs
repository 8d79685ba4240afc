mod project;
mod summary;

pub use project::{LayoutMetrics, ProjectRecord};
pub use summary::LayoutSummary;
