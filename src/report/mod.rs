mod csv;

pub use self::csv::{format_row, header, CsvReporter, CSV_COLUMNS};

use crate::discovery::WalkStats;

/// Totals for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Project directories walked
    pub projects_analyzed: usize,
    /// CSV rows written
    pub rows_written: usize,
    pub files_classified: usize,
    pub parse_failures: usize,
}

impl RunSummary {
    pub fn new(stats: WalkStats, rows_written: usize) -> Self {
        Self {
            projects_analyzed: stats.projects_discovered,
            rows_written,
            files_classified: stats.files_classified,
            parse_failures: stats.parse_failures,
        }
    }
}
