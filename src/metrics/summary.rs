use super::{LayoutMetrics, ProjectRecord};

/// Aggregate layout figures reported per project
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutSummary {
    pub count: usize,
    pub avg_max_depth: f64,
    pub max_depth: usize,
    pub avg_element_count: f64,
    pub total_element_count: usize,
    pub avg_attribute_count: f64,
    pub total_attribute_count: usize,
}

impl LayoutSummary {
    /// Summarize a project's layouts.
    ///
    /// With no layouts the aggregates are taken over a single all-zero entry,
    /// so every figure comes out as zero.
    pub fn from_record(record: &ProjectRecord) -> Self {
        let empty = [LayoutMetrics::default()];
        let layouts: Vec<&LayoutMetrics> = if record.layouts.is_empty() {
            empty.iter().collect()
        } else {
            record.layouts.values().collect()
        };

        let n = layouts.len() as f64;
        let total_depth: usize = layouts.iter().map(|l| l.max_depth).sum();
        let total_element_count: usize = layouts.iter().map(|l| l.element_count).sum();
        let total_attribute_count: usize = layouts.iter().map(|l| l.attribute_count).sum();

        Self {
            count: record.layouts.len(),
            avg_max_depth: total_depth as f64 / n,
            max_depth: layouts.iter().map(|l| l.max_depth).max().unwrap_or(0),
            avg_element_count: total_element_count as f64 / n,
            total_element_count,
            avg_attribute_count: total_attribute_count as f64 / n,
            total_attribute_count,
        }
    }
}
