use crate::metrics::{LayoutSummary, ProjectRecord};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Output columns, in order
pub const CSV_COLUMNS: [&str; 19] = [
    "Folder",
    "Malicious",
    "XmlAnimFileCount",
    "XmlColorFileCount",
    "XmlFontFileCount",
    "XmlInterpolatorFileCount",
    "XmlDrawableFileCount",
    "XmlTransitionFileCount",
    "LayoutCount",
    "LayoutAvgMaxDepth",
    "LayoutMaxDepth",
    "LayoutAvgElementCount",
    "LayoutTotalElementCount",
    "LayoutAvgAttributeCount",
    "LayoutTotalAttributeCount",
    "StringCount",
    "StyleCount",
    "DrawableDensityFolderCount",
    "ValueLocaleFolderCount",
];

/// Streams project records to a CSV destination
///
/// The header is written on construction. Rows are flushed every
/// `flush_every` records (never when it is 0) and once more on [`finish`].
///
/// [`finish`]: CsvReporter::finish
pub struct CsvReporter<W: Write> {
    writer: W,
    label: i32,
    flush_every: usize,
    rows_written: usize,
}

impl CsvReporter<BufWriter<File>> {
    /// Create (or truncate) the CSV file at `path`
    pub fn create(path: &Path, label: i32, flush_every: usize) -> Result<Self> {
        let file = File::create(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create output file: {}", path.display()))?;
        Self::new(BufWriter::new(file), label, flush_every)
    }
}

impl<W: Write> CsvReporter<W> {
    pub fn new(mut writer: W, label: i32, flush_every: usize) -> Result<Self> {
        writeln!(writer, "{}", header())
            .into_diagnostic()
            .wrap_err("Failed to write CSV header")?;

        Ok(Self {
            writer,
            label,
            flush_every,
            rows_written: 0,
        })
    }

    pub fn write_record(&mut self, record: &ProjectRecord) -> Result<()> {
        writeln!(self.writer, "{}", format_row(record, self.label))
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write CSV row for {}", record.folder))?;
        self.rows_written += 1;

        if self.flush_every > 0 && self.rows_written % self.flush_every == 0 {
            debug!("Flushing after {} rows", self.rows_written);
            self.flush()?;
        }

        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush remaining rows and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush CSV output")
    }
}

/// Header line, every column name quoted
pub fn header() -> String {
    CSV_COLUMNS
        .iter()
        .map(|column| quote(column))
        .collect::<Vec<_>>()
        .join(",")
}

/// One data line for a finished project record
pub fn format_row(record: &ProjectRecord, label: i32) -> String {
    let layouts = LayoutSummary::from_record(record);

    format!(
        "{},{},{},{},{},{},{},{},{},{:.1},{},{:.1},{},{:.1},{},{},{},{},{}",
        quote(&record.folder),
        label,
        record.xml_anim_file_count,
        record.xml_color_file_count,
        record.xml_font_file_count,
        record.xml_interpolator_file_count,
        record.xml_drawable_file_count,
        record.xml_transition_file_count,
        layouts.count,
        one_decimal(layouts.avg_max_depth),
        layouts.max_depth,
        one_decimal(layouts.avg_element_count),
        layouts.total_element_count,
        one_decimal(layouts.avg_attribute_count),
        layouts.total_attribute_count,
        record.string_count(),
        record.style_count(),
        record.drawable_density_folder_count,
        record.value_locale_folder_count,
    )
}

/// Round to one decimal place, halves away from zero
fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
