use crate::config::Config;
use crate::discovery::ProjectWalker;
use crate::report::{CsvReporter, RunSummary};
use miette::{IntoDiagnostic, Result};
use tracing::info;

/// Walk the configured input and stream one CSV row per project
pub fn run(config: &Config) -> Result<RunSummary> {
    let input = config.input_path()?;
    let output = config.output_path()?;

    let mut walker = ProjectWalker::new(input, &config.walk_options()).into_diagnostic()?;
    let mut reporter = CsvReporter::create(output, config.label, config.flush_every)?;

    info!("Scanning {} -> {}", input.display(), output.display());

    for record in walker.by_ref() {
        reporter.write_record(&record)?;
    }

    let rows_written = reporter.rows_written();
    reporter.finish()?;

    Ok(RunSummary::new(walker.stats(), rows_written))
}
