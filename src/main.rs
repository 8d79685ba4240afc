use clap::Parser;
use colored::Colorize;
use droidres::{Config, RunSummary};
use miette::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// droidres - UI-complexity metrics for decompiled Android apps
#[derive(Parser, Debug)]
#[command(name = "droidres")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing one subdirectory per decompiled project
    input: Option<PathBuf>,

    /// CSV file to write (overwritten if it exists)
    output: Option<PathBuf>,

    /// Class label written to every row (e.g. 1 = malicious, 0 = benign)
    #[arg(short, long, allow_negative_numbers = true)]
    label: Option<i32>,

    /// Stop after this many project directories
    #[arg(long, value_name = "N")]
    max_projects: Option<usize>,

    /// Flush the CSV after every N rows (0 = only at the end)
    #[arg(long, value_name = "N")]
    flush_every: Option<usize>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("Android Resource Parser and Analyzer");

    let config = load_config(&cli)?;
    let summary = droidres::run(&config)?;

    if !cli.quiet {
        print_summary(&summary);
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(Path::new("."))?
    };

    // Override with CLI arguments
    if let Some(input) = &cli.input {
        config.input = Some(input.clone());
    }
    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }
    if let Some(label) = cli.label {
        config.label = label;
    }
    if cli.max_projects.is_some() {
        config.max_projects = cli.max_projects;
    }
    if let Some(flush_every) = cli.flush_every {
        config.flush_every = flush_every;
    }

    Ok(config)
}

fn print_summary(summary: &RunSummary) {
    println!(
        "{} {}",
        "Projects analyzed:".bold(),
        summary.projects_analyzed
    );
    println!("{} {}", "Metrics collected:".bold(), summary.rows_written);

    let files = format!(
        "Files classified: {} ({} failed to parse)",
        summary.files_classified, summary.parse_failures
    );
    if summary.parse_failures > 0 {
        println!("{}", files.yellow());
    } else {
        println!("{}", files.dimmed());
    }
}
