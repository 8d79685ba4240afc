use crate::discovery::WalkOptions;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one subdirectory per decompiled project
    pub input: Option<PathBuf>,

    /// CSV file to write (overwritten if it exists)
    pub output: Option<PathBuf>,

    /// Class label written to every row (e.g. 1 = malicious, 0 = benign)
    pub label: i32,

    /// Stop after this many projects
    pub max_projects: Option<usize>,

    /// Flush the CSV after this many rows (0 = only at the end)
    pub flush_every: usize,

    /// Extension of resource files to classify
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            label: 1,
            max_projects: None,
            flush_every: 10,
            extension: "xml".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(dir: &Path) -> Result<Self> {
        let default_names = [
            ".droidres.yml",
            ".droidres.yaml",
            ".droidres.toml",
            "droidres.yml",
            "droidres.yaml",
            "droidres.toml",
        ];

        for name in &default_names {
            let path = dir.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn input_path(&self) -> Result<&Path> {
        self.input
            .as_deref()
            .ok_or_else(|| miette::miette!("No input directory given (pass INPUT or set `input` in the config file)"))
    }

    pub fn output_path(&self) -> Result<&Path> {
        self.output
            .as_deref()
            .ok_or_else(|| miette::miette!("No output file given (pass OUTPUT or set `output` in the config file)"))
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            extension: self.extension.clone(),
            max_projects: self.max_projects,
        }
    }
}
