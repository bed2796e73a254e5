//! Configuration file support for depgraph-viz.
//!
//! Provides YAML-based configuration through `depgraph-viz.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments.

use anyhow::Context;
use depgraph_viz::application::dto::{LayoutEngine, OutputFormat};
use depgraph_viz::shared::error::DepgraphError;
use depgraph_viz::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "depgraph-viz.config.yml";

/// Suffix of the default output file name, after the package name
const DEFAULT_OUTPUT_SUFFIX: &str = "_dependencies";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub engine: Option<String>,
    pub format: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub graphviz_bin: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn engine(&self) -> Result<Option<LayoutEngine>> {
        self.engine
            .as_deref()
            .map(|engine| {
                engine
                    .parse::<LayoutEngine>()
                    .map_err(|message| anyhow::Error::from(DepgraphError::ConfigError { message }))
            })
            .transpose()
    }

    pub fn format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                format
                    .parse::<OutputFormat>()
                    .map_err(|message| anyhow::Error::from(DepgraphError::ConfigError { message }))
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.engine()?;
    config.format()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective settings after merging CLI arguments over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub engine: LayoutEngine,
    pub format: OutputFormat,
    pub output_path: PathBuf,
    pub graphviz_bin: Option<PathBuf>,
}

impl Settings {
    /// CLI flags win over config values, config values win over defaults.
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let config_engine = config.map(ConfigFile::engine).transpose()?.flatten();
        let config_format = config.map(ConfigFile::format).transpose()?.flatten();

        let output_path = match &args.output {
            Some(output) => output.clone(),
            None => {
                let file_name = format!("{}{}", args.package, DEFAULT_OUTPUT_SUFFIX);
                match config.and_then(|c| c.output_dir.as_ref()) {
                    Some(dir) => dir.join(file_name),
                    None => PathBuf::from(file_name),
                }
            }
        };

        Ok(Self {
            engine: args.engine.or(config_engine).unwrap_or_default(),
            format: args.format.or(config_format).unwrap_or_default(),
            output_path,
            graphviz_bin: args
                .graphviz_bin
                .clone()
                .or_else(|| config.and_then(|c| c.graphviz_bin.clone())),
        })
    }
}
