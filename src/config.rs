use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// How the `calclex` tool prints token sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Glyph text, one expression per line
    #[default]
    Text,
    /// One JSON array per expression
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub show_spans: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_filter: default_log_filter(),
            show_spans: false,
        }
    }
}

impl CliConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

impl std::str::FromStr for CliConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}
