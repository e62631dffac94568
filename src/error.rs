use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum CalcLexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CalcLexResult<T> = Result<T, CalcLexError>;
