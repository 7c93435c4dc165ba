use teammates::TeammatesError;
use thiserror::Error;

use crate::roster::ConfigError;

/// Fatal errors; each one ends the run with a non-zero exit.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("directory error: {0}")]
    Directory(#[from] TeammatesError),
}
