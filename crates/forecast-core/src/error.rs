use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("invalid scenario '{name}': {reason}")]
    InvalidScenario { name: String, reason: String },

    #[error("duplicate scenario name: {0}")]
    DuplicateScenario(String),

    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("scenario '{scenario}' overflows at month {month}: subscriber or revenue figures exceed the supported range")]
    Overflow { scenario: String, month: u32 },

    #[error("scenario file {0} defines no scenarios")]
    EmptyScenarioSet(PathBuf),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
