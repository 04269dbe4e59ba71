use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("engine error: {0}")]
    Engine(#[from] engine::EngineError),
    #[error("task error: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("{path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: Box<AppError>,
    },
    #[error("financial year {year} appears in both {first} and {second}")]
    DuplicateYear {
        year: engine::FinancialYear,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

impl AppError {
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        AppError::Document {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
