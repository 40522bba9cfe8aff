use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Territory not found: {0}")]
    TerritoryNotFound(crate::core::types::TerritoryId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid catalog: {}", .0.join(", "))]
    InvalidCatalog(Vec<String>),

    #[error("Path parse error at {offset}: {message}")]
    PathParse { offset: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
