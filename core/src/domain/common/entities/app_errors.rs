use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Failed to read dataset: {0}")]
    DatasetIo(String),

    #[error("Failed to parse dataset: {0}")]
    DatasetParse(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
