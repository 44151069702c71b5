#[derive(Debug, thiserror::Error)]
pub enum CasebookError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid text: {0}")]
    Text(#[from] casebook_types::TextError),
    #[error("failed to read gradebook file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write gradebook file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize gradebook: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize gradebook: {0}")]
    Deserialization(String),
}

pub type CasebookResult<T> = std::result::Result<T, CasebookError>;
