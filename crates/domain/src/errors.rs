use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Invalid settings profile: {0}")]
    InvalidProfile(String),

    #[error("Page agent unavailable: {0}")]
    AgentUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
