// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter a topic to generate notes")]
    EmptyTopic,
    #[error("Topic must be at least {min} characters long")]
    TopicTooShort { min: usize },
    #[error("{0}")]
    Api(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
