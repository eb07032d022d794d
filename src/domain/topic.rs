// src/domain/topic.rs
use crate::constants::MIN_TOPIC_CHARS;
use crate::domain::DomainError;
use std::fmt;

/// A trimmed topic that passed client-side validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        if trimmed.chars().count() < MIN_TOPIC_CHARS {
            return Err(DomainError::TopicTooShort {
                min: MIN_TOPIC_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
