// src/domain/mod.rs
pub mod error;
pub mod local;
pub mod notes;
pub mod topic;

pub use error::DomainError;
pub use local::{HistoryEntry, Preferences};
pub use notes::{GenerateResponse, Metadata, NoteRequest, Notes, Section, SectionContent, Subject};
pub use topic::Topic;
