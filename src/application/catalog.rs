// src/application/catalog.rs
use crate::application::NoteService;
use crate::domain::{DomainError, Subject};

pub struct CatalogBrowser<S: NoteService> {
    service: S,
}

impl<S: NoteService> CatalogBrowser<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn subjects(&self) -> Result<Vec<Subject>, DomainError> {
        self.service.list_subjects().await
    }

    /// Known topics of a subject; the server answers `["general"]` for unknown ones
    pub async fn topics(&self, subject: &str) -> Result<Vec<String>, DomainError> {
        self.service.list_topics(subject.trim()).await
    }
}
