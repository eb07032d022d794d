// src/application/note_generator.rs
use crate::application::{HistoryLog, KeyValueStore};
use crate::domain::{DomainError, GenerateResponse, HistoryEntry, NoteRequest, Subject, Topic};
use tracing::{debug, info, instrument, warn};

/// Remote note generator API
#[allow(async_fn_in_trait)]
pub trait NoteService {
    async fn generate_notes(&self, request: &NoteRequest) -> Result<GenerateResponse, DomainError>;

    async fn list_subjects(&self) -> Result<Vec<Subject>, DomainError>;

    async fn list_topics(&self, subject: &str) -> Result<Vec<String>, DomainError>;
}

impl<S: NoteService + ?Sized> NoteService for &S {
    async fn generate_notes(&self, request: &NoteRequest) -> Result<GenerateResponse, DomainError> {
        (**self).generate_notes(request).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, DomainError> {
        (**self).list_subjects().await
    }

    async fn list_topics(&self, subject: &str) -> Result<Vec<String>, DomainError> {
        (**self).list_topics(subject).await
    }
}

pub struct NoteGenerator<S: NoteService, K: KeyValueStore> {
    service: S,
    history: HistoryLog<K>,
}

impl<S: NoteService, K: KeyValueStore> NoteGenerator<S, K> {
    pub fn new(service: S, store: K) -> Self {
        Self {
            service,
            history: HistoryLog::new(store),
        }
    }

    /// Validate the topic, request notes and remember the submission.
    ///
    /// Takes `&mut self`, so one generator never has two requests in flight.
    /// History is best-effort: a storage failure is logged, not returned.
    #[instrument(level = "debug", skip(self))]
    pub async fn generate(
        &mut self,
        topic: &str,
        subject: &str,
        note_type: &str,
    ) -> Result<GenerateResponse, DomainError> {
        let topic = Topic::parse(topic)?;

        let request = NoteRequest {
            topic: topic.to_string(),
            subject: subject.to_string(),
            note_type: note_type.to_string(),
        };
        debug!(?request, "Sending request");

        let response = self.service.generate_notes(&request).await?;
        debug!(has_notes = response.notes.is_some(), "Response received");
        info!("Notes generated successfully");

        if let Err(e) = self
            .history
            .record(HistoryEntry::now(topic.as_str(), subject))
        {
            warn!(error = %e, "Failed to save to history");
        }

        Ok(response)
    }

    pub fn history(&self) -> &HistoryLog<K> {
        &self.history
    }
}
