// src/infrastructure/http.rs
use crate::application::NoteService;
use crate::constants::GENERIC_API_ERROR;
use crate::domain::{DomainError, GenerateResponse, NoteRequest, Subject};
use anyhow::{Context, Result};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// NoteService backed by the note generator's HTTP API
#[derive(Debug, Clone)]
pub struct HttpNoteService {
    client: Client,
    base_url: Url,
}

impl HttpNoteService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid server URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Server URL cannot be used as a base: {base_url}");
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// `base_url` extended by `segments`, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DomainError::Transport(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(DomainError::Api(error_message(&body)));
        }

        serde_json::from_str(&body).map_err(|e| DomainError::MalformedResponse(e.to_string()))
    }
}

/// Message of an error payload, or the generic failure text
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .filter(|e| !e.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_API_ERROR.to_string())
}

impl NoteService for HttpNoteService {
    #[instrument(level = "debug", skip(self))]
    async fn generate_notes(&self, request: &NoteRequest) -> Result<GenerateResponse, DomainError> {
        let url = self.endpoint(&["api", "generate-notes"])?;
        debug!(%url, "POST");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        Self::read_json(response).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_subjects(&self) -> Result<Vec<Subject>, DomainError> {
        let url = self.endpoint(&["api", "subjects"])?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        Self::read_json(response).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_topics(&self, subject: &str) -> Result<Vec<String>, DomainError> {
        let url = self.endpoint(&["api", "topics", subject])?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base: &str) -> HttpNoteService {
        HttpNoteService::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn given_base_without_trailing_slash_when_building_endpoint_then_appends_segments() {
        let url = service("http://localhost:5000").endpoint(&["api", "subjects"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/subjects");
    }

    #[test]
    fn given_base_with_prefix_when_building_endpoint_then_keeps_prefix() {
        let url = service("http://example.com/notes/")
            .endpoint(&["api", "generate-notes"])
            .unwrap();
        assert_eq!(url.as_str(), "http://example.com/notes/api/generate-notes");
    }

    #[test]
    fn given_subject_with_spaces_when_building_endpoint_then_encodes_it() {
        let url = service("http://localhost:5000")
            .endpoint(&["api", "topics", "computer science/x"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/topics/computer%20science%2Fx"
        );
    }

    #[test]
    fn given_invalid_url_when_creating_then_fails() {
        assert!(HttpNoteService::new("not a url", Duration::from_secs(1)).is_err());
        assert!(HttpNoteService::new("mailto:me@example.com", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn given_error_payload_when_extracting_message_then_uses_it() {
        assert_eq!(error_message(r#"{"error":"Please enter a topic"}"#), "Please enter a topic");
    }

    #[test]
    fn given_payload_without_error_when_extracting_message_then_uses_generic_text() {
        assert_eq!(error_message("<html>502</html>"), GENERIC_API_ERROR);
        assert_eq!(error_message(r#"{"error":""}"#), GENERIC_API_ERROR);
    }
}
