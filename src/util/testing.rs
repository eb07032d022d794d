// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{KeyValueStore, NoteService};
use crate::domain::{DomainError, GenerateResponse, NoteRequest, Subject};

/// Shared fake of the remote note generator.
///
/// Records every generate request so tests can assert on what would have
/// gone over the wire, including that nothing did.
///
/// # Examples
///
/// ```
/// use notegen::util::testing::MockNoteService;
/// use notegen::domain::GenerateResponse;
///
/// let mock = MockNoteService::builder()
///     .with_response(GenerateResponse::default())
///     .with_subject("science", "Science")
///     .build();
/// assert_eq!(mock.generate_calls(), 0);
/// ```
pub struct MockNoteService {
    outcome: Result<GenerateResponse, DomainError>,
    subjects: Vec<Subject>,
    topics: HashMap<String, Vec<String>>,
    requests: Mutex<Vec<NoteRequest>>,
}

impl MockNoteService {
    pub fn builder() -> MockNoteServiceBuilder {
        MockNoteServiceBuilder::new()
    }

    /// Requests received by `generate_notes`, oldest first
    pub fn requests(&self) -> Vec<NoteRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn generate_calls(&self) -> usize {
        self.requests().len()
    }
}

impl NoteService for MockNoteService {
    async fn generate_notes(&self, request: &NoteRequest) -> Result<GenerateResponse, DomainError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.outcome.clone()
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, DomainError> {
        Ok(self.subjects.clone())
    }

    async fn list_topics(&self, subject: &str) -> Result<Vec<String>, DomainError> {
        Ok(self
            .topics
            .get(subject)
            .cloned()
            .unwrap_or_else(|| vec!["general".to_string()]))
    }
}

/// Builder for MockNoteService
pub struct MockNoteServiceBuilder {
    outcome: Result<GenerateResponse, DomainError>,
    subjects: Vec<Subject>,
    topics: HashMap<String, Vec<String>>,
}

impl MockNoteServiceBuilder {
    pub fn new() -> Self {
        Self {
            outcome: Ok(GenerateResponse::default()),
            subjects: vec![],
            topics: HashMap::new(),
        }
    }

    /// Answer every generate request with `response`
    pub fn with_response(mut self, response: GenerateResponse) -> Self {
        self.outcome = Ok(response);
        self
    }

    /// Fail every generate request with `error`
    pub fn with_error(mut self, error: DomainError) -> Self {
        self.outcome = Err(error);
        self
    }

    pub fn with_subject(mut self, id: &str, name: &str) -> Self {
        self.subjects.push(Subject {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_topics(mut self, subject: &str, topics: &[&str]) -> Self {
        self.topics.insert(
            subject.to_string(),
            topics.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn build(self) -> MockNoteService {
        MockNoteService {
            outcome: self.outcome,
            subjects: self.subjects,
            topics: self.topics,
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MockNoteServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory KeyValueStore, optionally failing every operation
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation returns `DomainError::Storage`
    pub fn failing() -> Self {
        Self {
            values: HashMap::new(),
            failing: true,
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            return Err(DomainError::Storage("storage unavailable".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.check()?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.check()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DomainError> {
        self.check()?;
        self.values.remove(key);
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "rustls", "mio", "wiremock"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
