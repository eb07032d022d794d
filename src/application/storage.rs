// src/application/storage.rs
use crate::domain::DomainError;

/// String key/value persistence for client-side state.
///
/// Values are opaque JSON documents; interpretation belongs to the callers.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;

    fn remove(&mut self, key: &str) -> Result<(), DomainError>;
}
