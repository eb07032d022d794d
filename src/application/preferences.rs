// src/application/preferences.rs
use crate::application::KeyValueStore;
use crate::constants::PREFERENCES_KEY;
use crate::domain::{DomainError, Preferences};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Stored document as written by any client; every field may be absent
#[derive(Debug, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    subject: Option<String>,
    #[serde(default, rename = "noteType")]
    note_type: Option<String>,
}

pub struct PreferenceStore<K: KeyValueStore> {
    store: K,
    fallback: Preferences,
}

impl<K: KeyValueStore> PreferenceStore<K> {
    pub fn new(store: K) -> Self {
        Self::with_fallback(store, Preferences::default())
    }

    /// Use `fallback` when nothing readable is stored, e.g. config defaults
    pub fn with_fallback(store: K, fallback: Preferences) -> Self {
        Self { store, fallback }
    }

    /// Saved preferences, field by field; missing, empty or unreadable
    /// values come from the fallback
    pub fn load(&self) -> Preferences {
        let raw = match self.store.get(PREFERENCES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.fallback.clone(),
            Err(e) => {
                debug!(error = %e, "Failed to load preferences");
                return self.fallback.clone();
            }
        };

        let stored = match parse_stored(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                debug!(error = %e, "Failed to parse preferences");
                return self.fallback.clone();
            }
        };

        Preferences {
            subject: non_empty(stored.subject).unwrap_or_else(|| self.fallback.subject.clone()),
            note_type: non_empty(stored.note_type)
                .unwrap_or_else(|| self.fallback.note_type.clone()),
        }
    }

    pub fn save(&mut self, prefs: &Preferences) -> Result<(), DomainError> {
        let raw =
            serde_json::to_string(prefs).map_err(|e| DomainError::Storage(e.to_string()))?;
        self.store.set(PREFERENCES_KEY, &raw)
    }
}

/// Only a JSON object is a preferences document
fn parse_stored(raw: &str) -> Result<StoredPreferences, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("preferences must be a JSON object"));
    }
    serde_json::from_value(value)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
