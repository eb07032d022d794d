// src/domain/local.rs
use crate::constants::{DEFAULT_NOTE_TYPE, DEFAULT_SUBJECT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful submission, kept most-recent-first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub topic: String,
    pub subject: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn now(topic: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            subject: subject.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Last-used form selections
///
/// Stored documents are read by `PreferenceStore`, which fills gaps from its
/// fallback rather than from fixed defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub subject: String,
    #[serde(rename = "noteType")]
    pub note_type: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            note_type: DEFAULT_NOTE_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_preferences_when_serializing_then_uses_camel_case_note_type() {
        let prefs = Preferences {
            subject: "history".to_string(),
            note_type: "quick".to_string(),
        };

        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains(r#""noteType":"quick""#));
        assert!(!json.contains("note_type"));
    }

    #[test]
    fn given_history_entry_when_serializing_then_timestamp_is_rfc3339() {
        let entry = HistoryEntry::now("Calculus", "mathematics");
        let json = serde_json::to_value(&entry).unwrap();
        let ts = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }
}
