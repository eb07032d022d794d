// src/domain/notes.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::trace;

/// Body of `POST /api/generate-notes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRequest {
    pub topic: String,
    pub subject: String,
    pub note_type: String,
}

/// Envelope returned by the generate endpoint, success or failure alike.
///
/// Only `notes` and `error` drive behaviour, the remaining fields are echoed
/// back by the server and kept for `--format json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notes {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub note_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, deserialize_with = "lenient_sections")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "lenient_text")]
    pub reading_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub sections: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Text(String),
    Items(Vec<String>),
    Empty,
}

/// Catalog entry from `GET /api/subjects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
}

impl Section {
    /// Build a section from an arbitrary JSON value.
    ///
    /// Returns `None` for anything that is not an object with a non-empty
    /// string `title`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let title = object.get("title")?.as_str()?;
        if title.is_empty() {
            return None;
        }

        let section_type = object
            .get("type")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Some(Self {
            title: title.to_string(),
            section_type,
            content: SectionContent::from_value(object.get("content")),
        })
    }

    /// Type tag used for icon lookup, `general` when absent
    pub fn kind(&self) -> &str {
        self.section_type.as_deref().unwrap_or("general")
    }
}

impl SectionContent {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(text)) => Self::Text(text.clone()),
            Some(Value::Array(items)) => {
                // a list with non-string members is not renderable as a list
                let strings: Option<Vec<String>> = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect();
                strings.map_or(Self::Empty, Self::Items)
            }
            _ => Self::Empty,
        }
    }
}

impl Notes {
    pub fn title_or_default(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Study Notes")
    }

    pub fn subject_or_default(&self) -> &str {
        self.subject
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("General")
    }

    /// Display strings for the metadata line, in page order
    pub fn metadata_labels(&self) -> Vec<String> {
        let subject = self.subject_or_default().to_string();
        match &self.metadata {
            Some(meta) => vec![
                subject,
                meta.reading_time
                    .clone()
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| "5 minutes".to_string()),
                meta.difficulty
                    .clone()
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| "Intermediate".to_string()),
                format!("{} sections", meta.sections.filter(|n| *n > 0).unwrap_or(5)),
            ],
            None => vec![subject, "5 minutes read".to_string()],
        }
    }
}

fn lenient_sections<'de, D>(deserializer: D) -> Result<Vec<Section>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        trace!("sections is not an array, ignoring");
        return Ok(Vec::new());
    };

    Ok(items.iter().filter_map(Section::from_value).collect())
}

/// Any scalar as its display string; null, arrays and objects as `None`
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            trace!(?other, "ignoring non-scalar display field");
            None
        }
    })
}

/// A non-negative whole number, given as a number or a numeric string
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count.and_then(|n| u32::try_from(n).ok()))
}

/// A nested object, `None` when the payload holds anything else there
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        trace!("expected an object, ignoring");
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(serde::de::Error::custom)
}
