use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A document instance returned by the content store.
///
/// Documents may be partially filled: required-field violations from
/// point-in-time authoring are possible, so every accessor returns an
/// `Option` rather than assuming the schema was honored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(
        rename = "_createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    /// Remaining document fields, schema-shaped but untrusted.
    #[serde(flatten)]
    pub content: serde_json::Map<String, Value>,
}

impl ContentDocument {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.content.get(name)
    }

    pub fn string_field(&self, name: &str) -> Option<&str> {
        self.field(name)?.as_str()
    }

    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.field(name)?.as_bool()
    }

    pub fn datetime_field(&self, name: &str) -> Option<DateTime<Utc>> {
        let raw = self.string_field(name)?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Read one locale slot of a localized field.
    pub fn localized_string(&self, name: &str, locale_id: &str) -> Option<&str> {
        self.field(name)?.get(locale_id)?.as_str()
    }
}
