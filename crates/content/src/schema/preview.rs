//! Preview rules: project a document instance onto a `{title, subtitle}`
//! pair for editorial listings. Preview rendering must never throw, so
//! absent paths and non-scalar leaves degrade to an empty string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::LocaleRegistry;

/// Where a preview slot gets its value from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreviewSource {
    /// A fixed string, e.g. the singleton title "Maintenance Mode".
    Literal(String),
    /// A dotted field path into the document, e.g. `question.en`.
    Field(String),
}

/// A `{title, subtitle}` projection rule attached to a content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRule {
    pub title: PreviewSource,
    pub subtitle: PreviewSource,
}

/// The projected listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPreview {
    pub title: String,
    pub subtitle: String,
}

impl PreviewRule {
    pub fn evaluate(&self, doc: &Value) -> DocumentPreview {
        DocumentPreview {
            title: resolve(&self.title, doc),
            subtitle: resolve(&self.subtitle, doc),
        }
    }
}

/// Path into a localized field, selecting the base-locale slot.
pub fn base_locale_path(registry: &LocaleRegistry, field: &str) -> PreviewSource {
    PreviewSource::Field(format!("{field}.{}", registry.base().id))
}

fn resolve(source: &PreviewSource, doc: &Value) -> String {
    match source {
        PreviewSource::Literal(text) => text.clone(),
        PreviewSource::Field(path) => {
            let mut current = doc;
            for segment in path.split('.') {
                match current.get(segment) {
                    Some(next) => current = next,
                    None => return String::new(),
                }
            }
            match current {
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                _ => String::new(),
            }
        }
    }
}
