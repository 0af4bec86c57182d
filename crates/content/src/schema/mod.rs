//! Content type registry.

pub mod clinic;
pub mod preview;

use serde::{Deserialize, Serialize};

use crate::field::FieldDef;
use self::preview::PreviewRule;

/// A named document schema composed from field library primitives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentType {
    pub name: String,
    pub title: String,
    pub fields: Vec<FieldDef>,
    pub preview: PreviewRule,
}

impl ContentType {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Schema configuration error. Fatal at build time, never swallowed.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate content type name: {0}")]
    DuplicateType(String),
}

/// Registered content types, built once at startup.
///
/// Immutable after construction; consumers receive it by reference. The
/// exclusion list in [`list_excluding`](Self::list_excluding) only shapes
/// editorial navigation and has no bearing on data integrity.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeRegistry {
    types: Vec<ContentType>,
}

impl ContentTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, content_type: ContentType) -> Result<(), SchemaError> {
        if self.get(&content_type.name).is_some() {
            return Err(SchemaError::DuplicateType(content_type.name));
        }
        self.types.push(content_type);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ContentType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// All registered types, in registration order.
    pub fn all(&self) -> &[ContentType] {
        &self.types
    }

    /// Registered types minus an exclusion set, for building the desk
    /// navigation (singleton documents get their own editor entry).
    pub fn list_excluding(&self, excluded: &[&str]) -> Vec<&ContentType> {
        self.types
            .iter()
            .filter(|t| !excluded.contains(&t.name.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldDef, FieldKind};
    use super::preview::{PreviewRule, PreviewSource};

    fn content_type(name: &str) -> ContentType {
        ContentType {
            name: name.to_string(),
            title: name.to_string(),
            fields: vec![FieldDef::new("title", "Title", FieldKind::String)],
            preview: PreviewRule {
                title: PreviewSource::Field("title".to_string()),
                subtitle: PreviewSource::Literal(String::new()),
            },
        }
    }

    #[test]
    fn duplicate_type_name_is_a_configuration_error() {
        let mut registry = ContentTypeRegistry::new();
        registry.register(content_type("faq")).unwrap();

        let err = registry.register(content_type("faq")).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType(name) if name == "faq"));
    }

    #[test]
    fn list_excluding_drops_only_named_types() {
        let mut registry = ContentTypeRegistry::new();
        registry.register(content_type("faq")).unwrap();
        registry.register(content_type("maintenance-mode")).unwrap();
        registry.register(content_type("post")).unwrap();

        let listed = registry.list_excluding(&["maintenance-mode"]);
        let names: Vec<&str> = listed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["faq", "post"]);
    }
}
