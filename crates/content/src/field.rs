//! Field type library.
//!
//! Base field primitives plus the localization wrapper that expands a base
//! field into one sub-field per registered locale, the way the studio's
//! reusable `localeString`/`localeText`/`localeBlockContent` types do.

use serde::{Deserialize, Serialize};

use crate::locale::LocaleRegistry;

/// Closed set of field primitives the schema is composed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Short single-line text.
    String,
    /// Long multi-line text.
    Text,
    Boolean,
    Datetime,
    /// Portable-text block array.
    BlockContent,
    /// Object with named sub-fields. Localized wrappers expand to this.
    Object(Vec<FieldDef>),
}

/// Validation rules enforced at authoring time. Render-time code must still
/// tolerate violations from point-in-time authoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// A named field within a content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: FieldKind,
    #[serde(default)]
    pub validation: FieldValidation,
}

impl FieldDef {
    pub fn new(name: &str, title: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            description: None,
            kind,
            validation: FieldValidation::default(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.validation.max_length = Some(max_length);
        self
    }

    /// Sub-field names, for `Object` fields.
    pub fn sub_field_names(&self) -> Vec<&str> {
        match &self.kind {
            FieldKind::Object(fields) => fields.iter().map(|f| f.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Expand a base field into one sub-field per registered locale, keyed by
/// locale id.
///
/// Each sub-field inherits the base validation independently, so a required
/// localized field requires a value in every locale, not just the base.
/// The sub-field key set equals the registry's locale-id set at build time;
/// adding a locale means rebuilding every localized field.
pub fn localize(registry: &LocaleRegistry, base: FieldDef) -> FieldDef {
    let sub_fields = registry
        .all()
        .iter()
        .map(|locale| FieldDef {
            name: locale.id.clone(),
            title: locale.title.clone(),
            description: None,
            kind: base.kind.clone(),
            validation: base.validation.clone(),
        })
        .collect();

    FieldDef {
        name: base.name,
        title: base.title,
        description: base.description,
        kind: FieldKind::Object(sub_fields),
        validation: FieldValidation::default(),
    }
}

/// Localized short text, one slot per locale.
pub fn locale_string(registry: &LocaleRegistry, name: &str, title: &str) -> FieldDef {
    localize(registry, FieldDef::new(name, title, FieldKind::String).required())
}

/// Localized long text, one slot per locale.
pub fn locale_text(registry: &LocaleRegistry, name: &str, title: &str) -> FieldDef {
    localize(registry, FieldDef::new(name, title, FieldKind::Text).required())
}

/// Localized portable-text content, one slot per locale.
pub fn locale_block_content(registry: &LocaleRegistry, name: &str, title: &str) -> FieldDef {
    localize(
        registry,
        FieldDef::new(name, title, FieldKind::BlockContent).required(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::new(vec![
            Locale::base("en", "English"),
            Locale::new("ta", "Tamil"),
        ])
        .unwrap()
    }

    #[test]
    fn localize_produces_one_sub_field_per_locale() {
        let registry = registry();
        let field = localize(
            &registry,
            FieldDef::new("question", "Question", FieldKind::String).required(),
        );

        let names = field.sub_field_names();
        let locale_ids: Vec<&str> = registry.all().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(names, locale_ids);
    }

    #[test]
    fn sub_fields_inherit_validation_independently() {
        let registry = registry();
        let field = localize(
            &registry,
            FieldDef::new("question", "Question", FieldKind::String)
                .required()
                .max_length(120),
        );

        let FieldKind::Object(sub_fields) = &field.kind else {
            panic!("localized field must be an object");
        };
        for sub in sub_fields {
            assert!(sub.validation.required);
            assert_eq!(sub.validation.max_length, Some(120));
            assert_eq!(sub.kind, FieldKind::String);
        }
        // The wrapper itself carries no validation; each locale slot does.
        assert!(!field.validation.required);
    }

    #[test]
    fn locale_text_wraps_the_text_primitive() {
        let field = locale_text(&registry(), "answer", "Answer");
        let FieldKind::Object(sub_fields) = &field.kind else {
            panic!("localized field must be an object");
        };
        assert!(sub_fields.iter().all(|f| f.kind == FieldKind::Text));
    }
}
