//! The clinic site's built-in schema: content type definitions and the desk
//! navigation exclusion list.

use crate::field::{locale_string, locale_text, FieldDef, FieldKind};
use crate::locale::LocaleRegistry;
use crate::maintenance::MESSAGE_FIELD;
use crate::schema::preview::{base_locale_path, PreviewRule, PreviewSource};
use crate::schema::{ContentType, ContentTypeRegistry, SchemaError};

/// Types that get no generic list entry in the desk navigation. The
/// maintenance-mode singleton is edited through its own pinned editor.
pub const DESK_EXCLUDED_TYPES: &[&str] = &["maintenance-mode"];

/// Frequently asked questions, fully localized.
pub fn faq(locales: &LocaleRegistry) -> ContentType {
    ContentType {
        name: "faq".to_string(),
        title: "Frequently Asked Questions".to_string(),
        fields: vec![
            locale_string(locales, "question", "Question")
                .description("The frequently asked question itself."),
            locale_text(locales, "answer", "Answer")
                .description("The detailed answer to the frequently asked question."),
        ],
        preview: PreviewRule {
            title: base_locale_path(locales, "question"),
            subtitle: base_locale_path(locales, "answer"),
        },
    }
}

/// The maintenance-mode singleton.
///
/// An earlier revision of this schema named the message field
/// [`crate::maintenance::LEGACY_MESSAGE_FIELD`] and did not localize it; the
/// gate still reads that name from old documents, but new authoring goes
/// through [`MESSAGE_FIELD`].
pub fn maintenance_mode(locales: &LocaleRegistry) -> ContentType {
    ContentType {
        name: "maintenance-mode".to_string(),
        title: "Maintenance Mode".to_string(),
        fields: vec![
            FieldDef::new("isMaintenanceMode", "Is Maintenance Mode", FieldKind::Boolean)
                .description("Whether the site is in maintenance mode.")
                .required(),
            locale_text(locales, MESSAGE_FIELD, "Maintenance Message").description(
                "The message to display to users when the site is in maintenance mode.",
            ),
            FieldDef::new(
                "disableMaintenanceModeBy",
                "Disable Maintenance Mode By",
                FieldKind::Datetime,
            )
            .description("The date and time the maintenance mode will be disabled.")
            .required(),
        ],
        preview: PreviewRule {
            title: PreviewSource::Literal("Maintenance Mode".to_string()),
            subtitle: base_locale_path(locales, MESSAGE_FIELD),
        },
    }
}

/// Build the full clinic registry.
pub fn build_registry(locales: &LocaleRegistry) -> Result<ContentTypeRegistry, SchemaError> {
    let mut registry = ContentTypeRegistry::new();
    registry.register(faq(locales))?;
    registry.register(maintenance_mode(locales))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleRegistry;
    use serde_json::json;

    #[test]
    fn registry_holds_faq_and_maintenance_mode() {
        let locales = LocaleRegistry::clinic_default();
        let registry = build_registry(&locales).unwrap();

        assert!(registry.get("faq").is_some());
        assert!(registry.get("maintenance-mode").is_some());
    }

    #[test]
    fn faq_fields_are_localized_per_registered_locale() {
        let locales = LocaleRegistry::clinic_default();
        let faq = faq(&locales);

        let question = faq.field("question").unwrap();
        let expected: Vec<&str> = locales.all().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(question.sub_field_names(), expected);
    }

    #[test]
    fn desk_navigation_excludes_the_singleton() {
        let locales = LocaleRegistry::clinic_default();
        let registry = build_registry(&locales).unwrap();

        let listed = registry.list_excluding(DESK_EXCLUDED_TYPES);
        assert!(listed.iter().all(|t| t.name != "maintenance-mode"));
        assert!(listed.iter().any(|t| t.name == "faq"));
    }

    #[test]
    fn faq_preview_reads_base_locale() {
        let locales = LocaleRegistry::clinic_default();
        let faq = faq(&locales);
        let doc = json!({
            "question": { "en": "Do you take walk-ins?", "ta": "நேரடியாக வரலாமா?" },
            "answer": { "en": "Yes, every day." }
        });

        let preview = faq.preview.evaluate(&doc);
        assert_eq!(preview.title, "Do you take walk-ins?");
        assert_eq!(preview.subtitle, "Yes, every day.");
    }
}
