//! Maintenance-mode gate.
//!
//! Evaluates the `maintenance-mode` singleton on each render to decide
//! whether the site shows a maintenance interstitial. The disable timestamp
//! acts as a dead-man's switch: even if an editor forgets to flip the flag
//! back, maintenance mode self-expires once the timestamp passes.

use chrono::{DateTime, Utc};

use crate::document::ContentDocument;
use crate::locale::LocaleRegistry;

/// Document id of the maintenance-mode singleton.
pub const MAINTENANCE_DOCUMENT_ID: &str = "maintenance-mode";

/// Canonical message field name.
pub const MESSAGE_FIELD: &str = "maintenanceMessage";

/// Field name written by the earlier schema revision. Read-only alias; new
/// documents use [`MESSAGE_FIELD`].
pub const LEGACY_MESSAGE_FIELD: &str = "message";

/// Gate decision for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaintenanceState {
    /// Show the maintenance interstitial with this message.
    Active { message: String },
    /// Show the site.
    Inactive,
}

impl MaintenanceState {
    pub fn is_active(&self) -> bool {
        matches!(self, MaintenanceState::Active { .. })
    }
}

/// Evaluates the maintenance singleton against the current time.
#[derive(Debug, Clone, Copy)]
pub struct MaintenanceGate<'a> {
    locales: &'a LocaleRegistry,
}

impl<'a> MaintenanceGate<'a> {
    pub fn new(locales: &'a LocaleRegistry) -> Self {
        Self { locales }
    }

    /// `Active` iff the flag is set and `now` is before the disable
    /// timestamp. Everything else fails open: a missing document, flag, or
    /// timestamp must never itself cause an outage.
    pub fn evaluate(
        &self,
        doc: Option<&ContentDocument>,
        now: DateTime<Utc>,
        request_locale: Option<&str>,
    ) -> MaintenanceState {
        let Some(doc) = doc else {
            return MaintenanceState::Inactive;
        };
        if doc.bool_field("isMaintenanceMode") != Some(true) {
            return MaintenanceState::Inactive;
        }
        let Some(disable_by) = doc.datetime_field("disableMaintenanceModeBy") else {
            tracing::warn!(
                doc_id = %doc.id,
                "maintenance flag set without a disable timestamp, treating as inactive"
            );
            return MaintenanceState::Inactive;
        };
        if now >= disable_by {
            tracing::debug!(
                doc_id = %doc.id,
                %disable_by,
                "maintenance flag still set but past its disable timestamp"
            );
            return MaintenanceState::Inactive;
        }

        MaintenanceState::Active {
            message: self.resolve_message(doc, request_locale),
        }
    }

    /// Resolve the maintenance message for the request locale, falling back
    /// to the base locale, the legacy field name, and finally an empty
    /// string. An unset message degrades the interstitial, never the gate.
    fn resolve_message(&self, doc: &ContentDocument, request_locale: Option<&str>) -> String {
        for field in [MESSAGE_FIELD, LEGACY_MESSAGE_FIELD] {
            let Some(value) = doc.field(field) else {
                continue;
            };
            // Legacy documents store a plain string instead of locale slots.
            if let Some(text) = value.as_str() {
                return text.to_string();
            }
            if let Some(locale) = request_locale.filter(|l| self.locales.contains(l)) {
                if let Some(text) = doc.localized_string(field, locale) {
                    return text.to_string();
                }
            }
            if let Some(text) = doc.localized_string(field, &self.locales.base().id) {
                return text.to_string();
            }
        }
        String::new()
    }
}
