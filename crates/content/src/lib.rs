//! Localized content schema for the clinic site.
//!
//! Schemas are built once at startup from a [`locale::LocaleRegistry`] and a
//! [`schema::ContentTypeRegistry`], then consumed read-only. Document
//! instances come back from the content store partially filled, so every
//! accessor on [`document::ContentDocument`] returns an `Option`.

pub mod document;
pub mod field;
pub mod locale;
pub mod maintenance;
pub mod schema;

pub use document::ContentDocument;
pub use locale::{Locale, LocaleRegistry};
pub use maintenance::{MaintenanceGate, MaintenanceState};
pub use schema::{ContentType, ContentTypeRegistry};
