//! Contact form submission flow.
//!
//! Validates the payload locally, submits it once to the external contact
//! endpoint, and reduces the response to a small set of UI outcomes. A
//! session-scoped marker dedupes repeat submissions within one browsing
//! session (a UX nicety, not a security control).

pub mod config;
pub mod payload;
pub mod session;
pub mod submit;

pub use config::ContactConfig;
pub use payload::{ContactField, ContactPayload, FieldError};
pub use session::{MemorySessionStore, SessionStore};
pub use submit::{ContactForm, SubmitOutcome, ALREADY_SUBMITTED_KEY};
