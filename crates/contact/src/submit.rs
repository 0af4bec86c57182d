//! Single-flight submission client.

use serde::Deserialize;

use crate::config::ContactConfig;
use crate::payload::{ContactPayload, FieldError};
use crate::session::SessionStore;

/// Session marker set after a successful submission.
pub const ALREADY_SUBMITTED_KEY: &str = "sundar-clinic-already-submitted-contact-form";

/// Message discriminator the endpoint returns on success. The typo is in
/// the deployed API; match it exactly.
const SUCCESS_MESSAGE: &str = "contact/form-submitted-succeessfully";

/// Message discriminator for rate limiting.
const RATE_LIMIT_MESSAGE: &str = "contact/too-many-requests";

/// Outcome of one submission attempt, reduced for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server acknowledged; session marker written.
    Success,
    /// This session already submitted the form; no request was made.
    AlreadySubmitted,
    /// Another submission is in flight; no request was made.
    InFlight,
    /// Local validation failed; no request was made.
    Invalid(Vec<FieldError>),
    /// The endpoint signalled rate limiting; the user must wait.
    RateLimited,
    /// Transport error or unrecognized response; the form is left intact
    /// for retry.
    Failed,
}

impl SubmitOutcome {
    /// User-facing notification text. Rate limiting gets distinct wording
    /// from the generic failure.
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Success => {
                "Contact Form Submitted Successfully! We'll get back to you soon."
            }
            SubmitOutcome::AlreadySubmitted => {
                "Your message was already sent during this session."
            }
            SubmitOutcome::InFlight => "Submission already in progress.",
            SubmitOutcome::Invalid(_) => "Please fix the highlighted fields.",
            SubmitOutcome::RateLimited => "Too many requests, try again later.",
            SubmitOutcome::Failed => "Unable to submit form at the moment, try again later.",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ContactResponse {
    #[serde(default)]
    message: String,
}

/// One contact form instance.
///
/// `submit` is serialized per instance: the `submitting` flag is set for the
/// duration of one in-flight request, which is what disables the submit
/// control and all fields in the UI.
pub struct ContactForm<S: SessionStore> {
    client: reqwest::Client,
    config: ContactConfig,
    session: S,
    submitting: bool,
    already_submitted: bool,
}

impl<S: SessionStore> ContactForm<S> {
    /// Mount the form. Reads the session dedup marker once, so a session
    /// that already submitted shows the success view instead of the form.
    pub fn new(config: ContactConfig, session: S) -> Self {
        let already_submitted = session.get(ALREADY_SUBMITTED_KEY).as_deref() == Some("true");
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("HTTP client must build");
        Self {
            client,
            config,
            session,
            submitting: false,
            already_submitted,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn already_submitted(&self) -> bool {
        self.already_submitted
    }

    /// Validate, submit once, and reduce the response.
    pub async fn submit(&mut self, payload: &ContactPayload) -> SubmitOutcome {
        if self.already_submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        if self.submitting {
            return SubmitOutcome::InFlight;
        }
        if let Err(errors) = payload.validate() {
            return SubmitOutcome::Invalid(errors);
        }

        self.submitting = true;
        // The guard clears the flag even if the caller drops this future
        // mid-flight, so a cancelled request cannot wedge the latch.
        let reset = SubmittingGuard(&mut self.submitting);
        let outcome = send(&self.client, &self.config.endpoint, payload).await;
        drop(reset);

        if outcome == SubmitOutcome::Success {
            self.already_submitted = true;
            self.session.set(ALREADY_SUBMITTED_KEY, "true");
        }
        outcome
    }
}

struct SubmittingGuard<'a>(&'a mut bool);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

async fn send(client: &reqwest::Client, endpoint: &str, payload: &ContactPayload) -> SubmitOutcome {
    let response = match client.post(endpoint).json(payload).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(%err, "contact submission transport error");
            return SubmitOutcome::Failed;
        }
    };

    let status = response.status();
    let body: ContactResponse = response.json().await.unwrap_or_default();

    if status.is_success() && body.message == SUCCESS_MESSAGE {
        SubmitOutcome::Success
    } else if body.message == RATE_LIMIT_MESSAGE {
        SubmitOutcome::RateLimited
    } else {
        tracing::warn!(status = %status, message = %body.message, "contact submission failed");
        SubmitOutcome::Failed
    }
}
