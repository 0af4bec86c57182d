//! Integration tests for the contact submission flow, against a mocked
//! contact endpoint.

use std::sync::Arc;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clinic_contact::{
    ContactConfig, ContactForm, ContactPayload, MemorySessionStore, SessionStore, SubmitOutcome,
    ALREADY_SUBMITTED_KEY,
};

fn payload() -> ContactPayload {
    ContactPayload {
        full_name: "John Doe".to_string(),
        email: "doe@gmail.com".to_string(),
        phone: Some("8939881708".to_string()),
        subject: "Appointment".to_string(),
        message: "I would like to book a checkup.".to_string(),
    }
}

fn form_for(server: &MockServer, session: Arc<MemorySessionStore>) -> ContactForm<Arc<MemorySessionStore>> {
    let config = ContactConfig::new(&format!("{}/api/contact", server.uri()));
    ContactForm::new(config, session)
}

#[tokio::test]
async fn successful_submission_sets_the_session_marker() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "contact/form-submitted-succeessfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let mut form = form_for(&server, session.clone());

    let outcome = form.submit(&payload()).await;
    assert_eq!(outcome, SubmitOutcome::Success);
    assert!(form.already_submitted());
    assert_eq!(session.get(ALREADY_SUBMITTED_KEY).as_deref(), Some("true"));
}

#[tokio::test]
async fn remounting_in_the_same_session_shows_success_without_resubmitting() {
    let server = MockServer::start().await;
    // No request at all is expected from the second mount.
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    session.set(ALREADY_SUBMITTED_KEY, "true");

    let mut form = form_for(&server, session);
    assert!(form.already_submitted());
    assert_eq!(form.submit(&payload()).await, SubmitOutcome::AlreadySubmitted);
}

#[tokio::test]
async fn rate_limit_discriminator_maps_to_its_own_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "message": "contact/too-many-requests"
        })))
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let mut form = form_for(&server, session.clone());

    let outcome = form.submit(&payload()).await;
    assert_eq!(outcome, SubmitOutcome::RateLimited);
    assert_ne!(outcome.notice(), SubmitOutcome::Failed.notice());
    // Failure leaves the form usable and the marker unset.
    assert!(!form.already_submitted());
    assert_eq!(session.get(ALREADY_SUBMITTED_KEY), None);
}

#[tokio::test]
async fn unrecognized_response_is_a_generic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let mut form = form_for(&server, session);

    assert_eq!(form.submit(&payload()).await, SubmitOutcome::Failed);
    assert!(!form.already_submitted());
}

#[tokio::test]
async fn success_discriminator_with_error_status_is_not_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "contact/form-submitted-succeessfully"
        })))
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let mut form = form_for(&server, session);

    assert_eq!(form.submit(&payload()).await, SubmitOutcome::Failed);
}

#[tokio::test]
async fn invalid_phone_blocks_submission_with_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let mut form = form_for(&server, session);

    let bad = ContactPayload {
        phone: Some("12345".to_string()),
        ..payload()
    };
    let outcome = form.submit(&bad).await;
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected a validation outcome, got {outcome:?}");
    };
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn dropped_in_flight_submission_releases_the_single_flight_latch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_secs(30))
                .set_body_json(serde_json::json!({
                    "message": "contact/form-submitted-succeessfully"
                })),
        )
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let mut form = form_for(&server, session);

    // The host gives up before the slow endpoint answers and drops the
    // submit future.
    let timed_out =
        tokio::time::timeout(std::time::Duration::from_millis(100), form.submit(&payload())).await;
    assert!(timed_out.is_err());

    assert!(!form.is_submitting());
    assert!(!form.already_submitted());
}

#[tokio::test]
async fn payload_is_posted_as_camel_case_json() {
    let server = MockServer::start().await;
    let expected = serde_json::json!({
        "fullName": "John Doe",
        "email": "doe@gmail.com",
        "phone": "8939881708",
        "subject": "Appointment",
        "message": "I would like to book a checkup."
    });
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "contact/form-submitted-succeessfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let mut form = form_for(&server, session);

    assert_eq!(form.submit(&payload()).await, SubmitOutcome::Success);
}
