//! Webhook dispatch behavior against real HTTP endpoints (wiremock).

use std::str::FromStr;

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use search_notify::contracts::{Person, PersonFound, ProviderSearchEventStatus};
use search_notify::notifications::{
    SearchApiNotifier, WebhookDestination, WebhookPersonFoundNotifier, WebhookRegistry,
    WebhookSearchEventNotifier,
};

const REQUEST_ID: &str = "11111111-1111-1111-1111-111111111111";

fn request_id() -> Uuid {
    Uuid::parse_str(REQUEST_ID).unwrap()
}

fn time_stamp() -> DateTime<Utc> {
    DateTime::from_str("2020-01-15T08:30:00Z").unwrap()
}

fn status_payload(event_type: &str) -> ProviderSearchEventStatus {
    ProviderSearchEventStatus {
        search_request_id: request_id(),
        time_stamp: time_stamp(),
        provider_name: "ICBC".to_string(),
        event_type: event_type.to_string(),
        message: String::new(),
    }
}

fn destination(name: &str, uri: String, filter: &str) -> WebhookDestination {
    WebhookDestination {
        name: name.to_string(),
        uri,
        event_name: filter.to_string(),
    }
}

fn status_notifier(destinations: Vec<WebhookDestination>) -> WebhookSearchEventNotifier {
    WebhookSearchEventNotifier::new(reqwest::Client::new(), WebhookRegistry::new(destinations))
}

#[tokio::test]
async fn posts_status_event_to_the_exact_endpoint() {
    let server = MockServer::start().await;
    let payload = status_payload("PersonSearchAccepted");

    Mock::given(method("POST"))
        .and(path(format!("/hooks/PersonSearchAccepted/{REQUEST_ID}")))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = status_notifier(vec![destination(
        "Ops",
        format!("{}/hooks", server.uri()),
        "PersonSearchAccepted",
    )]);

    notifier
        .notify_event(
            request_id(),
            &payload,
            Some("PersonSearchAccepted"),
            &CancellationToken::new(),
        )
        .await;

    server.verify().await;
}

#[tokio::test]
async fn filter_matching_is_case_insensitive_substring() {
    let server = MockServer::start().await;
    let payload = status_payload("PersonSearchRejected");

    Mock::given(method("POST"))
        .and(path(format!("/hooks/PersonSearchRejected/{REQUEST_ID}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = status_notifier(vec![destination(
        "Ops",
        format!("{}/hooks", server.uri()),
        "search",
    )]);

    notifier
        .notify_event(
            request_id(),
            &payload,
            Some("PersonSearchRejected"),
            &CancellationToken::new(),
        )
        .await;

    server.verify().await;
}

#[tokio::test]
async fn non_matching_destinations_receive_nothing() {
    let matching = MockServer::start().await;
    let other = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&matching)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&other)
        .await;

    let notifier = status_notifier(vec![
        destination("Ops", format!("{}/hooks", matching.uri()), "PersonSearch"),
        destination("Found", format!("{}/hooks", other.uri()), "PersonFound"),
    ]);

    notifier
        .notify_event(
            request_id(),
            &status_payload("PersonSearchCompleted"),
            Some("PersonSearchCompleted"),
            &CancellationToken::new(),
        )
        .await;

    matching.verify().await;
    other.verify().await;
}

#[tokio::test]
async fn blank_filter_receives_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = status_notifier(vec![destination(
        "Unfiltered",
        format!("{}/hooks", server.uri()),
        "",
    )]);

    notifier
        .notify_event(
            request_id(),
            &status_payload("PersonSearchAccepted"),
            Some("PersonSearchAccepted"),
            &CancellationToken::new(),
        )
        .await;

    server.verify().await;
}

#[tokio::test]
async fn invalid_destination_uri_does_not_affect_others() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = status_notifier(vec![
        destination("Broken", String::new(), "PersonSearch"),
        destination("Ops", format!("{}/hooks", server.uri()), "PersonSearch"),
    ]);

    notifier
        .notify_event(
            request_id(),
            &status_payload("PersonSearchAccepted"),
            Some("PersonSearchAccepted"),
            &CancellationToken::new(),
        )
        .await;

    server.verify().await;
}

#[tokio::test]
async fn non_success_status_does_not_affect_others() {
    let failing = MockServer::start().await;
    let healthy = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&failing)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&healthy)
        .await;

    let notifier = status_notifier(vec![
        destination("Failing", format!("{}/hooks", failing.uri()), "PersonSearch"),
        destination("Healthy", format!("{}/hooks", healthy.uri()), "PersonSearch"),
    ]);

    notifier
        .notify_event(
            request_id(),
            &status_payload("PersonSearchFailed"),
            Some("PersonSearchFailed"),
            &CancellationToken::new(),
        )
        .await;

    failing.verify().await;
    healthy.verify().await;
}

#[tokio::test]
async fn transport_error_does_not_affect_others() {
    let healthy = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&healthy)
        .await;

    // Port 9 is the discard service; nothing is listening there.
    let notifier = status_notifier(vec![
        destination("Unreachable", "http://127.0.0.1:9/hooks".to_string(), "PersonSearch"),
        destination("Healthy", format!("{}/hooks", healthy.uri()), "PersonSearch"),
    ]);

    notifier
        .notify_event(
            request_id(),
            &status_payload("PersonSearchAccepted"),
            Some("PersonSearchAccepted"),
            &CancellationToken::new(),
        )
        .await;

    healthy.verify().await;
}

#[tokio::test]
async fn cancelled_token_makes_zero_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = status_notifier(vec![destination(
        "Ops",
        format!("{}/hooks", server.uri()),
        "PersonSearch",
    )]);

    let cancel = CancellationToken::new();
    cancel.cancel();

    notifier
        .notify_event(
            request_id(),
            &status_payload("PersonSearchAccepted"),
            Some("PersonSearchAccepted"),
            &cancel,
        )
        .await;

    server.verify().await;
}

#[tokio::test]
async fn missing_event_name_makes_zero_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = status_notifier(vec![destination(
        "Ops",
        format!("{}/hooks", server.uri()),
        "PersonSearch",
    )]);

    notifier
        .notify_event(
            request_id(),
            &status_payload("PersonSearchAccepted"),
            None,
            &CancellationToken::new(),
        )
        .await;

    server.verify().await;
}

#[tokio::test]
async fn person_found_posts_without_event_name_segment() {
    let server = MockServer::start().await;

    let payload = PersonFound {
        search_request_id: request_id(),
        time_stamp: time_stamp(),
        person: Some(Person {
            first_name: Some("firstName".to_string()),
            last_name: Some("lastName".to_string()),
            ..Person::default()
        }),
    };

    Mock::given(method("POST"))
        .and(path(format!("/hooks/{REQUEST_ID}")))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = WebhookPersonFoundNotifier::new(
        reqwest::Client::new(),
        WebhookRegistry::new(vec![destination(
            "Found",
            format!("{}/hooks", server.uri()),
            "PersonFound",
        )]),
    );

    notifier
        .notify_event(request_id(), &payload, None, &CancellationToken::new())
        .await;

    server.verify().await;
}

#[tokio::test]
async fn empty_registry_is_a_no_op() {
    let notifier = status_notifier(Vec::new());

    // Nothing to assert against; completing without panicking is the contract.
    notifier
        .notify_event(
            request_id(),
            &status_payload("PersonSearchAccepted"),
            Some("PersonSearchAccepted"),
            &CancellationToken::new(),
        )
        .await;
}
