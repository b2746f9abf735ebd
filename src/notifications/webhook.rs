//! Webhook implementations of [`SearchApiNotifier`].
//!
//! One HTTP POST per (event, destination) pair, each attempt independent:
//! a destination with a broken URI or an unreachable endpoint is logged
//! and skipped without affecting delivery to the rest. Nothing here
//! returns an error to the consumer.

use async_trait::async_trait;
use futures::future::join_all;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::contracts::{PersonFound, PersonSearchEvent, ProviderSearchEventStatus};

use super::registry::{WebhookDestination, WebhookRegistry};
use super::url::try_create_uri;
use super::SearchApiNotifier;

/// Notifies webhook destinations of lifecycle status events.
///
/// Multi-kind: the four lifecycle kinds share the
/// [`ProviderSearchEventStatus`] payload and are told apart by the event
/// name, which also becomes a path segment of the target URL
/// (`{base}/{eventName}/{searchRequestId}`).
#[derive(Debug, Clone)]
pub struct WebhookSearchEventNotifier {
    client: reqwest::Client,
    registry: WebhookRegistry,
}

impl WebhookSearchEventNotifier {
    pub fn new(client: reqwest::Client, registry: WebhookRegistry) -> Self {
        Self { client, registry }
    }
}

#[async_trait]
impl SearchApiNotifier<ProviderSearchEventStatus> for WebhookSearchEventNotifier {
    async fn notify_event(
        &self,
        search_request_id: Uuid,
        payload: &ProviderSearchEventStatus,
        event_name: Option<&str>,
        cancel: &CancellationToken,
    ) {
        let Some(event_name) = event_name else {
            warn!(
                search_request_id = %search_request_id,
                "status notification dispatched without an event name; nothing to match against"
            );
            return;
        };

        let request_id = search_request_id.to_string();
        dispatch(
            &self.client,
            &self.registry,
            event_name,
            &[event_name, request_id.as_str()],
            payload,
            cancel,
        )
        .await;
    }
}

/// Notifies webhook destinations that a person was found.
///
/// Single-kind: the payload has one fixed kind name, so destinations are
/// matched against `PersonFound` and the target URL carries only the
/// search request id (`{base}/{searchRequestId}`).
#[derive(Debug, Clone)]
pub struct WebhookPersonFoundNotifier {
    client: reqwest::Client,
    registry: WebhookRegistry,
}

impl WebhookPersonFoundNotifier {
    pub fn new(client: reqwest::Client, registry: WebhookRegistry) -> Self {
        Self { client, registry }
    }
}

#[async_trait]
impl SearchApiNotifier<PersonFound> for WebhookPersonFoundNotifier {
    async fn notify_event(
        &self,
        search_request_id: Uuid,
        payload: &PersonFound,
        _event_name: Option<&str>,
        cancel: &CancellationToken,
    ) {
        let request_id = search_request_id.to_string();
        dispatch(
            &self.client,
            &self.registry,
            PersonFound::EVENT_NAME,
            &[request_id.as_str()],
            payload,
            cancel,
        )
        .await;
    }
}

/// Fan a serialized payload out to every destination matching `event_name`.
///
/// Attempts start in registry iteration order and complete in any order.
async fn dispatch<T>(
    client: &reqwest::Client,
    registry: &WebhookRegistry,
    event_name: &str,
    segments: &[&str],
    payload: &T,
    cancel: &CancellationToken,
) where
    T: Serialize + Send + Sync,
{
    let body = match serde_json::to_vec(payload) {
        Ok(body) => body,
        Err(error) => {
            error!(event = event_name, %error, "failed to serialize notification payload");
            return;
        }
    };

    let attempts: Vec<_> = registry
        .iter()
        .filter_map(|destination| {
            if !destination.has_filter() {
                warn!(
                    destination = %destination.name,
                    event = event_name,
                    "webhook destination has no event name filter set; skipping"
                );
                return None;
            }
            if !destination.accepts(event_name) {
                return None;
            }
            Some(deliver(
                client,
                destination,
                event_name,
                segments,
                body.clone(),
                cancel,
            ))
        })
        .collect();

    join_all(attempts).await;
}

/// One delivery attempt. Absorbs every failure; logs the outcome.
async fn deliver(
    client: &reqwest::Client,
    destination: &WebhookDestination,
    event_name: &str,
    segments: &[&str],
    body: Vec<u8>,
    cancel: &CancellationToken,
) {
    debug!(
        destination = %destination.name,
        event = event_name,
        "attempting webhook notification"
    );

    let endpoint = match try_create_uri(&destination.uri, segments) {
        Ok(endpoint) => endpoint,
        Err(error) => {
            warn!(
                destination = %destination.name,
                event = event_name,
                %error,
                "webhook uri is not established or is not an absolute uri; set the destination uri in configuration"
            );
            return;
        }
    };

    let request = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .body(body);

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(
                destination = %destination.name,
                event = event_name,
                "webhook notification cancelled"
            );
            return;
        }
        result = request.send() => result,
    };

    match result {
        Ok(response) if response.status().is_success() => {
            info!(
                destination = %destination.name,
                event = event_name,
                status = response.status().as_u16(),
                "webhook notification delivered"
            );
        }
        Ok(response) => {
            error!(
                destination = %destination.name,
                event = event_name,
                status = response.status().as_u16(),
                "webhook notification returned a non-success status"
            );
        }
        Err(error) => {
            error!(
                destination = %destination.name,
                event = event_name,
                %error,
                "webhook notification failed"
            );
        }
    }
}
