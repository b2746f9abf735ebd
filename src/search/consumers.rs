//! Bus consumers, one per event kind.
//!
//! The four lifecycle kinds run the identical pipeline — deserialize, map,
//! notify with the kind's canonical name — so a single generic consumer is
//! instantiated per event type. `PersonFound` has its own consumer because
//! its payload is forwarded unmapped through the single-kind notifier.
//!
//! Consumers are stateless and reentrant. They never fail a message:
//! payloads that cannot be deserialized are logged and dropped, and the
//! notifier absorbs every delivery failure, so the bus host acknowledges
//! unconditionally.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::contracts::{PersonFound, PersonSearchEvent, ProviderSearchEventStatus};
use crate::messaging::{MessageConsumer, MessageEnvelope};
use crate::notifications::SearchApiNotifier;

use super::mapper::ToEventStatus;

/// Queue naming convention shared with the provider adapters.
fn queue_for(event_name: &str) -> String {
    format!("{event_name}_queue")
}

/// Generic consumer for the lifecycle status kinds.
pub struct SearchEventConsumer<E> {
    notifier: Arc<dyn SearchApiNotifier<ProviderSearchEventStatus>>,
    _event: PhantomData<fn() -> E>,
}

impl<E> SearchEventConsumer<E> {
    pub fn new(notifier: Arc<dyn SearchApiNotifier<ProviderSearchEventStatus>>) -> Self {
        Self {
            notifier,
            _event: PhantomData,
        }
    }
}

#[async_trait]
impl<E> MessageConsumer for SearchEventConsumer<E>
where
    E: PersonSearchEvent + ToEventStatus,
{
    fn queue_name(&self) -> String {
        queue_for(E::EVENT_NAME)
    }

    async fn consume(&self, envelope: MessageEnvelope, cancel: &CancellationToken) {
        let event: E = match serde_json::from_slice(&envelope.payload) {
            Ok(event) => event,
            Err(error) => {
                error!(
                    event = E::EVENT_NAME,
                    %error,
                    "discarding message that could not be deserialized"
                );
                return;
            }
        };

        match envelope.provider_profile.as_ref() {
            Some(profile) => info!(
                event = E::EVENT_NAME,
                provider = %profile.name,
                search_request_id = %event.search_request_id(),
                "received new person search event"
            ),
            None => info!(
                event = E::EVENT_NAME,
                search_request_id = %event.search_request_id(),
                "received new person search event without provider profile"
            ),
        }

        let status = event.to_event_status();
        self.notifier
            .notify_event(event.search_request_id(), &status, Some(E::EVENT_NAME), cancel)
            .await;
    }
}

/// Consumer for terminal person-found matches.
pub struct PersonFoundConsumer {
    notifier: Arc<dyn SearchApiNotifier<PersonFound>>,
}

impl PersonFoundConsumer {
    pub fn new(notifier: Arc<dyn SearchApiNotifier<PersonFound>>) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl MessageConsumer for PersonFoundConsumer {
    fn queue_name(&self) -> String {
        queue_for(PersonFound::EVENT_NAME)
    }

    async fn consume(&self, envelope: MessageEnvelope, cancel: &CancellationToken) {
        let event: PersonFound = match serde_json::from_slice(&envelope.payload) {
            Ok(event) => event,
            Err(error) => {
                error!(
                    event = PersonFound::EVENT_NAME,
                    %error,
                    "discarding message that could not be deserialized"
                );
                return;
            }
        };

        match envelope.provider_profile.as_ref() {
            Some(profile) => info!(
                event = PersonFound::EVENT_NAME,
                provider = %profile.name,
                search_request_id = %event.search_request_id,
                "received new person found event"
            ),
            None => info!(
                event = PersonFound::EVENT_NAME,
                search_request_id = %event.search_request_id,
                "received new person found event without provider profile"
            ),
        }

        self.notifier
            .notify_event(event.search_request_id, &event, None, cancel)
            .await;
    }
}
