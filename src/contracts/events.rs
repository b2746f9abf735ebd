//! Person-search lifecycle events and the payloads notified to webhooks.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::person::Person;

/// A typed lifecycle event consumed from the bus.
///
/// The canonical event name drives both the queue a consumer binds to
/// (`{EVENT_NAME}_queue`) and destination filtering at dispatch time.
pub trait PersonSearchEvent: DeserializeOwned + Send + Sync + 'static {
    /// Canonical event kind name, e.g. `PersonSearchAccepted`.
    const EVENT_NAME: &'static str;

    /// The search request this event belongs to.
    fn search_request_id(&self) -> Uuid;

    /// When the provider recorded the event.
    fn time_stamp(&self) -> DateTime<Utc>;
}

/// Correlation metadata identifying the provider that produced a message.
///
/// Carried as bus-transport header data; absence is normal and only costs
/// log enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderProfile {
    #[serde(default)]
    pub name: String,
}

/// A single failed validation recorded when a provider rejects a search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationResult {
    #[serde(default)]
    pub property_name: String,
    #[serde(default)]
    pub error_message: String,
}

/// A provider accepted a search request for processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonSearchAccepted {
    pub search_request_id: Uuid,
    pub time_stamp: DateTime<Utc>,
    #[serde(default)]
    pub provider_profile: Option<ProviderProfile>,
}

/// A provider finished processing a search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonSearchCompleted {
    pub search_request_id: Uuid,
    pub time_stamp: DateTime<Utc>,
    #[serde(default)]
    pub provider_profile: Option<ProviderProfile>,
    #[serde(default)]
    pub matched_person: Option<Person>,
}

/// A provider rejected a search request, typically for validation reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonSearchRejected {
    pub search_request_id: Uuid,
    pub time_stamp: DateTime<Utc>,
    #[serde(default)]
    pub provider_profile: Option<ProviderProfile>,
    #[serde(default)]
    pub reasons: Vec<ValidationResult>,
}

/// A provider failed while processing a search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonSearchFailed {
    pub search_request_id: Uuid,
    pub time_stamp: DateTime<Utc>,
    #[serde(default)]
    pub provider_profile: Option<ProviderProfile>,
    #[serde(default)]
    pub cause: Option<String>,
}

/// A provider matched a person for a search request.
///
/// This is both a bus message and the notification payload delivered to
/// webhook destinations, unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonFound {
    pub search_request_id: Uuid,
    pub time_stamp: DateTime<Utc>,
    #[serde(default)]
    pub person: Option<Person>,
}

/// The status projection shared by the four lifecycle event kinds.
///
/// Distinguished at dispatch time by the event name passed alongside it,
/// not by payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderSearchEventStatus {
    pub search_request_id: Uuid,
    pub time_stamp: DateTime<Utc>,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub message: String,
}

macro_rules! person_search_event {
    ($event:ty, $name:literal) => {
        impl PersonSearchEvent for $event {
            const EVENT_NAME: &'static str = $name;

            fn search_request_id(&self) -> Uuid {
                self.search_request_id
            }

            fn time_stamp(&self) -> DateTime<Utc> {
                self.time_stamp
            }
        }
    };
}

person_search_event!(PersonSearchAccepted, "PersonSearchAccepted");
person_search_event!(PersonSearchCompleted, "PersonSearchCompleted");
person_search_event!(PersonSearchRejected, "PersonSearchRejected");
person_search_event!(PersonSearchFailed, "PersonSearchFailed");
person_search_event!(PersonFound, "PersonFound");
