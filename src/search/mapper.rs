//! Projection of lifecycle events into the shared status payload.
//!
//! Pure and total: every well-formed event maps to a status value, with
//! absent source fields degrading to empty strings rather than failures.
//! No I/O, no branching beyond what the source shape itself carries.

use crate::contracts::{
    PersonSearchAccepted, PersonSearchCompleted, PersonSearchEvent, PersonSearchFailed,
    PersonSearchRejected, ProviderSearchEventStatus,
};

/// Structural projection of an event into [`ProviderSearchEventStatus`].
pub trait ToEventStatus: PersonSearchEvent {
    /// Kind-specific detail carried into the status message field.
    ///
    /// Defaults to nothing; kinds with a cause or reasons override it.
    fn status_message(&self) -> String {
        String::new()
    }

    fn to_event_status(&self) -> ProviderSearchEventStatus {
        ProviderSearchEventStatus {
            search_request_id: self.search_request_id(),
            time_stamp: self.time_stamp(),
            provider_name: self.provider_name(),
            event_type: Self::EVENT_NAME.to_string(),
            message: self.status_message(),
        }
    }

    /// Provider name from the event body, empty when the provider did not
    /// attach a profile.
    fn provider_name(&self) -> String;
}

impl ToEventStatus for PersonSearchAccepted {
    fn provider_name(&self) -> String {
        self.provider_profile
            .as_ref()
            .map(|profile| profile.name.clone())
            .unwrap_or_default()
    }
}

impl ToEventStatus for PersonSearchCompleted {
    fn provider_name(&self) -> String {
        self.provider_profile
            .as_ref()
            .map(|profile| profile.name.clone())
            .unwrap_or_default()
    }
}

impl ToEventStatus for PersonSearchRejected {
    fn provider_name(&self) -> String {
        self.provider_profile
            .as_ref()
            .map(|profile| profile.name.clone())
            .unwrap_or_default()
    }

    fn status_message(&self) -> String {
        self.reasons
            .iter()
            .map(|reason| {
                if reason.property_name.is_empty() {
                    reason.error_message.clone()
                } else {
                    format!("{}: {}", reason.property_name, reason.error_message)
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl ToEventStatus for PersonSearchFailed {
    fn provider_name(&self) -> String {
        self.provider_profile
            .as_ref()
            .map(|profile| profile.name.clone())
            .unwrap_or_default()
    }

    fn status_message(&self) -> String {
        self.cause.clone().unwrap_or_default()
    }
}
