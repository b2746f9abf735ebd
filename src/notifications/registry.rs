//! Configured webhook destinations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single webhook destination loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookDestination {
    /// Display name used in log output.
    pub name: String,
    /// Absolute base URI notifications are posted under.
    #[serde(default)]
    pub uri: String,
    /// Case-insensitive substring filter against event kind names.
    ///
    /// A destination with a blank filter receives no traffic; opting into
    /// events must be explicit.
    #[serde(default)]
    pub event_name: String,
}

impl WebhookDestination {
    /// Whether an explicit, non-blank event-name filter is configured.
    pub fn has_filter(&self) -> bool {
        !self.event_name.trim().is_empty()
    }

    /// Whether this destination subscribes to the given event kind.
    ///
    /// Matching is case-insensitive substring containment: a filter of
    /// `search` accepts both `PersonSearchAccepted` and
    /// `PersonSearchRejected`. Blank filters never match.
    pub fn accepts(&self, event_name: &str) -> bool {
        let filter = self.event_name.trim();
        if filter.is_empty() {
            return false;
        }
        event_name
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

/// Read-only set of webhook destinations, loaded once at startup.
///
/// Cheap to clone and safe to share across concurrent dispatches; there is
/// no mutation API. An empty registry is valid and makes dispatch a no-op.
#[derive(Debug, Clone, Default)]
pub struct WebhookRegistry {
    destinations: Arc<[WebhookDestination]>,
}

impl WebhookRegistry {
    pub fn new(destinations: Vec<WebhookDestination>) -> Self {
        Self {
            destinations: destinations.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Destinations in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, WebhookDestination> {
        self.destinations.iter()
    }
}

impl From<Vec<WebhookDestination>> for WebhookRegistry {
    fn from(destinations: Vec<WebhookDestination>) -> Self {
        Self::new(destinations)
    }
}
