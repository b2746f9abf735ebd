//! # Webhook Notifications
//!
//! The event-to-webhook dispatch pipeline: a read-only destination
//! registry, an absolute-URL builder, and notifier implementations that
//! POST JSON payloads to every destination whose filter matches an event,
//! independently per destination.
//!
//! Failure isolation is the design center here. One misconfigured or
//! unreachable endpoint must never block delivery to the rest, and no
//! delivery failure ever propagates back into the bus acknowledgement
//! decision.

pub mod notifier;
pub mod registry;
pub mod url;
pub mod webhook;

pub use notifier::SearchApiNotifier;
pub use registry::{WebhookDestination, WebhookRegistry};
pub use url::{try_create_uri, UriError};
pub use webhook::{WebhookPersonFoundNotifier, WebhookSearchEventNotifier};
