//! The notifier abstraction reused across event payload types.

use async_trait::async_trait;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Delivers a notification payload for one search request to all interested
/// destinations.
///
/// Implementations are side-effecting and infallible from the caller's
/// point of view: every per-destination failure is absorbed and logged, so
/// a consumer can acknowledge its message regardless of delivery outcome.
#[async_trait]
pub trait SearchApiNotifier<T>: Send + Sync
where
    T: Serialize + Send + Sync,
{
    /// Notify all matching destinations of an event.
    ///
    /// `event_name` distinguishes event kinds that share a payload shape;
    /// notifiers for a payload with a single fixed kind ignore it. The
    /// cancellation token bounds every HTTP attempt made by this call.
    async fn notify_event(
        &self,
        search_request_id: Uuid,
        payload: &T,
        event_name: Option<&str>,
        cancel: &CancellationToken,
    );
}
