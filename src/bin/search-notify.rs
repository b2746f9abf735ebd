//! Service entrypoint: wires configuration, notifiers, and the bus host,
//! then runs until interrupted.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use search_notify::contracts::{
    PersonSearchAccepted, PersonSearchCompleted, PersonSearchFailed, PersonSearchRejected,
};
use search_notify::messaging::BusHost;
use search_notify::notifications::{
    WebhookPersonFoundNotifier, WebhookRegistry, WebhookSearchEventNotifier,
};
use search_notify::search::{PersonFoundConsumer, SearchEventConsumer};
use search_notify::{config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    let settings = config::load().context("failed to load configuration")?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.http.timeout_seconds))
        .build()
        .context("failed to build http client")?;

    let registry = WebhookRegistry::from(settings.search_api.web_hooks.clone());
    info!(destinations = registry.len(), "webhook registry loaded");

    let status_notifier = Arc::new(WebhookSearchEventNotifier::new(
        client.clone(),
        registry.clone(),
    ));
    let found_notifier = Arc::new(WebhookPersonFoundNotifier::new(client, registry));

    let mut bus = BusHost::connect(&settings.rabbitmq)
        .await
        .context("failed to connect to the message bus")?;

    bus.register(Arc::new(SearchEventConsumer::<PersonSearchAccepted>::new(
        status_notifier.clone(),
    )));
    bus.register(Arc::new(SearchEventConsumer::<PersonSearchCompleted>::new(
        status_notifier.clone(),
    )));
    bus.register(Arc::new(SearchEventConsumer::<PersonSearchRejected>::new(
        status_notifier.clone(),
    )));
    bus.register(Arc::new(SearchEventConsumer::<PersonSearchFailed>::new(
        status_notifier,
    )));
    bus.register(Arc::new(PersonFoundConsumer::new(found_notifier)));

    bus.start().await.context("failed to start consumers")?;
    info!("search-notify started; waiting for events");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutdown signal received");

    bus.shutdown().await;
    Ok(())
}
