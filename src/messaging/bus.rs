//! RabbitMQ bus host.
//!
//! Owns the AMQP connection lifecycle: declares one durable queue per
//! registered consumer, runs a consumer task per queue, and stops promptly
//! on shutdown through a shared cancellation token.
//!
//! Acknowledgement is unconditional. A message is acked after the consumer
//! returns, whatever happened to webhook delivery; a perpetually failing
//! destination must never block queue processing.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use lapin::options::{BasicAckOptions, BasicConsumeOptions, BasicQosOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::{Channel, Connection, ConnectionProperties};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::config::RabbitMqConfiguration;

use super::envelope::MessageEnvelope;
use super::errors::MessagingError;

/// A consumer bound to one named queue.
///
/// `consume` must absorb its own failures; the bus host acknowledges the
/// delivery as soon as it returns.
#[async_trait]
pub trait MessageConsumer: Send + Sync {
    /// Name of the queue this consumer subscribes to.
    fn queue_name(&self) -> String;

    /// Process one delivery.
    async fn consume(&self, envelope: MessageEnvelope, cancel: &CancellationToken);
}

/// Manages the bus connection and the per-queue consumer tasks.
pub struct BusHost {
    connection: Connection,
    channel: Channel,
    consumers: Vec<Arc<dyn MessageConsumer>>,
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl BusHost {
    /// Connect to the broker and prepare a channel for consuming.
    pub async fn connect(config: &RabbitMqConfiguration) -> Result<Self, MessagingError> {
        let connection = Connection::connect(
            &config.amqp_uri(),
            ConnectionProperties::default().with_connection_name("search-notify".into()),
        )
        .await
        .map_err(|e| MessagingError::connection(format!("RabbitMQ connection failed: {e}")))?;

        let channel = connection.create_channel().await.map_err(|e| {
            MessagingError::connection(format!("RabbitMQ channel creation failed: {e}"))
        })?;

        channel
            .basic_qos(config.prefetch_count, BasicQosOptions::default())
            .await
            .map_err(|e| MessagingError::connection(format!("Failed to set QoS: {e}")))?;

        info!(
            host = %config.host,
            port = config.port,
            "connected to message bus"
        );

        Ok(Self {
            connection,
            channel,
            consumers: Vec::new(),
            cancel: CancellationToken::new(),
            tasks: Vec::new(),
        })
    }

    /// Register a consumer to be started by [`BusHost::start`].
    pub fn register(&mut self, consumer: Arc<dyn MessageConsumer>) {
        self.consumers.push(consumer);
    }

    /// Token cancelled when the host shuts down.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Declare each consumer's queue and start its consumer task.
    pub async fn start(&mut self) -> Result<(), MessagingError> {
        for consumer in &self.consumers {
            let queue = consumer.queue_name();

            self.channel
                .queue_declare(
                    &queue,
                    QueueDeclareOptions {
                        durable: true,
                        ..Default::default()
                    },
                    FieldTable::default(),
                )
                .await
                .map_err(|e| MessagingError::queue_declare(queue.as_str(), e.to_string()))?;

            let deliveries = self
                .channel
                .basic_consume(
                    &queue,
                    &format!("search-notify-{queue}"),
                    BasicConsumeOptions::default(),
                    FieldTable::default(),
                )
                .await
                .map_err(|e| MessagingError::subscribe(queue.as_str(), e.to_string()))?;

            let consumer = Arc::clone(consumer);
            let cancel = self.cancel.clone();
            self.tasks
                .push(tokio::spawn(consume_loop(deliveries, consumer, cancel, queue)));
        }

        info!(consumers = self.tasks.len(), "bus host started");
        Ok(())
    }

    /// Cancel in-flight work, wait for consumer tasks, close the connection.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();

        for task in self.tasks.drain(..) {
            if let Err(error) = task.await {
                warn!(%error, "consumer task did not shut down cleanly");
            }
        }

        if let Err(error) = self.connection.close(200, "shutting down").await {
            warn!(%error, "error while closing bus connection");
        }

        info!("bus host stopped");
    }
}

async fn consume_loop(
    mut deliveries: lapin::Consumer,
    consumer: Arc<dyn MessageConsumer>,
    cancel: CancellationToken,
    queue: String,
) {
    loop {
        let delivery = tokio::select! {
            _ = cancel.cancelled() => break,
            next = deliveries.next() => match next {
                Some(Ok(delivery)) => delivery,
                Some(Err(error)) => {
                    error!(queue = %queue, %error, "failed to receive delivery");
                    continue;
                }
                None => {
                    warn!(queue = %queue, "delivery stream closed by broker");
                    break;
                }
            },
        };

        let envelope = MessageEnvelope::from_delivery(&delivery);
        consumer.consume(envelope, &cancel).await;

        if let Err(error) = delivery.ack(BasicAckOptions::default()).await {
            error!(queue = %queue, %error, "failed to acknowledge delivery");
        }
    }

    debug!(queue = %queue, "consumer loop exited");
}
