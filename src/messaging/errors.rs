//! Error types for the bus integration, using thiserror for structured
//! variants instead of `Box<dyn Error>` patterns.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Bus connection error: {message}")]
    Connection { message: String },

    #[error("Queue declaration failed: {queue_name}: {message}")]
    QueueDeclare { queue_name: String, message: String },

    #[error("Subscription failed: {queue_name}: {message}")]
    Subscribe { queue_name: String, message: String },
}

impl MessagingError {
    pub fn connection(message: impl Into<String>) -> Self {
        MessagingError::Connection {
            message: message.into(),
        }
    }

    pub fn queue_declare(queue_name: impl Into<String>, message: impl Into<String>) -> Self {
        MessagingError::QueueDeclare {
            queue_name: queue_name.into(),
            message: message.into(),
        }
    }

    pub fn subscribe(queue_name: impl Into<String>, message: impl Into<String>) -> Self {
        MessagingError::Subscribe {
            queue_name: queue_name.into(),
            message: message.into(),
        }
    }
}
