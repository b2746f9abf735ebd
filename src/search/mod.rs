//! # Search Event Consumption
//!
//! Consumers bound to the lifecycle event queues and the mapper that
//! projects each event into the notification payload. One consumer per
//! event kind; all of them stateless, reentrant, and incapable of failing
//! a message back to the bus.

pub mod consumers;
pub mod mapper;

pub use consumers::{PersonFoundConsumer, SearchEventConsumer};
pub use mapper::ToEventStatus;
