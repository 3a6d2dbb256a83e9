//! Server-Sent Events (SSE) chat broadcast infrastructure.
//!
//! This crate provides the single-topic publish/subscribe bus that fans chat
//! messages out to every connected streaming client.
//!
//! # Architecture
//!
//! - **One topic**: there is exactly one implicit channel carrying plain strings.
//!   No envelopes, identifiers or timestamps travel with a message.
//! - **Explicit bus**: the [`Bus`] is constructed once at startup and shared via
//!   `Arc`, never stored in a global.
//! - **Opaque handles**: `subscribe` returns a [`SubscriptionId`] that is the only
//!   way to `unsubscribe`. Unsubscribing is idempotent.
//! - **Drop guard**: [`Subscription`] unsubscribes when dropped, so a streaming
//!   response that owns one cannot leak its registration.
//! - **Ephemeral messages**: a subscriber registered after a publish never sees it.
//!
//! # Message Flow
//!
//! 1. Client opens the `/sse` endpoint
//! 2. Handler creates an mpsc channel and subscribes a [`Connection`] wrapping the sender
//! 3. `/chat` publishes a message on the bus
//! 4. Bus snapshots the subscriber set and calls `deliver` on each entry
//! 5. Each connection encodes the message as an SSE event and queues it
//! 6. When the response stream is dropped the [`Subscription`] guard unsubscribes
//!
//! # Example
//!
//! ```rust,ignore
//! use sse::{Bus, Connection};
//! use std::sync::Arc;
//!
//! let bus = Arc::new(Bus::new());
//! let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
//! let subscription = bus.subscribe_guarded(Connection::new(tx));
//!
//! bus.publish("hello");
//! drop(subscription);
//! assert_eq!(bus.subscriber_count(), 0);
//! ```
//!
//! # Modules
//!
//! - `bus`: the subscriber set with publish/subscribe/unsubscribe and the drop guard
//! - `connection`: [`Subscriber`] trait, [`SubscriptionId`] and the per-connection sink
//! - `message`: encoding of chat messages into SSE events
//! - `error`: delivery errors

pub mod bus;
pub mod connection;
pub mod error;
pub mod message;

pub use bus::{Bus, Subscription};
pub use connection::{Connection, Subscriber, SubscriptionId};
pub use error::{Error, ErrorKind};
