use crate::error::Error;
use crate::message;
use axum::response::sse::Event;
use std::convert::Infallible;
use tokio::sync::mpsc::UnboundedSender;

/// Opaque handle for one registration on the bus (server-generated)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that wants every message published on the bus.
///
/// `deliver` is called on the publishing task and must not block. Returning an
/// error tells the bus this subscriber is dead and should be dropped.
pub trait Subscriber: Send + Sync {
    fn deliver(&self, message: &str) -> Result<(), Error>;
}

impl<F> Subscriber for F
where
    F: Fn(&str) -> Result<(), Error> + Send + Sync,
{
    fn deliver(&self, message: &str) -> Result<(), Error> {
        self(message)
    }
}

/// Subscriber bound to one open SSE response.
///
/// Messages are encoded to SSE events and queued on an unbounded channel whose
/// receiver is drained by the response body. A slow client only grows its own
/// queue; it never blocks the publisher or other connections.
#[derive(Debug, Clone)]
pub struct Connection {
    sender: UnboundedSender<Result<Event, Infallible>>,
}

impl Connection {
    pub fn new(sender: UnboundedSender<Result<Event, Infallible>>) -> Self {
        Self { sender }
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl Subscriber for Connection {
    fn deliver(&self, message: &str) -> Result<(), Error> {
        self.sender
            .send(Ok(message::event(message)))
            .map_err(|_| Error::connection_closed())
    }
}
