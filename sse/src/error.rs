//! Error types for the `sse` crate.
use std::error::Error as StdError;
use std::fmt;

/// Error returned by a [`Subscriber`](crate::Subscriber) that could not take a message.
///
/// The bus never surfaces these to publishers. It logs them and drops the
/// subscriber that produced them.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// The receiving side of the connection is gone (client disconnected).
    ConnectionClosed,
    Other(String),
}

impl Error {
    pub fn connection_closed() -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::ConnectionClosed,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::ConnectionClosed => write!(f, "SSE connection closed"),
            ErrorKind::Other(reason) => write!(f, "SSE delivery failed: {reason}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
