use std::error::Error as StdError;
use std::fmt;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors that stop the web server from starting or keep it from serving.
///
/// Request handlers in this crate cannot fail: bad input is treated as empty
/// input and broken client connections are cleaned up silently. What's left
/// are process-level failures, which `main` reports and exits on.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// Could not bind the listening socket (address in use, bad interface, ...)
    Bind(String),
    /// The accept loop stopped with an I/O error
    Serve,
}

impl Error {
    pub(crate) fn bind(addr: &str, err: std::io::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Bind(addr.to_string()),
        }
    }

    pub(crate) fn serve(err: std::io::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Serve,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Bind(addr) => write!(f, "Failed to bind {addr}")?,
            ErrorKind::Serve => write!(f, "Server stopped unexpectedly")?,
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
