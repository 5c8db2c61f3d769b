use super::Error;

/// Error talking to the remote table source.
#[derive(Debug)]
pub(super) enum RemoteFetchError {
    /// The request never produced a response (connect, TLS, timeout, decode).
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// The source answered with a non-success status.
    Status { status: u16, message: Box<str> },
}

impl std::error::Error for RemoteFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RemoteFetchError::Transport(err) => Some(err.as_ref()),
            RemoteFetchError::Status { .. } => None,
        }
    }
}

impl core::fmt::Display for RemoteFetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("remote fetch failed: ")?;
        match self {
            RemoteFetchError::Transport(err) => core::fmt::Display::fmt(err, f),
            RemoteFetchError::Status { status, message } => {
                write!(f, "HTTP {}: {}", status, message)
            }
        }
    }
}

impl Error {
    /// Creates a remote fetch error from a transport-level failure.
    pub fn remote_fetch(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::RemoteFetch(RemoteFetchError::Transport(
            Box::new(err),
        )))
    }

    /// Creates a remote fetch error from a non-success response.
    pub fn remote_status(status: u16, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RemoteFetch(RemoteFetchError::Status {
            status,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a remote fetch error.
    pub fn is_remote_fetch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RemoteFetch(_))
    }

    /// Returns the HTTP status of a remote fetch error, if the source answered.
    pub fn remote_status_code(&self) -> Option<u16> {
        match self.kind() {
            super::ErrorKind::RemoteFetch(RemoteFetchError::Status { status, .. }) => {
                Some(*status)
            }
            _ => None,
        }
    }
}
