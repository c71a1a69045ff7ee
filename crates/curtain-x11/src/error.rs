use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError, ReplyOrIdError};

/// Failures talking to the X server.
#[derive(Debug, Error)]
pub enum X11Error {
    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Reply(#[from] ReplyError),

    #[error(transparent)]
    ReplyOrId(#[from] ReplyOrIdError),
}

impl From<X11Error> for curtain_core::Error {
    fn from(e: X11Error) -> Self {
        match e {
            X11Error::Connect(e) => Self::Connect(e.to_string()),
            other => Self::Backend(other.to_string()),
        }
    }
}
