use thiserror::Error;

/// Failures from Win32 calls.
#[derive(Debug, Error)]
pub enum WindowsError {
    /// The overlay window could not be created.
    #[error("cannot create overlay window: {0}")]
    Create(windows::core::Error),

    #[error(transparent)]
    Win32(#[from] windows::core::Error),

    /// `GetMessageW` reported a failure.
    #[error("message loop failed")]
    MessageLoop,
}

impl From<WindowsError> for curtain_core::Error {
    fn from(e: WindowsError) -> Self {
        match e {
            WindowsError::Create(_) => Self::Connect(e.to_string()),
            other => Self::Backend(other.to_string()),
        }
    }
}
