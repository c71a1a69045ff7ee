use thiserror::Error;

/// Errors surfaced by Curtain's crates.
///
/// Platform crates keep their own error types for library failures and
/// convert into this one at the [`OverlayWindow`](crate::OverlayWindow)
/// boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// The windowing system could not be reached at startup.
    #[error("cannot open display: {0}")]
    Connect(String),

    /// A request to the windowing system failed after startup.
    #[error("window system error: {0}")]
    Backend(String),

    /// The configuration file exists but could not be read or parsed.
    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` when the display connection itself failed.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Connect(_))
    }
}

/// Result type used across Curtain's crates.
pub type Result<T> = std::result::Result<T, Error>;
