use thiserror::Error;

/// Errors produced by the remote card store.
///
/// Any of these reads as "indeterminate" to the persistence layer, which
/// falls back to the local cache instead of surfacing the failure.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// No active session; remote writes require an authenticated actor.
    #[error("No active session")]
    Unauthorized,

    /// Advisory ownership rejection. The server-side policies remain the
    /// authority; this just saves a doomed round trip.
    #[error("Actor does not own card {0}")]
    NotOwner(String),

    /// The backend answered with a non-success status.
    #[error("Backend rejected the request: {status} {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, TLS, timeout, malformed body).
    #[error("Transport error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RemoteError>;
