use thiserror::Error;

/// Failure modes of a single weather lookup.
///
/// Every variant is terminal for that attempt: nothing is retried, and none
/// of them should take the process down.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The city string was empty after trimming. No request was made and
    /// the history was not touched.
    #[error("Enter the city name")]
    EmptyInput,

    /// The provider answered with an error status. The message is the
    /// provider's own text, surfaced verbatim.
    #[error("{0}")]
    Provider(String),

    /// The request never completed, or the response could not be decoded.
    #[error("Weather request failed: {0}")]
    Transport(#[from] TransportError),
}

/// Transport-level detail behind [`LookupError::Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Unreadable provider response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(TransportError::Http(e))
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Transport(TransportError::from(e))
    }
}
