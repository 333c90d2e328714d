use thiserror::Error;

/// Errors returned by the remote resort API client.
#[derive(Debug, Error)]
pub enum ResortsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// A well-formed response saying the API key has no access to the API.
    #[error("API subscription required: {0}")]
    SubscriptionRequired(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// The two ways a fetch can fail, as far as callers are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FetchFailure,
    SubscriptionRequired,
}

impl ResortsError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResortsError::SubscriptionRequired(_) => ErrorKind::SubscriptionRequired,
            ResortsError::Http(_)
            | ResortsError::UnexpectedStatus { .. }
            | ResortsError::Deserialize { .. }
            | ResortsError::InvalidBaseUrl { .. } => ErrorKind::FetchFailure,
        }
    }

    #[must_use]
    pub fn is_subscription_required(&self) -> bool {
        self.kind() == ErrorKind::SubscriptionRequired
    }
}
