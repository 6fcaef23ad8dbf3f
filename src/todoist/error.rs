//! Error type shared by every Todoist gateway operation

use thiserror::Error;

/// Failures surfaced by the gateway.
///
/// Transport failures (`Status`, `Http`, `Encode`) and decode failures
/// (`Decode`, `EmptyResponse`) are never retried here. A task name that
/// matches nothing is not an error; see [`crate::todoist::Resolution`].
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a status outside 200-299.
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// DNS, connection, TLS or timeout failure.
    #[error("failed to make request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response did not have the shape expected for `resource`.
    #[error("failed to parse {resource}: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A 204 arrived where a record was expected.
    #[error("expected {0} in response but the API returned no content")]
    EmptyResponse(&'static str),

    /// A list page pointed back at the cursor that produced it.
    #[error("{resource} pagination returned the same cursor {cursor:?} twice")]
    RepeatedCursor {
        resource: &'static str,
        cursor: String,
    },

    #[error("either task_id or task_name is required")]
    MissingTaskReference,

    /// Caller input that makes the whole operation meaningless.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// HTTP status of the failed call, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for failures that happened before or during the HTTP exchange.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Status { .. } | Error::Http(_) | Error::Encode(_)
        )
    }

    pub(crate) fn decode(resource: &'static str, source: serde_json::Error) -> Self {
        Error::Decode { resource, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
