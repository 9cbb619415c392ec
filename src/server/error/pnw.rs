//! Politics & War API error types.
//!
//! [`ExternalSourceError`] covers every way a request to the GraphQL API can fail. The upstream
//! status and body are kept for diagnostics since the API's error messages are the only useful
//! signal when a query is rejected.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Maximum number of characters of an upstream body kept in an error.
const MAX_BODY_LEN: usize = 512;

/// Failure talking to the Politics & War GraphQL API.
#[derive(Error, Debug)]
pub enum ExternalSourceError {
    /// The API responded with a non-success HTTP status.
    #[error("Politics & War API responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The API responded 200 but the GraphQL payload carried an `errors` array.
    #[error("Politics & War API returned GraphQL errors: {body}")]
    GraphQl { body: String },

    /// The response body could not be decoded into any known envelope shape.
    #[error("Failed to decode Politics & War API response ({reason}): {body}")]
    Decode { reason: String, body: String },

    /// A paginated query still reported more pages after the page limit.
    ///
    /// The partial result is discarded since reconciling it would deactivate the wars on the
    /// pages never fetched.
    #[error("Politics & War API still reported more `{field}` pages after {pages} pages")]
    PageLimit { field: String, pages: u32 },

    /// Connection, timeout or other transport failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Both the primary and the fallback query shape failed.
    #[error("Politics & War API query failed after fallback: {fallback} (primary: {primary})")]
    FallbackExhausted {
        primary: Box<ExternalSourceError>,
        fallback: Box<ExternalSourceError>,
    },
}

impl ExternalSourceError {
    /// Builds a [`ExternalSourceError::Status`], truncating the body.
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: truncate_body(body),
        }
    }

    /// Builds a [`ExternalSourceError::Decode`], truncating the body.
    pub fn decode(reason: impl ToString, body: &str) -> Self {
        Self::Decode {
            reason: reason.to_string(),
            body: truncate_body(body),
        }
    }

    /// Upstream HTTP status, if the failure carried one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::FallbackExhausted { fallback, .. } => fallback.upstream_status(),
            _ => None,
        }
    }
}

/// Truncates an upstream body to a length suitable for logs and error messages.
pub fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_BODY_LEN {
        body.to_string()
    } else {
        let mut truncated: String = body.chars().take(MAX_BODY_LEN).collect();
        truncated.push_str("...");
        truncated
    }
}

impl IntoResponse for ExternalSourceError {
    fn into_response(self) -> Response {
        tracing::warn!(upstream_status = ?self.upstream_status(), "{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Failed to fetch war data from Politics & War".to_string(),
            }),
        )
            .into_response()
    }
}
