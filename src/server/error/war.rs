//! War sync error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A single war record from the API could not be turned into a usable war.
///
/// These are never surfaced from a sync pass: the offending record is skipped and logged so the
/// rest of the batch still reconciles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecordError {
    #[error("war record is missing field `{0}`")]
    MissingField(&'static str),
    #[error("war record field `{field}` is not a valid ID: {value:?}")]
    InvalidId { field: &'static str, value: String },
    #[error("war record has an unparseable start date: {0:?}")]
    InvalidDate(String),
    #[error("war record has an unknown war type: {0:?}")]
    UnknownWarType(String),
}

/// Preconditions for syncing an alliance's wars that were not met.
#[derive(Error, Debug)]
pub enum WarError {
    #[error("Alliance {0:?} not found")]
    AllianceNotFound(String),
    #[error("Alliance {0:?} has no Politics & War alliance ID")]
    MissingPnwAllianceId(String),
    #[error("No Politics & War API key available for alliance {0:?}")]
    MissingApiKey(String),
}

impl IntoResponse for WarError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AllianceNotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingPnwAllianceId(_) | Self::MissingApiKey(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
