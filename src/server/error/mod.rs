//! Error types for the Bastion server application.
//!
//! This module provides the error taxonomy used across the war monitor. Errors are split by
//! domain (configuration, the Politics & War API, war records, notification delivery). The
//! ones a failed alliance sync pass or startup can surface are aggregated into [`Error`].
//! Record-level and delivery-level errors are absorbed and logged by their callers.

pub mod config;
pub mod notify;
pub mod pnw;
pub mod retry;
pub mod war;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, pnw::ExternalSourceError, war::WarError},
};

/// Main error type for the Bastion server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type with `#[from]` conversions for use with the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Politics & War API errors (HTTP status, GraphQL errors, undecodable payloads)
/// - War errors (unknown alliance, missing alliance ID or API key)
/// - Persistence errors (database queries, transactions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Failure talking to the Politics & War GraphQL API.
    #[error(transparent)]
    ExternalSource(#[from] ExternalSourceError),
    /// War sync precondition failure (unknown alliance, missing identifiers or credentials).
    #[error(transparent)]
    WarError(#[from] WarError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the HTTP listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Alliance is missing its PnW alliance ID or an API key
/// - 404 Not Found - Alliance slug does not exist
/// - 502 Bad Gateway - The Politics & War API failed
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::WarError(err) => err.into_response(),
            Self::ExternalSource(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
