use sea_orm::DbErr;

use super::{pnw::ExternalSourceError, Error};

/// Strategy for handling errors in a retry context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Worth another attempt, possibly with a different query shape (server errors)
    Retry,
    /// Failed permanently (bad request, invalid credential)
    Fail,
}

impl ExternalSourceError {
    /// Determine whether a failed Politics & War request is worth a fallback attempt
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // 500 - The API is struggling with this query shape, a cheaper shape may succeed.
            Self::Status { status, .. } if *status >= 500 => ErrorRetryStrategy::Retry,

            // 400 - Malformed query or invalid API key, retrying won't change anything.
            Self::Status { .. } => ErrorRetryStrategy::Fail,

            Self::Transport(reqwest_error) => match reqwest_error.status() {
                Some(status) if status.is_server_error() => ErrorRetryStrategy::Retry,
                Some(_) => ErrorRetryStrategy::Fail,
                // Network error or timeout
                None => ErrorRetryStrategy::Retry,
            },

            // GraphQL validation errors & undecodable payloads are permanent
            Self::GraphQl { .. } => ErrorRetryStrategy::Fail,
            Self::Decode { .. } => ErrorRetryStrategy::Fail,

            // A different query shape pages the same way
            Self::PageLimit { .. } => ErrorRetryStrategy::Fail,

            // Already fell back once
            Self::FallbackExhausted { .. } => ErrorRetryStrategy::Fail,
        }
    }
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::ExternalSource(err) => err.to_retry_strategy(),

            Self::DbErr(db_err) => match db_err {
                // Connection errors - transient, the next cycle may succeed
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                _ => ErrorRetryStrategy::Fail,
            },

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::WarError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
