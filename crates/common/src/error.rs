//! Error types for promovote.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// Business-rule rejections (`AlreadyVoted`, `OriginLimitExceeded`, …)
/// surface immediately; only transient storage errors are retried, see
/// [`is_transient`](AppError::is_transient).
#[derive(Debug, Error)]
pub enum AppError {
    // === Client Errors ===
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Unknown contest item: {0}")]
    InvalidItem(i32),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account has been blocked. Please contact support.")]
    AccountBlocked,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Too many accounts have been created from this network")]
    OriginLimitExceeded,

    #[error("You have already voted for this video")]
    AlreadyVoted {
        /// Current tally for the item, so the caller sees the live count.
        tally: u64,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // === Server Errors ===
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::NotFound(_) | Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::AccountBlocked | Self::Forbidden(_) | Self::OriginLimitExceeded => {
                StatusCode::FORBIDDEN
            }
            Self::InvalidItem(_)
            | Self::AlreadyVoted { .. }
            | Self::BadRequest(_)
            | Self::Validation(_)
            | Self::Conflict(_) => StatusCode::BAD_REQUEST,

            // 5xx Server Errors
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::InvalidItem(_) => "INVALID_ITEM",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AccountBlocked => "ACCOUNT_BLOCKED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::OriginLimitExceeded => "ORIGIN_LIMIT_EXCEEDED",
            Self::AlreadyVoted { .. } => "ALREADY_VOTED",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error is a transient storage failure worth retrying.
    ///
    /// Business-rule rejections (uniqueness violations, throttles) are
    /// never transient; only connectivity-class failures qualify.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_))
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Log server errors with context; never leak internals to the caller
        if self.is_server_error() {
            tracing::error!(error = %self, code = code, "Server error occurred");
        } else {
            tracing::debug!(error = %self, code = code, "Client error occurred");
        }

        let mut body = json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        });

        // AlreadyVoted always carries the current tally in the body
        if let Self::AlreadyVoted { tally } = &self {
            body["error"]["tally"] = json!(tally);
            body["tally"] = json!(tally);
        }

        let message = match &self {
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => {
                "Server error. Please try again.".to_string()
            }
            other => other.to_string(),
        };
        body["error"]["message"] = json!(message);

        (status, Json(body)).into_response()
    }
}

// === From implementations ===

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
