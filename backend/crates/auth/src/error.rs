//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. One tagged type
//! with a kind discriminant: callers branch on the variant, end users
//! see the message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or empty required field. The message comes from the
    /// injected catalog; no side effects have occurred when this is
    /// returned.
    #[error("{0}")]
    Validation(String),

    /// Login failed: unknown email, lookup failure, or wrong password.
    /// Deliberately one variant and one message, so account existence
    /// cannot be probed.
    #[error("{0}")]
    InvalidCredentials(String),

    /// Password hashing/verification infrastructure failure.
    #[error("credential processing failed: {0}")]
    Credential(String),

    /// Email uniqueness conflict reported by the user store.
    #[error("email is already registered")]
    EmailTaken,

    /// Store-level failure, propagated from the collaborator.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Wallet creation failed after the user record was persisted.
    /// The user exists without a wallet; see `RegisterUseCase`.
    #[error("wallet provisioning failed: {0}")]
    Provisioning(String),

    /// Token issuance failure.
    #[error("token issuance failed: {0}")]
    Token(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::Provisioning(_) => StatusCode::BAD_GATEWAY,
            AuthError::Credential(_)
            | AuthError::Database(_)
            | AuthError::Token(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials(_) => ErrorKind::Unauthorized,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Provisioning(_) => ErrorKind::BadGateway,
            AuthError::Credential(_)
            | AuthError::Database(_)
            | AuthError::Token(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Credential(msg) => {
                tracing::error!(message = %msg, "Credential infrastructure error");
            }
            AuthError::Token(msg) => {
                tracing::error!(message = %msg, "Token issuance error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials(_) => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Provisioning(msg) => {
                tracing::warn!(message = %msg, "Wallet provisioning error surfaced");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Credential(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        AuthError::Token(err.to_string())
    }
}
