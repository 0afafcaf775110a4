//! Wallet Error Types
//!
//! Wallet-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Wallet-specific result type alias
pub type WalletResult<T> = Result<T, WalletError>;

/// Wallet-specific error variants
#[derive(Debug, Error)]
pub enum WalletError {
    /// No wallet exists for the requested user
    #[error("Wallet not found")]
    NotFound,

    /// A wallet already exists for the user (unique constraint)
    #[error("Wallet already provisioned for this user")]
    AlreadyProvisioned,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WalletError::NotFound => StatusCode::NOT_FOUND,
            WalletError::AlreadyProvisioned => StatusCode::CONFLICT,
            WalletError::Database(_) | WalletError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::NotFound => ErrorKind::NotFound,
            WalletError::AlreadyProvisioned => ErrorKind::Conflict,
            WalletError::Database(_) | WalletError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WalletError::Database(e) => {
                tracing::error!(error = %e, "Wallet database error");
            }
            WalletError::Internal(msg) => {
                tracing::error!(message = %msg, "Wallet internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Wallet error");
            }
        }
    }

    fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
