//! Bearer Token Middleware
//!
//! Verifies the stateless access token on protected routes: signature
//! and expiry only, no lookup. On success the authenticated user id is
//! inserted into request extensions for downstream handlers.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::token::TokenSigner;
use std::sync::Arc;
use uuid::Uuid;

/// Middleware state
#[derive(Clone)]
pub struct BearerAuthState {
    pub signer: Arc<TokenSigner>,
}

/// Authenticated subject stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Middleware that requires a valid bearer token
pub async fn require_bearer(
    State(state): State<BearerAuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = token else {
        return Err(unauthorized("Missing bearer token"));
    };

    let claims = match state.signer.decode(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, "Bearer token rejected");
            return Err(unauthorized("Invalid or expired token"));
        }
    };

    let user_id = match Uuid::parse_str(&claims.sub) {
        Ok(user_id) => user_id,
        Err(_) => return Err(unauthorized("Invalid or expired token")),
    };

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn unauthorized(message: &'static str) -> Response {
    AppError::unauthorized(message).into_response()
}
