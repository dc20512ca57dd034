//! Authorization gate: axum middleware validating bearer tokens.
//!
//! Missing/malformed/expired tokens yield 401; a valid token without the
//! admin role yields 403 on admin routes. On success the caller's
//! [`Identity`] is injected into request extensions.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::token::Identity;
use crate::errors::ApiError;
use crate::gateway::state::AppState;

fn bearer_token(request: &Request<Body>) -> Result<&str, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthenticated("Missing Authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthenticated("Invalid token format"))
}

fn authenticate(state: &AppState, request: &Request<Body>) -> Result<Identity, ApiError> {
    let token = bearer_token(request)?;
    state.tokens.verify(token)
}

/// Admit any authenticated caller.
pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = authenticate(&state, &request)?;
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Admit only authenticated callers with the admin role.
pub async fn admin_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = authenticate(&state, &request)?;
    if !identity.is_admin {
        return Err(ApiError::Forbidden);
    }
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
