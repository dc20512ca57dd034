//! Registration and login handlers.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::super::state::AppState;
use super::super::types::{ApiResponse, ApiResult, ok};
use crate::auth::{LoginRequest, LoginResponse, RegisterRequest};

/// Register a new user
///
/// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = ApiResponse<String>),
        (status = 400, description = "Validation failure, weak password, or email already registered")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<String> {
    state.auth.register(req).await?;
    // No token on registration; login is a separate step.
    ok("User registered".to_string())
}

/// Login and receive a session token
///
/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials (uniform for unknown email and wrong password)")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let resp = state.auth.login(req).await?;
    ok(resp)
}
