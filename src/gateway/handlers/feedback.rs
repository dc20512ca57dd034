//! Feedback submission and listing for authenticated users.

use axum::{Extension, Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{ApiResponse, ApiResult, ok};
use crate::auth::Identity;
use crate::errors::ApiError;
use crate::feedback::{Feedback, FeedbackRepository};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    #[validate(length(min = 1, message = "Heading is required"))]
    #[schema(example = "Dark mode please")]
    pub heading: String,
    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Feature Request")]
    pub category: String,
    #[validate(length(min = 1, message = "Subcategory is required"))]
    #[schema(example = "UI")]
    pub subcategory: String,
    #[validate(length(min = 1, message = "Message is required"))]
    #[schema(example = "A dark theme would be easier on the eyes.")]
    pub message: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Submit a feedback item
///
/// POST /api/feedback/submit — the owner is taken from the token, never
/// from the body.
#[utoipa::path(
    post,
    path = "/api/feedback/submit",
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 200, description = "Feedback submitted", body = ApiResponse<String>),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Feedback"
)]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<SubmitFeedbackRequest>,
) -> ApiResult<String> {
    req.validate()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

    let id = FeedbackRepository::insert(
        state.db.pool(),
        identity.user_id,
        req.heading.trim(),
        req.category.trim(),
        req.subcategory.trim(),
        req.message.trim(),
        req.image_url.as_deref(),
    )
    .await?;

    tracing::info!(feedback_id = id, user_id = identity.user_id, "feedback submitted");
    ok("Feedback submitted successfully.".to_string())
}

/// List the caller's own feedback, newest first
///
/// GET /api/feedback/my-feedbacks
#[utoipa::path(
    get,
    path = "/api/feedback/my-feedbacks",
    responses(
        (status = 200, description = "Caller's feedback", body = ApiResponse<Vec<Feedback>>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Feedback"
)]
pub async fn my_feedbacks(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Vec<Feedback>> {
    let items = FeedbackRepository::list_by_user(state.db.pool(), identity.user_id).await?;
    ok(items)
}
