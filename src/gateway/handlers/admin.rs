//! Admin-only handlers: feedback moderation, audit trail, user listing.
//!
//! Every route in this module sits behind the admin authorization gate; the
//! `Identity` extension is therefore always present and always an admin.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use super::super::state::AppState;
use super::super::types::{ApiResponse, ApiResult, ok};
use crate::audit::{AuditLogEntry, AuditLogger, logger::Page};
use crate::auth::Identity;
use crate::feedback::{FeedbackRepository, FeedbackStatus, FeedbackWithUser};
use crate::users::{UserRepository, UserWithFeedbackCount};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// One of: New, In Progress, Resolved (case-insensitive)
    #[schema(example = "In Progress")]
    pub status: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AuditLogQuery {
    /// Page size; omit for the full list
    pub limit: Option<i64>,
    /// Rows to skip
    pub offset: Option<i64>,
}

/// List all feedback with submitter info, newest first
///
/// GET /api/admin/all-feedbacks
#[utoipa::path(
    get,
    path = "/api/admin/all-feedbacks",
    responses(
        (status = 200, description = "All feedback", body = ApiResponse<Vec<FeedbackWithUser>>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn all_feedbacks(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<FeedbackWithUser>> {
    let items = FeedbackRepository::list_all_with_users(state.db.pool()).await?;
    ok(items)
}

/// Change a feedback's status
///
/// POST or PUT /api/admin/update-status/{feedback_id}; the status write and
/// its audit entry commit in one transaction.
#[utoipa::path(
    method(post, put),
    path = "/api/admin/update-status/{feedback_id}",
    params(("feedback_id" = i64, Path, description = "Feedback to update")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<String>),
        (status = 400, description = "Unknown status string"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Feedback not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(feedback_id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<String> {
    let status: FeedbackStatus = req.status.parse()?;
    FeedbackRepository::update_status(state.db.pool(), feedback_id, status, identity).await?;
    ok("Feedback status updated successfully.".to_string())
}

/// Delete a feedback item
///
/// DELETE /api/admin/delete-feedback/{feedback_id} — audited in the same
/// transaction as the delete.
#[utoipa::path(
    delete,
    path = "/api/admin/delete-feedback/{feedback_id}",
    params(("feedback_id" = i64, Path, description = "Feedback to delete")),
    responses(
        (status = 200, description = "Feedback deleted", body = ApiResponse<String>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Feedback not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_feedback(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(feedback_id): Path<i64>,
) -> ApiResult<String> {
    FeedbackRepository::delete(state.db.pool(), feedback_id, identity).await?;
    ok("Feedback deleted successfully".to_string())
}

/// List the audit trail, newest first
///
/// GET /api/admin/audit-logs — `limit`/`offset` are optional; omitting them
/// returns the full ordered list.
#[utoipa::path(
    get,
    path = "/api/admin/audit-logs",
    params(AuditLogQuery),
    responses(
        (status = 200, description = "Audit entries", body = ApiResponse<Vec<AuditLogEntry>>),
        (status = 400, description = "Negative limit or offset"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn audit_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AuditLogQuery>,
) -> ApiResult<Vec<AuditLogEntry>> {
    let page = Page::from_query(query.limit, query.offset)?;
    let entries = AuditLogger::list(state.db.pool(), page).await?;
    ok(entries)
}

/// List users with their feedback counts
///
/// GET /api/admin/users-with-feedbacks
#[utoipa::path(
    get,
    path = "/api/admin/users-with-feedbacks",
    responses(
        (status = 200, description = "Users with counts", body = ApiResponse<Vec<UserWithFeedbackCount>>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn users_with_feedbacks(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<UserWithFeedbackCount>> {
    let users = UserRepository::list_with_feedback_counts(state.db.pool()).await?;
    ok(users)
}
