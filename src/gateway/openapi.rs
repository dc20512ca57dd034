//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::audit::AuditLogEntry;
use crate::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::feedback::{Feedback, FeedbackWithUser};
use crate::gateway::handlers::HealthResponse;
use crate::gateway::handlers::admin::UpdateStatusRequest;
use crate::gateway::handlers::feedback::SubmitFeedbackRequest;
use crate::users::UserWithFeedbackCount;

/// Bearer JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Session token from POST /api/auth/login. \
                             Tokens expire; there is no server-side revocation.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SmartFeedback API",
        version = "1.0.0",
        description = "Feedback submission backend with JWT authentication and an append-only audit trail.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::auth::register,
        crate::gateway::handlers::auth::login,
        crate::gateway::handlers::feedback::submit,
        crate::gateway::handlers::feedback::my_feedbacks,
        crate::gateway::handlers::admin::all_feedbacks,
        crate::gateway::handlers::admin::update_status,
        crate::gateway::handlers::admin::delete_feedback,
        crate::gateway::handlers::admin::audit_logs,
        crate::gateway::handlers::admin::users_with_feedbacks,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            SubmitFeedbackRequest,
            UpdateStatusRequest,
            Feedback,
            FeedbackWithUser,
            AuditLogEntry,
            UserWithFeedbackCount,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Feedback", description = "Feedback submission and listing (auth required)"),
        (name = "Admin", description = "Moderation, audit trail, and user listing (admin role required)"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json().expect("spec serializes");
        assert!(json.contains("/api/auth/login"));
        assert!(json.contains("/api/admin/audit-logs"));
        assert!(json.contains("bearer_auth"));
    }

    #[test]
    fn status_update_answers_post_and_put() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json().expect("spec serializes");
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        let item = &doc["paths"]["/api/admin/update-status/{feedback_id}"];
        assert!(item.get("post").is_some());
        assert!(item.get("put").is_some());
    }
}
