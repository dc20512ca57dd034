//! HTTP gateway: router assembly and server startup.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::TokenIssuer;
use crate::auth::middleware::{admin_auth_middleware, jwt_auth_middleware};
use crate::config::AppConfig;
use crate::db::Database;
use state::AppState;

/// Start the HTTP gateway server. Runs until the process exits.
pub async fn run_server(config: &AppConfig, db: Arc<Database>) {
    let tokens = Arc::new(TokenIssuer::new(
        &config.jwt.secret,
        config.jwt.validity_hours,
    ));
    let state = Arc::new(AppState::new(db, tokens));

    // Public: registration and login
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Any authenticated user
    let feedback_routes = Router::new()
        .route("/submit", post(handlers::feedback::submit))
        .route("/my-feedbacks", get(handlers::feedback::my_feedbacks))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    // Admin role required
    let admin_routes = Router::new()
        .route("/all-feedbacks", get(handlers::admin::all_feedbacks))
        // Both verbs accepted; deployed clients disagree on which to send.
        .route(
            "/update-status/{feedback_id}",
            post(handlers::admin::update_status).put(handlers::admin::update_status),
        )
        .route(
            "/delete-feedback/{feedback_id}",
            delete(handlers::admin::delete_feedback),
        )
        .route("/audit-logs", get(handlers::admin::audit_logs))
        .route(
            "/users-with-feedbacks",
            get(handlers::admin::users_with_feedbacks),
        )
        .layer(from_fn_with_state(state.clone(), admin_auth_middleware));

    let app = Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .nest("/api/auth", auth_routes)
        .nest("/api/feedback", feedback_routes)
        .nest("/api/admin", admin_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                config.gateway.port, config.gateway.port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
