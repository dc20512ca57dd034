//! SmartFeedback - Feedback Submission Backend
//!
//! A JWT-authenticated REST API over PostgreSQL with an append-only audit
//! trail of privileged actions.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration per environment
//! - [`logging`] - tracing setup (rolling file + stdout)
//! - [`db`] - PostgreSQL connection pool
//! - [`errors`] - API error taxonomy
//! - [`auth`] - password policy, token issuance, authorization gate
//! - [`users`] - user records and repository
//! - [`feedback`] - feedback items and repository
//! - [`audit`] - append-only audit trail
//! - [`gateway`] - axum HTTP surface

pub mod audit;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod feedback;
pub mod gateway;
pub mod logging;
pub mod users;

// Convenient re-exports at crate root
pub use audit::{ActionType, AuditLogEntry, AuditLogger, NewAuditEntry};
pub use auth::{AuthService, Claims, Identity, TokenIssuer};
pub use config::AppConfig;
pub use db::Database;
pub use errors::ApiError;
pub use feedback::{Feedback, FeedbackRepository, FeedbackStatus};
pub use users::{User, UserRepository};
