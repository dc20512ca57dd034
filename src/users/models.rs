use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A registered user.
///
/// `password_hash` holds an argon2 PHC string, never plaintext, and never
/// leaves the server: this type is not serialized to clients.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    /// Stored lowercased so lookups are case-insensitive.
    pub email: String,
    pub password_hash: String,
    pub gender: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Admin projection: a user plus how many feedback items they submitted.
#[derive(Debug, Serialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserWithFeedbackCount {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub gender: String,
    pub is_admin: bool,
    pub feedback_count: i64,
}
