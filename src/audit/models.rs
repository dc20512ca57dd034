use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Kinds of privileged actions recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    AdminLogin,
    StatusChange,
    FeedbackDeleted,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdminLogin => "AdminLogin",
            Self::StatusChange => "StatusChange",
            Self::FeedbackDeleted => "FeedbackDeleted",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for one audit append. `performed_by` is required by construction;
/// the timestamp is never part of the input.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub action_type: ActionType,
    pub description: String,
    pub performed_by: i64,
    pub target_user: Option<i64>,
    pub feedback_id: Option<i64>,
}

/// A stored audit entry, joined with the involved users' names for display.
#[derive(Debug, Serialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: i64,
    pub action_type: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub performed_by: i64,
    pub performed_by_name: Option<String>,
    pub target_user: Option<i64>,
    pub target_user_name: Option<String>,
    pub feedback_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_type_strings() {
        assert_eq!(ActionType::AdminLogin.as_str(), "AdminLogin");
        assert_eq!(ActionType::StatusChange.to_string(), "StatusChange");
        assert_eq!(ActionType::FeedbackDeleted.as_str(), "FeedbackDeleted");
    }
}
