use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::errors::ApiError;

/// Closed set of feedback statuses.
///
/// The wire format is the display string ("In Progress"), parsed
/// case-insensitively on the way in. Unknown strings are rejected rather
/// than stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStatus {
    New,
    InProgress,
    Resolved,
}

impl FeedbackStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "in progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(ApiError::InvalidArgument(format!(
                "Unknown status '{}': expected New, In Progress, or Resolved",
                other
            ))),
        }
    }
}

/// A feedback item as its submitter sees it.
#[derive(Debug, Serialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub heading: String,
    pub category: String,
    pub subcategory: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}

/// Admin projection: a feedback item plus its submitter.
#[derive(Debug, Serialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackWithUser {
    pub id: i64,
    pub heading: String,
    pub category: String,
    pub subcategory: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub user_id: i64,
    pub user_full_name: String,
    pub user_email: String,
}
