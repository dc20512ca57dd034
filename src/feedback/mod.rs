//! Feedback items and their persistence.

pub mod models;
pub mod repository;

pub use models::{Feedback, FeedbackStatus, FeedbackWithUser};
pub use repository::FeedbackRepository;
