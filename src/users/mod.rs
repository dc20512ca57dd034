//! User records and persistence.

pub mod models;
pub mod repository;

pub use models::{User, UserWithFeedbackCount};
pub use repository::UserRepository;
