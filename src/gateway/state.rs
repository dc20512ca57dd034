use std::sync::Arc;

use crate::auth::{AuthService, TokenIssuer};
use crate::db::Database;

/// Shared application state.
///
/// Everything here is injected at startup: the pool and the token keys are
/// the only long-lived process state.
pub struct AppState {
    /// PostgreSQL database
    pub db: Arc<Database>,
    /// Token issuer / authorization gate
    pub tokens: Arc<TokenIssuer>,
    /// Registration and login logic
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, tokens: Arc<TokenIssuer>) -> Self {
        let auth = Arc::new(AuthService::new(db.pool().clone(), tokens.clone()));
        Self { db, tokens, auth }
    }
}
