//! SmartFeedback backend entry point.
//!
//! Loads configuration for the selected environment, initializes logging,
//! connects to PostgreSQL, and serves the HTTP gateway.

use std::sync::Arc;

use smart_feedback::config::AppConfig;
use smart_feedback::db::Database;
use smart_feedback::gateway;
use smart_feedback::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);

    let _guard = init_logging(&config);
    tracing::info!(
        "smart_feedback v{} ({}) starting, env={}",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env
    );

    let db = match Database::connect(&config.database_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("❌ FATAL: Failed to connect to PostgreSQL: {}", e);
            eprintln!("   Hint: bootstrap the schema with: psql -f scripts/init_db.sql");
            std::process::exit(1);
        }
    };

    if let Err(e) = db.health_check().await {
        eprintln!("❌ FATAL: Database health check failed: {}", e);
        std::process::exit(1);
    }

    gateway::run_server(&config, db).await;
}
