pub mod app_state;
pub mod controllers;
pub mod error;
pub mod health;
pub mod home;
pub mod logger;
pub mod routes;
pub mod views;


pub use app_state::AppState;
pub use controllers::{
    applications::{
        applications::{
            create_application, delete_application, edit_application_form, list_applications,
            new_application_form, show_application, update_application,
        },
        create_application_request::CreateApplicationRequest,
        update_application_request::UpdateApplicationRequest,
    },
    error::ControllerError,
    error::Result as ControllerResult,
    extractors::session_user::{SESSION_USER_HEADER, SessionUser},
};
pub use views::error::ViewError;

pub use crate::routes::build_router;

use jt_db::SqliteUserStore;

use std::error::Error;
use std::sync::Arc;

use axum::ServiceExt;
use axum::extract::Request;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use tower::Layer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment from .env if present
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = jt_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = jt_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting jt-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/jt-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Build application state
    let state = AppState {
        store: Arc::new(SqliteUserStore::new(pool)),
    };

    // Build router, wrapped so the method override runs before routing
    let router = build_router(state);
    let app = axum::middleware::from_fn(routes::method_override).layer(router);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
