//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use tokio::net::TcpListener;
use tokio::signal;

use crate::api::create_router;
use crate::config::{Environment, Settings};
use crate::db::{establish_async_connection_pool, run_pending_migrations};
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
    environment: Environment,
}

impl Server {
    pub fn new(settings: Settings, environment: Environment) -> Self {
        Self {
            settings,
            environment,
        }
    }

    /// Start the server and run until a shutdown signal arrives.
    ///
    /// 1. Runs pending migrations when `database.auto_migrate` is set
    /// 2. Builds the connection pool and the application state
    /// 3. Binds and serves with graceful shutdown
    ///
    /// # Errors
    /// - Migration or pool initialization errors
    /// - Invalid password hashing parameters
    /// - Address binding errors
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %self.environment,
            "Application starting"
        );

        // URL and secret stay out of the logs
        tracing::info!(
            max_connections = self.settings.database.max_connections,
            min_connections = self.settings.database.min_connections,
            connection_timeout = self.settings.database.connection_timeout,
            auto_migrate = self.settings.database.auto_migrate,
            session_expiration_hours = self.settings.session.expiration_hours,
            "Configuration loaded"
        );

        if self.settings.database.auto_migrate {
            let applied = run_pending_migrations(&self.settings.database.url).await?;
            tracing::info!(count = applied.len(), migrations = ?applied, "Migrations applied");
        }

        let pool = establish_async_connection_pool(&self.settings.database).await?;
        tracing::info!("Database connection pool initialized");

        let state = AppState::new(pool, &self.settings)?;
        let router = create_router(state);

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed the failure is logged and that signal is
/// never reported, so the server keeps running.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
