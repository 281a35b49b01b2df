//! Database module providing connection management and queries.

pub mod defects;

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use secrecy::ExposeSecret;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::DatabaseSettings;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// Shared handle to the defect store.
///
/// The underlying connection pool is opened on first use and reused for the
/// life of the process. A failed attempt leaves the handle empty so the next
/// caller retries.
#[derive(Clone)]
pub struct DbPool {
    settings: DatabaseSettings,
    conn: Arc<OnceCell<DatabaseConnection>>,
}

impl DbPool {
    /// Create an unconnected pool from settings.
    pub fn new(settings: DatabaseSettings) -> Self {
        Self {
            settings,
            conn: Arc::new(OnceCell::new()),
        }
    }

    /// Wrap an already open connection. Schema bootstrap is skipped.
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self {
            settings: DatabaseSettings::default(),
            conn: Arc::new(OnceCell::from(conn)),
        }
    }

    /// Whether a live connection has been established.
    pub fn is_connected(&self) -> bool {
        self.conn.initialized()
    }

    /// Return the live connection, establishing it first if needed.
    pub async fn ensure_connected(&self) -> AppResult<&DatabaseConnection> {
        self.conn.get_or_try_init(|| self.connect()).await
    }

    async fn connect(&self) -> AppResult<DatabaseConnection> {
        let url = self.settings.url.as_ref().ok_or_else(|| {
            AppError::Config(
                "DATABASE_URL is not set; cannot connect to the defect store".to_string(),
            )
        })?;

        let mut options = ConnectOptions::new(url.expose_secret().to_string());
        options
            .max_connections(self.settings.max_connections)
            .min_connections(self.settings.min_connections)
            .connect_timeout(Duration::from_secs(self.settings.connect_timeout_secs))
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Unavailable(format!("Failed to connect: {}", e)))?;

        Migrator::up(&conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Schema bootstrap failed: {}", e)))?;

        info!(
            max_connections = self.settings.max_connections,
            "Database connection established"
        );

        Ok(conn)
    }
}
