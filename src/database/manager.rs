use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the record store
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

const CREATE_STUDENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "students" (
    "id"                 INTEGER PRIMARY KEY AUTOINCREMENT,
    "student_name"       VARCHAR(100) NOT NULL,
    "batch_year"         VARCHAR(20)  NOT NULL,
    "course_program"     VARCHAR(100) NOT NULL,
    "college_university" VARCHAR(200) NOT NULL,
    "current_status"     VARCHAR(100) NOT NULL,
    "created_at"         TEXT NOT NULL,
    "updated_at"         TEXT NOT NULL
)
"#;

const CREATE_INDEXES: &[&str] = &[
    r#"CREATE INDEX IF NOT EXISTS "idx_students_created_at" ON "students" ("created_at")"#,
    r#"CREATE INDEX IF NOT EXISTS "idx_students_current_status" ON "students" ("current_status")"#,
];

/// Owns the connection pool for the record store.
///
/// Built once at startup and handed to whatever needs storage access.
#[derive(Clone, Debug)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// Open the pool described by `config`, creating the database file if needed
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let timeout = Duration::from_secs(config.connection_timeout);
        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DatabaseError::InvalidDatabaseUrl(format!("{}: {}", config.url, e)))?
            .create_if_missing(true)
            .busy_timeout(timeout);

        // Readers keep going while a writer holds the lock
        if !config.is_in_memory() {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(timeout);

        // Every in-memory connection is its own database, so pin a single one for the pool's lifetime
        pool_options = if config.is_in_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        info!("Created database pool for: {}", config.url);
        Ok(Self { pool })
    }

    /// Create the students table and its indexes if they do not exist yet
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let result = async {
            sqlx::query(CREATE_STUDENTS_TABLE).execute(&mut *tx).await?;
            for statement in CREATE_INDEXES {
                sqlx::query(statement).execute(&mut *tx).await?;
            }
            Ok::<_, sqlx::Error>(())
        }
        .await;

        match result {
            Ok(()) => {
                tx.commit().await?;
                info!("Students schema is up to date");
                Ok(())
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!("Rollback after failed migration also failed: {}", rollback_err);
                }
                Err(DatabaseError::MigrationError(e.to_string()))
            }
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}
