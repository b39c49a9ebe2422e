/// Database migration runner
///
/// This module provides utilities for running and inspecting database
/// migrations using sqlx's migration system.
///
/// # Migration Files
///
/// Migrations are stored in the `migrations/` directory at the workspace root
/// and embedded into the binary with `sqlx::migrate!`.
///
/// # Example
///
/// ```no_run
/// use taskhub_shared::db::pool::{create_pool, DatabaseConfig};
/// use taskhub_shared::db::migrations::{run_migrations, get_migration_status};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///
///     run_migrations(&pool).await?;
///
///     let status = get_migration_status(&pool).await?;
///     println!("Applied {} migrations", status.applied_migrations);
///
///     Ok(())
/// }
/// ```

use sqlx::{migrate::MigrateDatabase, postgres::PgPool, Postgres};
use tracing::{debug, info, warn};

/// Migration status information
#[derive(Debug, Clone)]
pub struct MigrationStatus {
    /// Number of migrations that have been applied
    pub applied_migrations: usize,

    /// Latest applied migration version (timestamp)
    pub latest_version: Option<i64>,
}

/// Runs all pending database migrations
///
/// Migrations are run in a transaction when possible. If a migration fails,
/// it is rolled back and an error is returned.
///
/// # Errors
///
/// Returns an error if:
/// - A migration file is malformed
/// - A migration fails to execute
/// - Database connection is lost during migration
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("../migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}

/// Gets the current migration status
///
/// Returns how many migrations have been applied and the latest version.
///
/// # Errors
///
/// Returns an error if the migrations table cannot be queried
pub async fn get_migration_status(pool: &PgPool) -> Result<MigrationStatus, sqlx::Error> {
    debug!("Checking migration status");

    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = '_sqlx_migrations'
        )",
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        debug!("Migrations table does not exist yet");
        return Ok(MigrationStatus {
            applied_migrations: 0,
            latest_version: None,
        });
    }

    let (count, latest_version): (i64, Option<i64>) = sqlx::query_as(
        "SELECT
            COUNT(*) as count,
            MAX(version) as latest_version
         FROM _sqlx_migrations
         WHERE success = true",
    )
    .fetch_one(pool)
    .await?;

    debug!(
        applied_migrations = count,
        latest_version = ?latest_version,
        "Migration status retrieved"
    );

    Ok(MigrationStatus {
        applied_migrations: count as usize,
        latest_version,
    })
}

/// Creates the database if it doesn't exist
///
/// This is useful for development and testing. In production, the database
/// should already exist.
///
/// # Errors
///
/// Returns an error if:
/// - Cannot connect to the PostgreSQL server
/// - Don't have permission to create databases
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    info!("Checking if database exists");

    if !Postgres::database_exists(database_url).await? {
        info!("Database does not exist, creating it");
        Postgres::create_database(database_url).await?;
        info!("Database created successfully");
    } else {
        debug!("Database already exists");
    }

    Ok(())
}
