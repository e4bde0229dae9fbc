//! Database initialization
//!
//! Applies the embedded migrations that create the revisions table and its
//! reverse-lookup index.

use sqlx::migrate::MigrateError;
use sqlx::PgPool;

/// Run the embedded migrations in order
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use revision_core_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}
