//! In-memory SQLite databases for router-level tests.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// A private in-memory SQLite database with every migration of `M` applied.
///
/// The pool is pinned to a single connection: each SQLite memory connection
/// owns its own database, so a second connection would see empty tables.
///
/// Panics if the database cannot be opened or migrated.
pub async fn migrated_sqlite<M: MigratorTrait>() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(Duration::from_secs(3600))
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite");
    M::up(&db, None).await.expect("failed to apply migrations");
    db
}
