pub mod document_id;
pub mod models;
pub mod test_utils;

use migration::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use util::config;

pub use document_id::{DocumentId, InvalidDocumentId};

/// Opens the shared connection pool and brings the schema up to date.
///
/// `DATABASE_PATH` may be a SQLite file path (parent directories are created) or
/// a DSN; see [`config::database_url`].
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    if config::is_file_database(&path_or_url) {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    let db = Database::connect(config::database_url()).await?;
    tracing::info!(target: "db", "connected to document store");

    Migrator::up(&db, None).await?;
    tracing::info!(target: "db", "schema is up to date");

    Ok(db)
}
