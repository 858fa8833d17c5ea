use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::{Config, LogFormat},
    error::AppError,
    service::file::FileStorage,
};

const DEFAULT_LOG_FILTER: &str = "pet_hotel=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to info level for this crate and
/// the HTTP trace layer. `LogFormat::Json` emits one JSON object per event.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations to ensure the database schema
/// is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the upload directory if needed and returns storage rooted at it.
pub async fn setup_file_storage(config: &Config) -> Result<FileStorage, AppError> {
    let storage = FileStorage::new(&config.upload_dir);
    storage.init().await?;

    tracing::info!("Storing uploaded files in {}", storage.root().display());

    Ok(storage)
}
