mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(config.log_format);

    let db = startup::connect_to_database(&config).await?;
    let file_storage = startup::setup_file_storage(&config).await?;

    let app = router::app(AppState::new(db, file_storage), config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
