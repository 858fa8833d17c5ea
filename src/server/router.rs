use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::client::{
        create_client, delete_client, download_file, get_client, get_clients, update_client,
    },
    openapi::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clientes", get(get_clients).post(create_client))
        .route(
            "/clientes/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/clientes/downloadFile/{file_code}", get(download_file))
}

/// Builds the complete application with API docs and middleware applied.
///
/// # Arguments
/// - `state` - Shared application state
/// - `max_upload_bytes` - Request body limit, bounds multipart uploads
pub fn app(state: AppState, max_upload_bytes: usize) -> Router {
    router()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
