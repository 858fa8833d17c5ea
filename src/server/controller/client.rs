use axum::{
    body::Bytes,
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{DataAccessErrorDto, ErrorDto, ValidationErrorDto},
        client::{
            ClientDto, ClientResponseDto, CreateClientForm, CreatedClientDto, FileUploadDto,
            PaginatedClientsDto,
        },
    },
    server::{
        error::AppError,
        model::client::Client,
        service::client::{today, ClientService},
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "clientes";

/// Multipart part holding the client JSON on creation.
const CLIENT_PART: &str = "cliente";
/// Multipart part holding the optional client image on creation.
const FILE_PART: &str = "file";

/// Query parameters of the client listing. Pagination applies only when both are set.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientListParams {
    /// Zero-indexed page number
    pub page: Option<u64>,
    /// Clients per page, at least 1
    pub size: Option<u64>,
}

/// List clients ordered by name.
///
/// Returns every client with its hotel and pets. When both `page` and `size` are
/// given, returns only that page together with the pagination totals instead.
///
/// # Returns
/// - `200 OK` - Client list, or one page of clients
/// - `400 Bad Request` - `size` is 0
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/clientes",
    tag = CLIENT_TAG,
    params(ClientListParams),
    responses(
        (status = 200, description = "All clients, or a page when page and size are given", body = PaginatedClientsDto),
        (status = 400, description = "Invalid page size", body = ErrorDto),
        (status = 500, description = "Database error", body = DataAccessErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    Query(params): Query<ClientListParams>,
) -> Result<Response, AppError> {
    let service = ClientService::new(&state.db);

    match (params.page, params.size) {
        (Some(page), Some(size)) => {
            let clients = service.find_all_paginated(page, size).await?;

            Ok((StatusCode::OK, Json(clients.into_dto())).into_response())
        }
        _ => {
            let clients: Vec<ClientDto> = service
                .find_all()
                .await?
                .into_iter()
                .map(Client::into_dto)
                .collect();

            Ok((StatusCode::OK, Json(clients)).into_response())
        }
    }
}

/// Get a client by ID with its hotel and pets.
///
/// # Returns
/// - `200 OK` - Client found
/// - `404 Not Found` - No client with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/clientes/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = ClientResponseDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Database error", body = DataAccessErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    let client = service.find_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ClientResponseDto {
            message: "El cliente ha sido encontrado con éxito".to_string(),
            client: client.into_dto(),
        }),
    ))
}

/// Create a client from a multipart form.
///
/// The `cliente` part carries the client JSON. A non-empty `file` part is stored in
/// the upload directory and its stored name replaces `imagenCliente`. The file is only
/// written once the client passes validation.
///
/// # Returns
/// - `201 Created` - Client created, with upload details when a file was sent
/// - `400 Bad Request` - Validation failed or the form is malformed
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/clientes",
    tag = CLIENT_TAG,
    request_body(content = CreateClientForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Client created", body = CreatedClientDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Database error", body = DataAccessErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut payload: Option<ClientDto> = None;
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some(CLIENT_PART) => {
                let bytes = field.bytes().await?;
                payload = Some(serde_json::from_slice(&bytes)?);
            }
            Some(FILE_PART) => {
                let file_name = field.file_name().unwrap_or("file").to_string();
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    upload = Some((file_name, bytes));
                }
            }
            _ => {}
        }
    }

    let payload = payload.ok_or_else(|| {
        AppError::BadRequest(format!("Falta la parte '{}' en la petición", CLIENT_PART))
    })?;

    let mut client = Client::from_dto(payload);
    client.id = 0;

    let upload = upload.map(|(file_name, bytes)| (state.file_storage.reserve(&file_name), bytes));
    if let Some((reserved, _)) = &upload {
        client.image = reserved.file_name.clone();
    }

    let errors = client.validate(today());
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let image = match upload {
        Some((reserved, bytes)) => {
            let size = state.file_storage.save(&reserved, &bytes).await?;

            Some(FileUploadDto {
                download_uri: format!("/clientes/downloadFile/{}", reserved.code),
                file_name: reserved.file_name,
                size,
            })
        }
        None => None,
    };

    let service = ClientService::new(&state.db);

    let client = service.save(client).await?;

    tracing::info!("Created client {}", client.id);

    Ok((
        StatusCode::CREATED,
        Json(CreatedClientDto {
            message: "El cliente ha sido creado con éxito".to_string(),
            client: client.into_dto(),
            image,
        }),
    ))
}

/// Replace a client, its hotel and its pets.
///
/// The ID in the path wins over any ID in the body.
///
/// # Returns
/// - `200 OK` - Client updated
/// - `400 Bad Request` - Validation failed
/// - `404 Not Found` - No client with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/clientes/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = ClientDto,
    responses(
        (status = 200, description = "Client updated", body = ClientResponseDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Database error", body = DataAccessErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ClientDto>,
) -> Result<impl IntoResponse, AppError> {
    if id <= 0 {
        return Err(AppError::NotFound(format!(
            "El cliente ID: {} no existe en la base de datos!",
            id
        )));
    }

    let service = ClientService::new(&state.db);

    let mut client = Client::from_dto(payload);
    client.id = id;

    let client = service.save(client).await?;

    Ok((
        StatusCode::OK,
        Json(ClientResponseDto {
            message: "El cliente ha sido actualizado con éxito".to_string(),
            client: client.into_dto(),
        }),
    ))
}

/// Delete a client together with its pets and hotel.
///
/// # Returns
/// - `200 OK` - Client deleted, body holds the removed graph
/// - `404 Not Found` - No client with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/clientes/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client deleted", body = ClientResponseDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Database error", body = DataAccessErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    let client = service.delete(id).await?;

    tracing::info!("Deleted client {}", id);

    Ok((
        StatusCode::OK,
        Json(ClientResponseDto {
            message: "El cliente ha sido eliminado con éxito".to_string(),
            client: client.into_dto(),
        }),
    ))
}

/// Download a stored client image by its file code.
///
/// # Returns
/// - `200 OK` - File bytes as an attachment
/// - `404 Not Found` - No stored file starts with that code
#[utoipa::path(
    get,
    path = "/clientes/downloadFile/{file_code}",
    tag = CLIENT_TAG,
    params(
        ("file_code" = String, Path, description = "Code returned in downloadUri on upload")
    ),
    responses(
        (status = 200, description = "File contents", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, description = "File not found", body = ErrorDto)
    ),
)]
pub async fn download_file(
    State(state): State<AppState>,
    Path(file_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let path = state
        .file_storage
        .find(&file_code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Archivo no encontrado: {}", file_code)))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().replace('"', ""))
        .unwrap_or_else(|| file_code.clone());

    let bytes = tokio::fs::read(&path).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    ))
}
