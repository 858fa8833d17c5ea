use utoipa::OpenApi;

use crate::model::{
    api::{DataAccessErrorDto, ErrorDto, FieldErrorDto, ValidationErrorDto},
    client::{
        ClientDto, ClientResponseDto, CreatedClientDto, FileUploadDto, Gender, HotelDto,
        PaginatedClientsDto, PetDto,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Hotel API",
        version = "0.1.0",
        description = "Clients with their pets and hotel."
    ),
    paths(
        crate::server::controller::client::get_clients,
        crate::server::controller::client::get_client,
        crate::server::controller::client::create_client,
        crate::server::controller::client::update_client,
        crate::server::controller::client::delete_client,
        crate::server::controller::client::download_file,
    ),
    components(
        schemas(
            ClientDto,
            PetDto,
            HotelDto,
            Gender,
            ClientResponseDto,
            CreatedClientDto,
            FileUploadDto,
            PaginatedClientsDto,
            ErrorDto,
            FieldErrorDto,
            ValidationErrorDto,
            DataAccessErrorDto,
        )
    ),
    tags(
        (name = "clientes", description = "Client management")
    )
)]
pub struct ApiDoc;
