use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pet gender, serialized by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "MACHO")]
    Male,
    #[serde(rename = "HEMBRA")]
    Female,
}

impl Gender {
    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MACHO",
            Self::Female => "HEMBRA",
        }
    }

    /// Parses the stored representation, `None` for anything but the two known values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MACHO" => Some(Self::Male),
            "HEMBRA" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Client as sent and received over HTTP.
///
/// Every field is optional on input so partially populated bodies deserialize and
/// reach validation instead of failing in serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClientDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "apellidos")]
    pub surname: Option<String>,
    #[serde(rename = "fechaAlta")]
    pub registration_date: Option<NaiveDate>,
    #[serde(rename = "imagenCliente")]
    pub image: Option<String>,
    pub hotel: Option<HotelDto>,
    #[serde(rename = "mascotas")]
    pub pets: Vec<PetDto>,
}

/// Pet as sent and received over HTTP.
///
/// Carries no reference back to its client, the owning side is the client's
/// `mascotas` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PetDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "raza")]
    pub breed: Option<String>,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "genero")]
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct HotelDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
}

/// Single client wrapped with a human readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientResponseDto {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "cliente")]
    pub client: ClientDto,
}

/// Response of a multipart client creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedClientDto {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "cliente")]
    pub client: ClientDto,
    #[serde(rename = "imagen", skip_serializing_if = "Option::is_none")]
    pub image: Option<FileUploadDto>,
}

/// Multipart form accepted by `POST /clientes`.
#[derive(ToSchema)]
pub struct CreateClientForm {
    pub cliente: ClientDto,
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<Vec<u8>>,
}

/// Describes a stored upload and where to download it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadDto {
    pub file_name: String,
    pub download_uri: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedClientsDto {
    #[serde(rename = "clientes")]
    pub clients: Vec<ClientDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
