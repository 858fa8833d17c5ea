//! Client domain model and its validation rules.
//!
//! A `Client` is the aggregate root of the graph: it owns at most one `Hotel` and a
//! collection of `Pet`s. Conversions to and from entity models happen in the data layer,
//! conversions to and from DTOs in the controllers.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::client::{ClientDto, PaginatedClientsDto},
    server::model::{hotel::Hotel, pet::Pet, validation::FieldError},
};

pub const NAME_MIN_LEN: usize = 4;
pub const NAME_MAX_LEN: usize = 25;

/// Client with its hotel and pets loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// Zero for a client that has not been inserted yet.
    pub id: i32,
    pub name: String,
    pub surname: Option<String>,
    pub registration_date: Option<NaiveDate>,
    /// Stored file name of the client image, empty when missing.
    pub image: String,
    pub hotel: Option<Hotel>,
    pub pets: Vec<Pet>,
}

impl Client {
    /// Builds the domain graph from a client row and its already fetched associations.
    ///
    /// # Arguments
    /// - `entity` - Client row
    /// - `hotel` - Hotel joined on `client.hotel_id`, if any
    /// - `pets` - Pet rows whose `client_id` is this client
    ///
    /// # Returns
    /// - `Ok(Client)` - Converted client
    /// - `Err(DbErr::Custom)` - A pet row holds an unknown gender value
    pub fn from_entity(
        entity: entity::client::Model,
        hotel: Option<entity::hotel::Model>,
        pets: Vec<entity::pet::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            registration_date: entity.registration_date,
            image: entity.image,
            hotel: hotel.map(Hotel::from_entity),
            pets: pets
                .into_iter()
                .map(Pet::from_entity)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    /// Converts a request body into a domain client.
    ///
    /// Missing required strings become empty so `validate` can report them.
    pub fn from_dto(dto: ClientDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            surname: dto.surname,
            registration_date: dto.registration_date,
            image: dto.image.unwrap_or_default(),
            hotel: dto.hotel.map(Hotel::from_dto),
            pets: dto.pets.into_iter().map(Pet::from_dto).collect(),
        }
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            name: Some(self.name),
            surname: self.surname,
            registration_date: self.registration_date,
            image: Some(self.image),
            hotel: self.hotel.map(Hotel::into_dto),
            pets: self.pets.into_iter().map(Pet::into_dto).collect(),
        }
    }

    /// Checks the client and its owned entities against the field constraints.
    ///
    /// An empty name only reports the emptiness, not the length. Length is counted in
    /// characters, not bytes.
    ///
    /// # Arguments
    /// - `today` - Reference date for the past-or-present check
    ///
    /// # Returns
    /// - Every violated rule; an empty vec means the client is valid
    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name_len = self.name.chars().count();
        if name_len == 0 {
            errors.push(FieldError::new(
                "nombre",
                "El nombre no puede estar vacío",
            ));
        } else if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
            errors.push(FieldError::new(
                "nombre",
                format!(
                    "El nombre tiene que estar entre {} y {} caracteres",
                    NAME_MIN_LEN, NAME_MAX_LEN
                ),
            ));
        }

        if self.registration_date.is_some_and(|date| date > today) {
            errors.push(FieldError::new(
                "fechaAlta",
                "La fecha de alta debe ser una fecha en el pasado o en el presente",
            ));
        }

        if self.image.is_empty() {
            errors.push(FieldError::new(
                "imagenCliente",
                "La imagen del cliente no puede ser nula",
            ));
        }

        if let Some(hotel) = &self.hotel {
            if hotel.name.is_empty() {
                errors.push(FieldError::new(
                    "hotel.nombre",
                    "El nombre del hotel no puede estar vacío",
                ));
            }
        }

        for (index, pet) in self.pets.iter().enumerate() {
            if pet.name.is_empty() {
                errors.push(FieldError::new(
                    format!("mascotas[{}].nombre", index),
                    "El nombre de la mascota no puede estar vacío",
                ));
            }
        }

        errors
    }
}

/// One page of clients ordered by name.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedClients {
    pub clients: Vec<Client>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedClients {
    pub fn new(clients: Vec<Client>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            clients,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    pub fn into_dto(self) -> PaginatedClientsDto {
        PaginatedClientsDto {
            clients: self.clients.into_iter().map(Client::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
