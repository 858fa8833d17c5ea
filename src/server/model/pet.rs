use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::model::client::{Gender, PetDto};

/// Pet owned by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    /// Zero until the pet row exists.
    pub id: i32,
    /// Owning client. Never serialized; `None` for pets built from a request body.
    pub client_id: Option<i32>,
    pub name: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
}

impl Pet {
    /// Converts a pet row, rejecting gender values outside `MACHO`/`HEMBRA`.
    pub fn from_entity(entity: entity::pet::Model) -> Result<Self, DbErr> {
        let gender = match entity.gender {
            Some(raw) => Some(Gender::parse(&raw).ok_or_else(|| {
                DbErr::Custom(format!(
                    "Pet {} has unknown gender value '{}'",
                    entity.id, raw
                ))
            })?),
            None => None,
        };

        Ok(Self {
            id: entity.id,
            client_id: Some(entity.client_id),
            name: entity.name,
            breed: entity.breed,
            birth_date: entity.birth_date,
            gender,
        })
    }

    pub fn from_dto(dto: PetDto) -> Self {
        Self {
            id: dto.id,
            client_id: None,
            name: dto.name.unwrap_or_default(),
            breed: dto.breed,
            birth_date: dto.birth_date,
            gender: dto.gender,
        }
    }

    /// Drops the back-reference to the client.
    pub fn into_dto(self) -> PetDto {
        PetDto {
            id: self.id,
            name: Some(self.name),
            breed: self.breed,
            birth_date: self.birth_date,
            gender: self.gender,
        }
    }
}
