use crate::model::client::HotelDto;

/// Hotel owned by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    /// Zero until the hotel row exists.
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

impl Hotel {
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    pub fn from_dto(dto: HotelDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            address: dto.address,
        }
    }

    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: Some(self.name),
            address: self.address,
        }
    }
}
