//! Client factory for creating test client entities.
//!
//! Clients are created without a hotel by default; chain `hotel_id` to attach one
//! created through the hotel factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test clients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client::ClientFactory;
///
/// let client = ClientFactory::new(&db)
///     .name("Laura")
///     .surname("Gómez")
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surname: Option<String>,
    registration_date: Option<NaiveDate>,
    image: String,
    hotel_id: Option<i32>,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Client {id}"` where id is auto-incremented
    /// - surname: `None`
    /// - registration_date: today (UTC)
    /// - image: `"image-{id}.png"`
    /// - hotel_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Client {}", id),
            surname: None,
            registration_date: Some(Utc::now().date_naive()),
            image: format!("image-{}.png", id),
            hotel_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    pub fn registration_date(mut self, date: Option<NaiveDate>) -> Self {
        self.registration_date = date;
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn hotel_id(mut self, hotel_id: i32) -> Self {
        self.hotel_id = Some(hotel_id);
        self
    }

    /// Builds and inserts the client entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            registration_date: ActiveValue::Set(self.registration_date),
            image: ActiveValue::Set(self.image),
            hotel_id: ActiveValue::Set(self.hotel_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values and no hotel.
///
/// Shorthand for `ClientFactory::new(db).build().await`.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
