//! Pet factory for creating test pet entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test pets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let pet = PetFactory::new(&db, client.id)
///     .name("Rex")
///     .gender("MACHO")
///     .build()
///     .await?;
/// ```
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    name: String,
    breed: Option<String>,
    birth_date: Option<NaiveDate>,
    gender: Option<String>,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {id}"` where id is auto-incremented
    /// - breed, birth_date: `None`
    /// - gender: `"HEMBRA"`
    pub fn new(db: &'a DatabaseConnection, client_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            client_id,
            name: format!("Pet {}", id),
            breed: None,
            birth_date: None,
            gender: Some("HEMBRA".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Sets the raw stored gender value.
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Builds and inserts the pet entity into the database.
    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            id: ActiveValue::NotSet,
            client_id: ActiveValue::Set(self.client_id),
            name: ActiveValue::Set(self.name),
            breed: ActiveValue::Set(self.breed),
            birth_date: ActiveValue::Set(self.birth_date),
            gender: ActiveValue::Set(self.gender),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pet with default values owned by the given client.
///
/// Shorthand for `PetFactory::new(db, client_id).build().await`.
pub async fn create_pet(db: &DatabaseConnection, client_id: i32) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db, client_id).build().await
}
