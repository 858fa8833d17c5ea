use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::client::ClientRepository,
    error::AppError,
    model::{
        client::{Client, PaginatedClients},
        validation::FieldError,
    },
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every client with hotel and pets, ordered by name.
    pub async fn find_all(&self) -> Result<Vec<Client>, AppError> {
        let repo = ClientRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Gets one page of clients ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Page size, must be at least 1
    ///
    /// # Returns
    /// - `Ok(PaginatedClients)` - Requested page, empty when past the last page
    /// - `Err(AppError::BadRequest)` - `per_page` is 0 or the page offset overflows
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedClients, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest(
                "El tamaño de página debe ser mayor que 0".to_string(),
            ));
        }
        if page.checked_mul(per_page).is_none() {
            return Err(AppError::BadRequest(format!(
                "La página {} está fuera de rango",
                page
            )));
        }

        let repo = ClientRepository::new(self.db);

        let (clients, total) = repo.find_all_paginated(page, per_page).await?;

        Ok(PaginatedClients::new(clients, total, page, per_page))
    }

    /// Gets a client by ID, failing with `NotFound` when it does not exist.
    pub async fn find_by_id(&self, id: i32) -> Result<Client, AppError> {
        let repo = ClientRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| client_not_found(id))
    }

    /// Validates and persists a client graph.
    ///
    /// A client with ID 0 is created, any other ID must already exist and is fully
    /// replaced. Before anything is written the pets are reconciled with the client:
    /// pets without an owner are attached to it, pets that already belong to another
    /// client are rejected.
    ///
    /// The existence and ownership checks read outside the write transaction. A client
    /// deleted in between still fails the update with `NotFound`.
    ///
    /// # Returns
    /// - `Ok(Client)` - The stored graph with server-assigned IDs
    /// - `Err(AppError::Validation)` - Field constraints or pet ownership violated, nothing written
    /// - `Err(AppError::NotFound)` - Update of a client that does not exist
    /// - `Err(AppError::DbErr)` - Database error, nothing written
    pub async fn save(&self, mut client: Client) -> Result<Client, AppError> {
        let errors = client.validate(today());
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let repo = ClientRepository::new(self.db);

        if client.id != 0 && !repo.exists(client.id).await? {
            return Err(client_not_found(client.id));
        }

        self.reconcile_pets(&mut client).await?;

        Ok(repo.save(client).await?)
    }

    /// Deletes a client with its pets and hotel.
    ///
    /// # Returns
    /// - `Ok(Client)` - The graph as it was before deletion
    /// - `Err(AppError::NotFound)` - No client with that ID
    pub async fn delete(&self, id: i32) -> Result<Client, AppError> {
        let repo = ClientRepository::new(self.db);

        let client = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| client_not_found(id))?;

        repo.delete(id).await?;

        Ok(client)
    }

    /// Points every pet at `client` and rejects pets owned by someone else.
    async fn reconcile_pets(&self, client: &mut Client) -> Result<(), AppError> {
        let repo = ClientRepository::new(self.db);
        let mut errors = Vec::new();

        for (index, pet) in client.pets.iter_mut().enumerate() {
            let stored_owner = if pet.id != 0 {
                repo.find_pet_owner(pet.id).await?
            } else {
                None
            };

            let claimed_by_other = pet.client_id.is_some_and(|owner| owner != client.id)
                || stored_owner.is_some_and(|owner| owner != client.id);

            if claimed_by_other {
                errors.push(FieldError::new(
                    format!("mascotas[{}]", index),
                    "La mascota pertenece a otro cliente",
                ));
                continue;
            }

            if stored_owner.is_none() {
                pet.id = 0;
            }
            if client.id != 0 {
                pet.client_id = Some(client.id);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Reference date for registration date validation.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn client_not_found(id: i32) -> AppError {
    AppError::NotFound(format!(
        "El cliente ID: {} no existe en la base de datos!",
        id
    ))
}
