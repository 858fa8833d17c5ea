//! Client data repository.
//!
//! Every read returns the full client graph: the hotel is joined in the same query as
//! the client rows and the pets of all returned clients are fetched with one batched
//! `IN` query, so loading a page costs two queries regardless of its size. Writes
//! cascade to the hotel and pets explicitly inside a single transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::server::model::{client::Client, hotel::Hotel, pet::Pet};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every client ordered by name, ties broken by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Client>)` - All clients with hotel and pets, empty if there are none
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<Client>, DbErr> {
        let rows = entity::prelude::Client::find()
            .find_also_related(entity::prelude::Hotel)
            .order_by_asc(entity::client::Column::Name)
            .order_by_asc(entity::client::Column::Id)
            .all(self.db)
            .await?;

        load_graphs(self.db, rows).await
    }

    /// Gets one page of clients ordered by name.
    ///
    /// The count and the content come from the same client-hotel join. The hotel
    /// relation is one-to-one so the join never adds rows, and pets are loaded
    /// separately, so `total` is always the number of clients.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of clients per page, must be at least 1
    ///
    /// # Returns
    /// - `Ok((clients, total))` - Clients on the page and total number of clients
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Client>, u64), DbErr> {
        let paginator = entity::prelude::Client::find()
            .find_also_related(entity::prelude::Hotel)
            .order_by_asc(entity::client::Column::Name)
            .order_by_asc(entity::client::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;
        let clients = load_graphs(self.db, rows).await?;

        Ok((clients, total))
    }

    /// Gets a client by ID with its hotel and pets.
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - Client found
    /// - `Ok(None)` - No client with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Client>, DbErr> {
        let row = entity::prelude::Client::find_by_id(id)
            .find_also_related(entity::prelude::Hotel)
            .one(self.db)
            .await?;

        match row {
            Some(row) => Ok(load_graphs(self.db, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Checks whether a client row exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Client::find()
            .filter(entity::client::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the ID of the client owning a pet, `None` if the pet does not exist.
    pub async fn find_pet_owner(&self, pet_id: i32) -> Result<Option<i32>, DbErr> {
        let pet = entity::prelude::Pet::find_by_id(pet_id).one(self.db).await?;

        Ok(pet.map(|p| p.client_id))
    }

    /// Inserts or fully replaces a client together with its hotel and pets.
    ///
    /// A client with ID 0 is inserted along with a new hotel row and new pet rows.
    /// Otherwise the client row is overwritten; the hotel is updated in place,
    /// inserted or deleted to match, pets with a known ID are updated, the rest are
    /// inserted and stored pets missing from `client.pets` are deleted.
    ///
    /// # Arguments
    /// - `client` - Client graph to persist
    ///
    /// # Returns
    /// - `Ok(Client)` - The persisted graph re-read from the database
    /// - `Err(DbErr::RecordNotFound)` - Update of a client ID that does not exist
    /// - `Err(DbErr)` - Constraint violation or other database error; nothing is written
    pub async fn save(&self, client: Client) -> Result<Client, DbErr> {
        let txn = self.db.begin().await?;

        let id = if client.id == 0 {
            insert_graph(&txn, client).await?
        } else {
            update_graph(&txn, client).await?
        };

        txn.commit().await?;

        self.find_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Client with id {} not found after save",
            id
        )))
    }

    /// Deletes a client, its pets and its hotel.
    ///
    /// # Returns
    /// - `Ok(())` - Client and owned rows deleted
    /// - `Err(DbErr::RecordNotFound)` - No client with that ID
    /// - `Err(DbErr)` - Database error; nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let client = entity::prelude::Client::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Client with id {} not found",
                id
            )))?;

        let pets = entity::prelude::Pet::delete_many()
            .filter(entity::pet::Column::ClientId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Client::delete_by_id(id).exec(&txn).await?;

        if let Some(hotel_id) = client.hotel_id {
            entity::prelude::Hotel::delete_by_id(hotel_id)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        debug!(
            "Deleted client {} with {} pet(s) and hotel {:?}",
            id, pets.rows_affected, client.hotel_id
        );

        Ok(())
    }
}

/// Attaches pets to client rows using a single query for all of them.
async fn load_graphs<C: ConnectionTrait>(
    db: &C,
    rows: Vec<(entity::client::Model, Option<entity::hotel::Model>)>,
) -> Result<Vec<Client>, DbErr> {
    let client_ids: Vec<i32> = rows.iter().map(|(client, _)| client.id).collect();

    let mut pets_by_client: HashMap<i32, Vec<entity::pet::Model>> = HashMap::new();
    if !client_ids.is_empty() {
        let pets = entity::prelude::Pet::find()
            .filter(entity::pet::Column::ClientId.is_in(client_ids))
            .order_by_asc(entity::pet::Column::Id)
            .all(db)
            .await?;

        for pet in pets {
            pets_by_client.entry(pet.client_id).or_default().push(pet);
        }
    }

    rows.into_iter()
        .map(|(client, hotel)| {
            let pets = pets_by_client.remove(&client.id).unwrap_or_default();
            Client::from_entity(client, hotel, pets)
        })
        .collect()
}

async fn insert_graph<C: ConnectionTrait>(db: &C, client: Client) -> Result<i32, DbErr> {
    let hotel_id = match client.hotel {
        Some(hotel) => Some(insert_hotel(db, hotel).await?),
        None => None,
    };

    let inserted = entity::client::ActiveModel {
        name: ActiveValue::Set(client.name),
        surname: ActiveValue::Set(client.surname),
        registration_date: ActiveValue::Set(client.registration_date),
        image: ActiveValue::Set(client.image),
        hotel_id: ActiveValue::Set(hotel_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for pet in client.pets {
        insert_pet(db, inserted.id, pet).await?;
    }

    debug!("Inserted client {} with hotel {:?}", inserted.id, hotel_id);

    Ok(inserted.id)
}

async fn update_graph<C: ConnectionTrait>(db: &C, client: Client) -> Result<i32, DbErr> {
    let existing = entity::prelude::Client::find_by_id(client.id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!(
            "Client with id {} not found",
            client.id
        )))?;

    let stale_hotel_id = match (existing.hotel_id, &client.hotel) {
        (Some(_), None) => existing.hotel_id,
        _ => None,
    };

    let hotel_id = match (existing.hotel_id, client.hotel) {
        (Some(hotel_id), Some(hotel)) => {
            update_hotel(db, hotel_id, hotel).await?;
            Some(hotel_id)
        }
        (None, Some(hotel)) => Some(insert_hotel(db, hotel).await?),
        (_, None) => None,
    };

    let mut active_model: entity::client::ActiveModel = existing.into();
    active_model.name = ActiveValue::Set(client.name);
    active_model.surname = ActiveValue::Set(client.surname);
    active_model.registration_date = ActiveValue::Set(client.registration_date);
    active_model.image = ActiveValue::Set(client.image);
    active_model.hotel_id = ActiveValue::Set(hotel_id);
    active_model.update(db).await?;

    if let Some(stale_hotel_id) = stale_hotel_id {
        entity::prelude::Hotel::delete_by_id(stale_hotel_id)
            .exec(db)
            .await?;
    }

    let existing_pets: HashMap<i32, entity::pet::Model> = entity::prelude::Pet::find()
        .filter(entity::pet::Column::ClientId.eq(client.id))
        .all(db)
        .await?
        .into_iter()
        .map(|pet| (pet.id, pet))
        .collect();

    let mut kept_pet_ids = HashSet::new();
    for pet in client.pets {
        match existing_pets.get(&pet.id) {
            Some(stored) => {
                kept_pet_ids.insert(stored.id);
                update_pet(db, stored.clone(), pet).await?;
            }
            None => {
                insert_pet(db, client.id, pet).await?;
            }
        }
    }

    let removed_pet_ids: Vec<i32> = existing_pets
        .keys()
        .filter(|id| !kept_pet_ids.contains(*id))
        .copied()
        .collect();

    if !removed_pet_ids.is_empty() {
        entity::prelude::Pet::delete_many()
            .filter(entity::pet::Column::Id.is_in(removed_pet_ids.clone()))
            .exec(db)
            .await?;
    }

    debug!(
        "Updated client {}: hotel {:?}, removed pets {:?}",
        client.id, hotel_id, removed_pet_ids
    );

    Ok(client.id)
}

async fn insert_hotel<C: ConnectionTrait>(db: &C, hotel: Hotel) -> Result<i32, DbErr> {
    let inserted = entity::hotel::ActiveModel {
        name: ActiveValue::Set(hotel.name),
        address: ActiveValue::Set(hotel.address),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(inserted.id)
}

async fn update_hotel<C: ConnectionTrait>(db: &C, id: i32, hotel: Hotel) -> Result<(), DbErr> {
    entity::hotel::ActiveModel {
        id: ActiveValue::Unchanged(id),
        name: ActiveValue::Set(hotel.name),
        address: ActiveValue::Set(hotel.address),
    }
    .update(db)
    .await?;

    Ok(())
}

async fn insert_pet<C: ConnectionTrait>(db: &C, client_id: i32, pet: Pet) -> Result<(), DbErr> {
    entity::pet::ActiveModel {
        client_id: ActiveValue::Set(client_id),
        name: ActiveValue::Set(pet.name),
        breed: ActiveValue::Set(pet.breed),
        birth_date: ActiveValue::Set(pet.birth_date),
        gender: ActiveValue::Set(pet.gender.map(|g| g.as_str().to_string())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

async fn update_pet<C: ConnectionTrait>(
    db: &C,
    stored: entity::pet::Model,
    pet: Pet,
) -> Result<(), DbErr> {
    let mut active_model: entity::pet::ActiveModel = stored.into();
    active_model.name = ActiveValue::Set(pet.name);
    active_model.breed = ActiveValue::Set(pet.breed);
    active_model.birth_date = ActiveValue::Set(pet.birth_date);
    active_model.gender = ActiveValue::Set(pet.gender.map(|g| g.as_str().to_string()));
    active_model.update(db).await?;

    Ok(())
}
