//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a client owning a hotel and `pet_count` pets.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `pet_count` - Number of pets to attach to the client
///
/// # Returns
/// - `Ok((hotel, client, pets))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_client_with_dependencies(
    db: &DatabaseConnection,
    pet_count: usize,
) -> Result<
    (
        entity::hotel::Model,
        entity::client::Model,
        Vec<entity::pet::Model>,
    ),
    DbErr,
> {
    let hotel = crate::factory::hotel::create_hotel(db).await?;
    let client = crate::factory::client::ClientFactory::new(db)
        .hotel_id(hotel.id)
        .build()
        .await?;

    let mut pets = Vec::with_capacity(pet_count);
    for _ in 0..pet_count {
        pets.push(crate::factory::pet::create_pet(db, client.id).await?);
    }

    Ok((hotel, client, pets))
}
