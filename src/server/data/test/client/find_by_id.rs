use super::*;

/// Tests getting a client with its hotel and pets.
///
/// Expected: Ok(Some) with full graph
#[tokio::test]
async fn gets_client_with_hotel_and_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, client, pets) = factory::helpers::create_client_with_dependencies(db, 2).await?;

    let repo = ClientRepository::new(db);
    let loaded = repo.find_by_id(client.id).await?.unwrap();

    assert_eq!(loaded.id, client.id);
    assert_eq!(loaded.name, client.name);
    assert_eq!(loaded.image, client.image);
    assert_eq!(loaded.hotel.unwrap().name, hotel.name);
    assert_eq!(loaded.pets.len(), pets.len());

    Ok(())
}

/// Tests getting a client that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let loaded = repo.find_by_id(999).await?;

    assert!(loaded.is_none());

    Ok(())
}

/// Tests that pets of other clients are not attached.
///
/// Expected: Ok(Some) with only the client's own pets
#[tokio::test]
async fn excludes_pets_of_other_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first, _) = factory::helpers::create_client_with_dependencies(db, 1).await?;
    let (_, second, _) = factory::helpers::create_client_with_dependencies(db, 3).await?;

    let repo = ClientRepository::new(db);
    let loaded = repo.find_by_id(first.id).await?.unwrap();

    assert_eq!(loaded.pets.len(), 1);
    assert!(loaded.pets.iter().all(|p| p.client_id == Some(first.id)));
    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests the pet owner lookup used for ownership checks.
///
/// Expected: Ok(Some(owner)) for a stored pet and Ok(None) for a missing one
#[tokio::test]
async fn finds_pet_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, client, pets) = factory::helpers::create_client_with_dependencies(db, 1).await?;

    let repo = ClientRepository::new(db);

    assert_eq!(repo.find_pet_owner(pets[0].id).await?, Some(client.id));
    assert_eq!(repo.find_pet_owner(pets[0].id + 100).await?, None);
    assert!(repo.exists(client.id).await?);
    assert!(!repo.exists(client.id + 100).await?);

    Ok(())
}
