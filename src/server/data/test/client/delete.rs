use super::*;

/// Tests deleting a client with a hotel and pets.
///
/// Verifies no pet still points at the deleted client and the owned hotel is gone.
///
/// Expected: Ok with client, pets and hotel removed
#[tokio::test]
async fn deletes_client_pets_and_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, client, _) = factory::helpers::create_client_with_dependencies(db, 3).await?;

    let repo = ClientRepository::new(db);
    repo.delete(client.id).await?;

    assert!(repo.find_by_id(client.id).await?.is_none());
    let orphaned = entity::prelude::Pet::find()
        .filter(entity::pet::Column::ClientId.eq(client.id))
        .count(db)
        .await?;
    assert_eq!(orphaned, 0);
    assert!(entity::prelude::Hotel::find_by_id(hotel.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that deleting one client leaves the others untouched.
///
/// Expected: Ok with the other client's hotel and pets intact
#[tokio::test]
async fn leaves_other_clients_intact() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, doomed, _) = factory::helpers::create_client_with_dependencies(db, 1).await?;
    let (hotel, kept, pets) = factory::helpers::create_client_with_dependencies(db, 2).await?;

    let repo = ClientRepository::new(db);
    repo.delete(doomed.id).await?;

    let loaded = repo.find_by_id(kept.id).await?.unwrap();
    assert_eq!(loaded.hotel.map(|h| h.id), Some(hotel.id));
    assert_eq!(loaded.pets.len(), pets.len());
    assert_eq!(entity::prelude::Pet::find().count(db).await?, 2);

    Ok(())
}

/// Tests deleting a client without a hotel.
///
/// Expected: Ok with client removed
#[tokio::test]
async fn deletes_client_without_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    repo.delete(client.id).await?;

    assert_eq!(entity::prelude::Client::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a client twice.
///
/// Expected: Err(DbErr::RecordNotFound) on the second attempt
#[tokio::test]
async fn fails_for_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    repo.delete(client.id).await?;
    let result = repo.delete(client.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests that a failing hotel delete keeps the client and its pets.
///
/// A trigger aborts any delete on the hotel table, which is the last step of the
/// cascade.
///
/// Expected: Err with client, pets and hotel still stored
#[tokio::test]
async fn rolls_back_when_hotel_delete_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, client, pets) = factory::helpers::create_client_with_dependencies(db, 2).await?;
    db.execute_unprepared(
        "CREATE TRIGGER keep_hotel BEFORE DELETE ON hotel \
         BEGIN SELECT RAISE(ABORT, 'hotel is locked'); END",
    )
    .await?;

    let repo = ClientRepository::new(db);
    let result = repo.delete(client.id).await;

    assert!(result.is_err());
    let loaded = repo.find_by_id(client.id).await?.unwrap();
    assert_eq!(loaded.hotel.map(|h| h.id), Some(hotel.id));
    assert_eq!(loaded.pets.len(), pets.len());

    Ok(())
}
