use super::*;

/// Tests inserting a client graph.
///
/// Verifies the store assigns ids to the client, its hotel and its pets and that
/// reading it back yields the same values.
///
/// Expected: Ok with the persisted graph equal to the input except for ids
#[tokio::test]
async fn inserts_client_with_hotel_and_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut client = new_client("Laura");
    client.hotel = Some(new_hotel("Gran Hotel"));
    client.pets = vec![new_pet("Rex", Gender::Male), new_pet("Luna", Gender::Female)];

    let repo = ClientRepository::new(db);
    let saved = repo.save(client.clone()).await?;

    assert!(saved.id > 0);
    assert!(saved.hotel.as_ref().unwrap().id > 0);
    assert!(saved.pets.iter().all(|p| p.id > 0));
    assert!(saved.pets.iter().all(|p| p.client_id == Some(saved.id)));

    let loaded = repo.find_by_id(saved.id).await?.unwrap();
    assert_eq!(loaded, saved);

    let mut expected = client;
    expected.id = saved.id;
    if let (Some(hotel), Some(saved_hotel)) = (expected.hotel.as_mut(), saved.hotel.as_ref()) {
        hotel.id = saved_hotel.id;
    }
    for (pet, saved_pet) in expected.pets.iter_mut().zip(saved.pets.iter()) {
        pet.id = saved_pet.id;
        pet.client_id = Some(saved.id);
    }
    assert_eq!(loaded, expected);

    Ok(())
}

/// Tests the Laura and Rex scenario end to end at the data layer.
///
/// Expected: Ok with exactly one pet named Rex whose gender is MACHO
#[tokio::test]
async fn inserts_client_with_single_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut client = new_client("Laura");
    client.pets = vec![new_pet("Rex", Gender::Male)];

    let repo = ClientRepository::new(db);
    let saved = repo.save(client).await?;
    let loaded = repo.find_by_id(saved.id).await?.unwrap();

    assert_eq!(loaded.pets.len(), 1);
    assert_eq!(loaded.pets[0].name, "Rex");
    assert_eq!(loaded.pets[0].gender, Some(Gender::Male));
    assert_eq!(loaded.pets[0].gender.unwrap().as_str(), "MACHO");

    let stored = entity::prelude::Pet::find_by_id(loaded.pets[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.gender.as_deref(), Some("MACHO"));

    Ok(())
}

/// Tests that an update replaces every client field.
///
/// Expected: Ok with new values and unchanged id
#[tokio::test]
async fn updates_client_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let saved = repo.save(new_client("Laura")).await?;

    let mut changed = saved.clone();
    changed.name = "Lorena".to_string();
    changed.surname = None;
    changed.registration_date = NaiveDate::from_ymd_opt(2020, 1, 1);
    changed.image = "other.png".to_string();

    let updated = repo.save(changed.clone()).await?;

    assert_eq!(updated, changed);
    assert_eq!(entity::prelude::Client::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an update reconciles the pet collection.
///
/// Kept pets are updated in place, new pets are inserted and pets missing from the
/// collection are deleted.
///
/// Expected: Ok with pets matching the new collection
#[tokio::test]
async fn updates_pet_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut client = new_client("Laura");
    client.pets = vec![new_pet("Rex", Gender::Male), new_pet("Luna", Gender::Female)];

    let repo = ClientRepository::new(db);
    let saved = repo.save(client).await?;
    let rex_id = saved.pets[0].id;
    let luna_id = saved.pets[1].id;

    let mut changed = saved.clone();
    changed.pets[0].name = "Rex II".to_string();
    changed.pets[0].breed = Some("Beagle".to_string());
    changed.pets.remove(1);
    changed.pets.push(new_pet("Toby", Gender::Male));

    let updated = repo.save(changed).await?;

    assert_eq!(updated.pets.len(), 2);
    assert_eq!(updated.pets[0].id, rex_id);
    assert_eq!(updated.pets[0].name, "Rex II");
    assert_eq!(updated.pets[0].breed.as_deref(), Some("Beagle"));
    assert_eq!(updated.pets[1].name, "Toby");
    assert!(entity::prelude::Pet::find_by_id(luna_id).one(db).await?.is_none());

    Ok(())
}

/// Tests that an update can add, change and remove the hotel.
///
/// Expected: Ok with the hotel row following the client's hotel
#[tokio::test]
async fn updates_hotel_relation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let saved = repo.save(new_client("Laura")).await?;
    assert!(saved.hotel.is_none());

    let mut with_hotel = saved.clone();
    with_hotel.hotel = Some(new_hotel("Hostal Sol"));
    let with_hotel = repo.save(with_hotel).await?;
    let hotel_id = with_hotel.hotel.as_ref().unwrap().id;

    let mut renamed = with_hotel.clone();
    renamed.hotel.as_mut().unwrap().name = "Hostal Luna".to_string();
    let renamed = repo.save(renamed).await?;
    assert_eq!(renamed.hotel.as_ref().unwrap().id, hotel_id);
    assert_eq!(renamed.hotel.as_ref().unwrap().name, "Hostal Luna");

    let mut without_hotel = renamed;
    without_hotel.hotel = None;
    let without_hotel = repo.save(without_hotel).await?;

    assert!(without_hotel.hotel.is_none());
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating a client id that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) and no row written
#[tokio::test]
async fn fails_to_update_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut client = new_client("Laura");
    client.id = 42;
    client.hotel = Some(new_hotel("Gran Hotel"));

    let repo = ClientRepository::new(db);
    let result = repo.save(client).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(entity::prelude::Client::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failing pet insert leaves no trace of the graph.
///
/// The pet table is dropped so the client and hotel inserts succeed and the pet
/// insert fails inside the same transaction.
///
/// Expected: Err with no client and no hotel rows
#[tokio::test]
async fn rolls_back_graph_when_pet_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared("DROP TABLE pet").await?;

    let mut client = new_client("Laura");
    client.hotel = Some(new_hotel("Gran Hotel"));
    client.pets = vec![new_pet("Rex", Gender::Male)];

    let repo = ClientRepository::new(db);
    let result = repo.save(client).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Client::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Hotel::find().count(db).await?, 0);

    Ok(())
}
