use super::*;

/// Tests listing clients when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let clients = repo.find_all().await?;

    assert!(clients.is_empty());

    Ok(())
}

/// Tests that clients are returned in alphabetical order by name.
///
/// Expected: Ok with clients ordered by name regardless of insertion order
#[tokio::test]
async fn orders_clients_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Zoraida", "Alberto", "Marta", "Benito"] {
        factory::client::ClientFactory::new(db).name(name).build().await?;
    }

    let repo = ClientRepository::new(db);
    let names: Vec<String> = repo
        .find_all()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Alberto", "Benito", "Marta", "Zoraida"]);

    Ok(())
}

/// Tests that every client comes back with its hotel and pets.
///
/// Verifies that pets are attached to their own client only.
///
/// Expected: Ok with hotel and pets populated per client
#[tokio::test]
async fn loads_hotel_and_pets_for_each_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, owner, pets) = factory::helpers::create_client_with_dependencies(db, 2).await?;
    let loner = factory::client::ClientFactory::new(db)
        .name("Zacarias")
        .build()
        .await?;

    let repo = ClientRepository::new(db);
    let clients = repo.find_all().await?;

    assert_eq!(clients.len(), 2);

    let loaded_owner = clients.iter().find(|c| c.id == owner.id).unwrap();
    assert_eq!(loaded_owner.hotel.as_ref().map(|h| h.id), Some(hotel.id));
    let pet_ids: Vec<i32> = loaded_owner.pets.iter().map(|p| p.id).collect();
    assert_eq!(pet_ids, pets.iter().map(|p| p.id).collect::<Vec<_>>());
    assert!(loaded_owner
        .pets
        .iter()
        .all(|p| p.client_id == Some(owner.id)));

    let loaded_loner = clients.iter().find(|c| c.id == loner.id).unwrap();
    assert!(loaded_loner.hotel.is_none());
    assert!(loaded_loner.pets.is_empty());

    Ok(())
}

/// Tests that a stored gender outside the known values is reported as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_gender() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_client_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    factory::pet::PetFactory::new(db, client.id)
        .gender("OTRO")
        .build()
        .await?;

    let repo = ClientRepository::new(db);
    let result = repo.find_all().await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
