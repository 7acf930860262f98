use super::*;

/// Tests creating a new city.
///
/// Verifies that the repository successfully creates a city record with the
/// specified name and an auto-assigned ID.
///
/// Expected: Ok with city created
#[tokio::test]
async fn creates_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let result = repo
        .create(CreateCityParams {
            name: "Porto".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let city = result.unwrap();
    assert!(city.id > 0);
    assert_eq!(city.name, "Porto");

    // Verify city exists in database
    let db_city = entity::prelude::City::find_by_id(city.id).one(db).await?;
    assert!(db_city.is_some());
    assert_eq!(db_city.unwrap().name, "Porto");

    Ok(())
}

/// Tests that a freshly created city has no restaurants.
///
/// Verifies that the derived restaurant list of a new city is empty, since
/// no restaurant row references it yet.
///
/// Expected: Ok with empty restaurant list
#[tokio::test]
async fn creates_city_with_empty_restaurant_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let city = repo
        .create(CreateCityParams {
            name: "Lisbon".to_string(),
        })
        .await?;

    let result = repo.get_by_id(city.id).await?.unwrap();
    assert!(result.restaurants.is_empty());

    Ok(())
}

/// Tests creating multiple cities.
///
/// Verifies that multiple cities can be created and each receives its own
/// unique ID.
///
/// Expected: Ok with both cities created independently
#[tokio::test]
async fn creates_multiple_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let city1 = repo
        .create(CreateCityParams {
            name: "Porto".to_string(),
        })
        .await?;
    let city2 = repo
        .create(CreateCityParams {
            name: "Berlin".to_string(),
        })
        .await?;

    assert_ne!(city1.id, city2.id);

    let count = entity::prelude::City::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
