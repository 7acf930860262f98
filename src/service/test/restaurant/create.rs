use super::*;

/// Tests creating a restaurant through the service.
///
/// Verifies that the returned domain model carries the resolved parent city,
/// an empty dish list, and that the restaurant counts toward its city.
///
/// Expected: Ok with created restaurant
#[tokio::test]
async fn creates_restaurant_in_existing_city() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::CityFactory::new(db)
        .name("Porto")
        .build()
        .await?;

    let service = RestaurantService::new(db);
    let restaurant = service
        .create(CreateRestaurantParams {
            name: "Happy Pizza".to_string(),
            city_id: city.id,
        })
        .await?;

    assert!(restaurant.id > 0);
    assert_eq!(restaurant.name, "Happy Pizza");
    assert_eq!(restaurant.city.id, city.id);
    assert_eq!(restaurant.city.name, "Porto");
    assert!(restaurant.dishes.is_empty());

    // The new restaurant counts toward its city
    let repo = CityRepository::new(db);
    assert_eq!(repo.restaurant_count(city.id).await?, 1);

    Ok(())
}

/// Tests creating a restaurant in a nonexistent city.
///
/// Verifies that the operation fails before any write, leaving no orphan
/// restaurant row behind.
///
/// Expected: Err(NotFound) with no row written
#[tokio::test]
async fn fails_for_nonexistent_city() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RestaurantService::new(db);
    let result = service
        .create(CreateRestaurantParams {
            name: "Orphan".to_string(),
            city_id: 99999,
        })
        .await;

    match result {
        Err(AppError::NotFound(_)) => (),
        other => panic!("Expected NotFound error, got {:?}", other),
    }

    let count = entity::prelude::Restaurant::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests creating a restaurant with an empty name.
///
/// Expected: Err(Validation) with no row written
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;

    let service = RestaurantService::new(db);
    let result = service
        .create(CreateRestaurantParams {
            name: "".to_string(),
            city_id: city.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    let count = entity::prelude::Restaurant::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
