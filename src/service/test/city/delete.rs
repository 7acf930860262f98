use super::*;

/// Tests deleting a city through the service.
///
/// Verifies that the last-known state is returned, including the derived
/// restaurant list at the time of deletion.
///
/// Expected: Ok(Some) with last-known state
#[tokio::test]
async fn deletes_city_and_returns_last_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let restaurant = factory::restaurant::create_restaurant(db, city.id).await?;

    let service = CityService::new(db);
    let deleted = service.delete(city.id).await?;

    assert!(deleted.is_some());
    let deleted = deleted.unwrap();
    assert_eq!(deleted.id, city.id);
    assert_eq!(deleted.restaurants.len(), 1);
    assert_eq!(deleted.restaurants[0].id, restaurant.id);

    // Verify city is gone
    let db_city = entity::prelude::City::find_by_id(city.id).one(db).await?;
    assert!(db_city.is_none());

    Ok(())
}

/// Tests that the cascade removes restaurants and dishes with the city.
///
/// Expected: Ok with no surviving child rows
#[tokio::test]
async fn delete_cascades_to_children() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let restaurant = factory::restaurant::create_restaurant(db, city.id).await?;
    factory::dish::create_dish(db, restaurant.id).await?;

    let service = CityService::new(db);
    service.delete(city.id).await?;

    let restaurant_count = entity::prelude::Restaurant::find().count(db).await?;
    assert_eq!(restaurant_count, 0);

    let dish_count = entity::prelude::Dish::find().count(db).await?;
    assert_eq!(dish_count, 0);

    Ok(())
}

/// Tests deleting a nonexistent city.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_city() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CityService::new(db);
    let result = service.delete(99999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests deleting the same city twice.
///
/// Expected: Ok(Some) then Ok(None)
#[tokio::test]
async fn second_delete_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;

    let service = CityService::new(db);
    assert!(service.delete(city.id).await?.is_some());
    assert!(service.delete(city.id).await?.is_none());

    Ok(())
}
