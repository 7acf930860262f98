use super::*;

/// Tests getting a restaurant with resolved relations.
///
/// Expected: Ok(Some) with city and dishes
#[tokio::test]
async fn gets_restaurant_with_relations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, restaurant) = factory::helpers::create_restaurant_with_city(db).await?;
    let dish = factory::dish::create_dish(db, restaurant.id).await?;

    let service = RestaurantService::new(db);
    let result = service.get_by_id(restaurant.id).await?;

    assert!(result.is_some());
    let result = result.unwrap();
    assert_eq!(result.id, restaurant.id);
    assert_eq!(result.city.id, city.id);
    assert_eq!(result.dishes.len(), 1);
    assert_eq!(result.dishes[0].id, dish.id);

    Ok(())
}

/// Tests getting a nonexistent restaurant.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_restaurant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RestaurantService::new(db);
    let result = service.get_by_id(99999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that repeated reads return equal results.
///
/// Expected: Ok with identical results
#[tokio::test]
async fn repeated_reads_are_equal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, restaurant) = factory::helpers::create_restaurant_with_city(db).await?;
    factory::dish::create_dish(db, restaurant.id).await?;

    let service = RestaurantService::new(db);
    let first = service.get_by_id(restaurant.id).await?.unwrap();
    let second = service.get_by_id(restaurant.id).await?.unwrap();

    assert_eq!(first, second);

    Ok(())
}
