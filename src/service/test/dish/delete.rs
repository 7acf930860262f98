use super::*;

/// Tests deleting a dish through the service.
///
/// Expected: Ok(Some) with last-known state
#[tokio::test]
async fn deletes_dish_and_returns_last_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, restaurant) = factory::helpers::create_restaurant_with_city(db).await?;
    let dish = factory::dish::DishFactory::new(db, restaurant.id)
        .name("Francesinha")
        .price(12.5)
        .build()
        .await?;

    let service = DishService::new(db);
    let deleted = service.delete(restaurant.id, dish.id).await?;

    assert!(deleted.is_some());
    let deleted = deleted.unwrap();
    assert_eq!(deleted.id, dish.id);
    assert_eq!(deleted.name, "Francesinha");
    assert_eq!(deleted.price, 12.5);

    // Verify dish is gone
    let db_dish = entity::prelude::Dish::find_by_id(dish.id).one(db).await?;
    assert!(db_dish.is_none());

    Ok(())
}

/// Tests deleting a dish through the wrong restaurant.
///
/// Expected: Ok(None) with dish untouched
#[tokio::test]
async fn returns_none_for_dish_of_other_restaurant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let restaurant1 = factory::restaurant::create_restaurant(db, city.id).await?;
    let restaurant2 = factory::restaurant::create_restaurant(db, city.id).await?;
    let dish = factory::dish::create_dish(db, restaurant1.id).await?;

    let service = DishService::new(db);
    let result = service.delete(restaurant2.id, dish.id).await?;

    assert!(result.is_none());

    let db_dish = entity::prelude::Dish::find_by_id(dish.id).one(db).await?;
    assert!(db_dish.is_some());

    Ok(())
}

/// Tests deleting the same dish twice.
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

    let (_city, restaurant) = factory::helpers::create_restaurant_with_city(db).await?;
    let dish = factory::dish::create_dish(db, restaurant.id).await?;

    let service = DishService::new(db);
    assert!(service.delete(restaurant.id, dish.id).await?.is_some());
    assert!(service.delete(restaurant.id, dish.id).await?.is_none());

    Ok(())
}
