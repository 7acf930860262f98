use super::*;

/// Tests getting a dish by ID through its own restaurant.
///
/// Expected: Ok(Some) with the dish
#[tokio::test]
async fn gets_dish_scoped_to_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, restaurant) = factory::helpers::create_restaurant_with_city(db).await?;
    let dish = factory::dish::create_dish(db, restaurant.id).await?;

    let repo = DishRepository::new(db);
    let result = repo.get_by_id(restaurant.id, dish.id).await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().id, dish.id);

    Ok(())
}

/// Tests getting a dish through the wrong restaurant.
///
/// Verifies that the scope filter treats a dish belonging to a different
/// restaurant as absent.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_dish_of_other_restaurant() -> Result<(), DbErr> {
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

    let repo = DishRepository::new(db);
    let result = repo.get_by_id(restaurant2.id, dish.id).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests getting a nonexistent dish.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_city, restaurant) = factory::helpers::create_restaurant_with_city(db).await?;

    let repo = DishRepository::new(db);
    let result = repo.get_by_id(restaurant.id, 99999).await?;

    assert!(result.is_none());

    Ok(())
}
