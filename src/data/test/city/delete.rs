use super::*;

/// Tests deleting a city.
///
/// Expected: Ok with city removed from database
#[tokio::test]
async fn deletes_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;

    let repo = CityRepository::new(db);
    repo.delete(city.id).await?;

    let db_city = entity::prelude::City::find_by_id(city.id).one(db).await?;
    assert!(db_city.is_none());

    Ok(())
}

/// Tests that deleting a city cascades to its restaurants and dishes.
///
/// Verifies that no restaurant or dish row survives pointing at the deleted
/// city.
///
/// Expected: Ok with restaurants and dishes removed
#[tokio::test]
async fn delete_cascades_to_restaurants_and_dishes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let restaurant = factory::restaurant::create_restaurant(db, city.id).await?;
    factory::dish::create_dish(db, restaurant.id).await?;
    factory::dish::create_dish(db, restaurant.id).await?;

    let repo = CityRepository::new(db);
    repo.delete(city.id).await?;

    let restaurant_count = entity::prelude::Restaurant::find()
        .filter(entity::restaurant::Column::CityId.eq(city.id))
        .count(db)
        .await?;
    assert_eq!(restaurant_count, 0);

    let dish_count = entity::prelude::Dish::find()
        .filter(entity::dish::Column::RestaurantId.eq(restaurant.id))
        .count(db)
        .await?;
    assert_eq!(dish_count, 0);

    Ok(())
}

/// Tests that deleting one city leaves other cities untouched.
///
/// Expected: Ok with only the addressed city removed
#[tokio::test]
async fn delete_leaves_other_cities_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city1 = factory::city::create_city(db).await?;
    let city2 = factory::city::create_city(db).await?;
    let restaurant2 = factory::restaurant::create_restaurant(db, city2.id).await?;

    let repo = CityRepository::new(db);
    repo.delete(city1.id).await?;

    let db_city2 = entity::prelude::City::find_by_id(city2.id).one(db).await?;
    assert!(db_city2.is_some());

    let db_restaurant2 = entity::prelude::Restaurant::find_by_id(restaurant2.id)
        .one(db)
        .await?;
    assert!(db_restaurant2.is_some());

    Ok(())
}
