use super::*;

/// Tests paginating restaurants with resolved cities and dish counts.
///
/// Expected: Ok with page metadata and resolved entries
#[tokio::test]
async fn gets_paginated_restaurants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let restaurant1 = factory::restaurant::create_restaurant(db, city.id).await?;
    let _restaurant2 = factory::restaurant::create_restaurant(db, city.id).await?;
    factory::dish::create_dish(db, restaurant1.id).await?;

    let service = RestaurantService::new(db);
    let page = service.get_paginated(0, 10).await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.restaurants.len(), 2);

    let entry = page
        .restaurants
        .iter()
        .find(|r| r.id == restaurant1.id)
        .unwrap();
    assert_eq!(entry.city.id, city.id);
    assert_eq!(entry.dish_count, 1);

    Ok(())
}

/// Tests the total pages calculation with a partial last page.
///
/// Expected: Ok with total_pages rounded up
#[tokio::test]
async fn rounds_total_pages_up() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    for _ in 0..4 {
        factory::restaurant::create_restaurant(db, city.id).await?;
    }

    let service = RestaurantService::new(db);
    let page = service.get_paginated(0, 3).await?;

    assert_eq!(page.total, 4);
    assert_eq!(page.total_pages, 2);

    Ok(())
}
