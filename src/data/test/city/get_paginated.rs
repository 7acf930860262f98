use super::*;

/// Tests getting paginated cities.
///
/// Verifies that the repository returns the first page and the total number
/// of cities.
///
/// Expected: Ok with page contents and total
#[tokio::test]
async fn gets_paginated_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::city::create_city(db).await?;
    }

    let repo = CityRepository::new(db);
    let (cities, total) = repo.get_paginated(0, 3).await?;

    assert_eq!(cities.len(), 3);
    assert_eq!(total, 5);

    Ok(())
}

/// Tests getting the last partial page.
///
/// Expected: Ok with the remaining cities
#[tokio::test]
async fn gets_last_partial_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::city::create_city(db).await?;
    }

    let repo = CityRepository::new(db);
    let (cities, total) = repo.get_paginated(1, 3).await?;

    assert_eq!(cities.len(), 2);
    assert_eq!(total, 5);

    Ok(())
}

/// Tests that each city entry carries its derived restaurant count.
///
/// Expected: Ok with correct per-city counts
#[tokio::test]
async fn includes_restaurant_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city1 = factory::city::create_city(db).await?;
    let city2 = factory::city::create_city(db).await?;
    factory::restaurant::create_restaurant(db, city1.id).await?;
    factory::restaurant::create_restaurant(db, city1.id).await?;

    let repo = CityRepository::new(db);
    let (cities, _) = repo.get_paginated(0, 10).await?;

    let entry1 = cities.iter().find(|c| c.city.id == city1.id).unwrap();
    let entry2 = cities.iter().find(|c| c.city.id == city2.id).unwrap();

    assert_eq!(entry1.restaurant_count, 2);
    assert_eq!(entry2.restaurant_count, 0);

    Ok(())
}

/// Tests paginating an empty table.
///
/// Expected: Ok with empty page and zero total
#[tokio::test]
async fn returns_empty_page_when_no_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let (cities, total) = repo.get_paginated(0, 10).await?;

    assert!(cities.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
