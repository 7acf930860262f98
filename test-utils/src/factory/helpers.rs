//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a restaurant together with its parent city.
///
/// This is a convenience method that creates:
/// 1. City
/// 2. Restaurant attached to that city
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((city, restaurant))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_restaurant_with_city(
    db: &DatabaseConnection,
) -> Result<(entity::city::Model, entity::restaurant::Model), DbErr> {
    let city = crate::factory::city::create_city(db).await?;
    let restaurant = crate::factory::restaurant::create_restaurant(db, city.id).await?;

    Ok((city, restaurant))
}
