//! Restaurant factory for creating test restaurant entities.
//!
//! Provides factory methods for creating restaurant entities attached to an
//! existing city. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
///
/// Provides a builder pattern for creating restaurant entities with default
/// values that can be overridden as needed. The parent city must exist before
/// the restaurant is built, since `city_id` carries a foreign key constraint.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::restaurant::RestaurantFactory;
///
/// let restaurant = RestaurantFactory::new(&db, city.id)
///     .name("Happy Pizza")
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    city_id: i32,
    name: String,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `city_id` - Identifier of the parent city the restaurant belongs to
    ///
    /// # Returns
    /// - `RestaurantFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            city_id,
            name: format!("Restaurant {}", id),
        }
    }

    /// Sets the restaurant name.
    ///
    /// # Arguments
    /// - `name` - Display name for the restaurant
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the restaurant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant::Model)` - Created restaurant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        entity::restaurant::ActiveModel {
            id: ActiveValue::NotSet,
            city_id: ActiveValue::Set(self.city_id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant with default values under the specified city.
///
/// Shorthand for `RestaurantFactory::new(db, city_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `city_id` - Identifier of the parent city
///
/// # Returns
/// - `Ok(entity::restaurant::Model)` - Created restaurant entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_restaurant(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db, city_id).build().await
}
