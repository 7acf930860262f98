//! Dish factory for creating test dish entities.
//!
//! Provides factory methods for creating dish entities attached to an existing
//! restaurant. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dishes with customizable fields.
///
/// Provides a builder pattern for creating dish entities with default values
/// that can be overridden as needed. The parent restaurant must exist before
/// the dish is built, since `restaurant_id` carries a foreign key constraint.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dish::DishFactory;
///
/// let dish = DishFactory::new(&db, restaurant.id)
///     .name("Francesinha")
///     .price(12.5)
///     .build()
///     .await?;
/// ```
pub struct DishFactory<'a> {
    db: &'a DatabaseConnection,
    restaurant_id: i32,
    name: String,
    price: f64,
}

impl<'a> DishFactory<'a> {
    /// Creates a new DishFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `restaurant_id` - Identifier of the parent restaurant
    ///
    /// # Returns
    /// - `DishFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            restaurant_id,
            name: format!("Dish {}", id),
            price: 9.99,
        }
    }

    /// Sets the dish name.
    ///
    /// # Arguments
    /// - `name` - Display name for the dish
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the dish price.
    ///
    /// # Arguments
    /// - `price` - Price of the dish
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the dish entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dish::Model)` - Created dish entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dish::Model, DbErr> {
        entity::dish::ActiveModel {
            id: ActiveValue::NotSet,
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dish with default values under the specified restaurant.
///
/// Shorthand for `DishFactory::new(db, restaurant_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `restaurant_id` - Identifier of the parent restaurant
///
/// # Returns
/// - `Ok(entity::dish::Model)` - Created dish entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_dish(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::dish::Model, DbErr> {
    DishFactory::new(db, restaurant_id).build().await
}
