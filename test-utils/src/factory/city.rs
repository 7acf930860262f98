//! City factory for creating test city entities.
//!
//! Provides factory methods for creating city entities with sensible defaults,
//! reducing boilerplate in tests. The factory supports customization through a
//! builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities with customizable fields.
///
/// Provides a builder pattern for creating city entities with default values
/// that can be overridden as needed for specific test scenarios. Each factory
/// instance gets a unique auto-incremented name to prevent conflicts when
/// creating multiple cities.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::city::CityFactory;
///
/// let city = CityFactory::new(&db)
///     .name("Porto")
///     .build()
///     .await?;
/// ```
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CityFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            name: format!("City {}", id),
        }
    }

    /// Sets the city name.
    ///
    /// # Arguments
    /// - `name` - Display name for the city
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the city entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::city::Model)` - Created city entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values.
///
/// Shorthand for `CityFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::city::Model)` - Created city entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}
