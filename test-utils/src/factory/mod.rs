//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let city = factory::city::create_city(&db).await?;
//!     let restaurant = factory::restaurant::create_restaurant(&db, city.id).await?;
//!
//!     // Create with all dependencies
//!     let (city, restaurant) = factory::helpers::create_restaurant_with_city(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let city = factory::city::CityFactory::new(&db)
//!     .name("Porto")
//!     .build()
//!     .await?;
//!
//! let dish = factory::dish::DishFactory::new(&db, restaurant.id)
//!     .name("Francesinha")
//!     .price(12.5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `city` - Create city entities
//! - `restaurant` - Create restaurant entities attached to a city
//! - `dish` - Create dish entities attached to a restaurant
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod city;
pub mod dish;
pub mod helpers;
pub mod restaurant;

// Re-export commonly used factory functions for concise usage
pub use city::create_city;
pub use dish::create_dish;
pub use restaurant::create_restaurant;
