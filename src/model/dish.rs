//! Dish domain models and parameters.
//!
//! Dishes are leaf data scoped to a single restaurant; they carry no
//! relationship logic of their own.

use crate::dto::dish::{CreateDishDto, DishDto, UpdateDishDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl Dish {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::dish::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> DishDto {
        DishDto {
            id: self.id,
            name: self.name,
            price: self.price,
        }
    }
}

/// Parameters for creating a dish under an existing restaurant.
#[derive(Debug, Clone)]
pub struct CreateDishParams {
    pub restaurant_id: i32,
    pub name: String,
    pub price: f64,
}

impl CreateDishParams {
    /// Converts the request DTO to operation parameters.
    pub fn from_dto(restaurant_id: i32, dto: CreateDishDto) -> Self {
        Self {
            restaurant_id,
            name: dto.name,
            price: dto.price,
        }
    }
}

/// Parameters for updating a dish, scoped to its restaurant.
#[derive(Debug, Clone)]
pub struct UpdateDishParams {
    pub restaurant_id: i32,
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl UpdateDishParams {
    /// Converts the request DTO to operation parameters.
    pub fn from_dto(restaurant_id: i32, dish_id: i32, dto: UpdateDishDto) -> Self {
        Self {
            restaurant_id,
            id: dish_id,
            name: dto.name,
            price: dto.price,
        }
    }
}
