//! Restaurant domain models and parameters.
//!
//! The restaurant's parent city reference is the single source of truth for
//! the city-restaurant relationship; every model here resolves the parent by
//! joining on that foreign key.

use crate::{
    dto::restaurant::{
        CreateRestaurantDto, PaginatedRestaurantsDto, RestaurantDto, RestaurantListItemDto,
        RestaurantSummaryDto, UpdateRestaurantDto,
    },
    model::{city::CitySummary, dish::Dish},
};

/// Restaurant row with its resolved parent city and dish list.
#[derive(Debug, Clone)]
pub struct RestaurantWithRelations {
    pub restaurant: entity::restaurant::Model,
    pub city: entity::city::Model,
    pub dishes: Vec<entity::dish::Model>,
}

/// Restaurant row with its resolved parent city and dish count.
#[derive(Debug, Clone)]
pub struct RestaurantWithCity {
    pub restaurant: entity::restaurant::Model,
    pub city: entity::city::Model,
    pub dish_count: u64,
}

/// Minimal restaurant representation for nesting inside city models.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
}

impl RestaurantSummary {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RestaurantSummaryDto {
        RestaurantSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Full restaurant domain model with resolved relations.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub city: CitySummary,
    pub dishes: Vec<Dish>,
}

impl Restaurant {
    /// Converts a repository result to a domain model.
    pub fn from_with_relations(result: RestaurantWithRelations) -> Self {
        Self {
            id: result.restaurant.id,
            name: result.restaurant.name,
            city: CitySummary::from_entity(result.city),
            dishes: result.dishes.into_iter().map(Dish::from_entity).collect(),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            city: self.city.into_dto(),
            dishes: self.dishes.into_iter().map(Dish::into_dto).collect(),
        }
    }
}

/// Restaurant list entry with resolved city and dish count.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantListItem {
    pub id: i32,
    pub name: String,
    pub city: CitySummary,
    pub dish_count: u64,
}

impl RestaurantListItem {
    /// Converts a repository result to a domain model.
    pub fn from_with_city(result: RestaurantWithCity) -> Self {
        Self {
            id: result.restaurant.id,
            name: result.restaurant.name,
            city: CitySummary::from_entity(result.city),
            dish_count: result.dish_count,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RestaurantListItemDto {
        RestaurantListItemDto {
            id: self.id,
            name: self.name,
            city: self.city.into_dto(),
            dish_count: self.dish_count,
        }
    }
}

/// One page of restaurants with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedRestaurants {
    pub restaurants: Vec<RestaurantListItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedRestaurants {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PaginatedRestaurantsDto {
        PaginatedRestaurantsDto {
            restaurants: self
                .restaurants
                .into_iter()
                .map(RestaurantListItem::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating a restaurant under an existing city.
#[derive(Debug, Clone)]
pub struct CreateRestaurantParams {
    pub name: String,
    pub city_id: i32,
}

impl CreateRestaurantParams {
    /// Converts the request DTO to operation parameters.
    pub fn from_dto(dto: CreateRestaurantDto) -> Self {
        Self {
            name: dto.name,
            city_id: dto.city_id,
        }
    }
}

/// Parameters for updating a restaurant's name and parent city.
#[derive(Debug, Clone)]
pub struct UpdateRestaurantParams {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
}

impl UpdateRestaurantParams {
    /// Converts the request DTO to operation parameters.
    pub fn from_dto(id: i32, dto: UpdateRestaurantDto) -> Self {
        Self {
            id,
            name: dto.name,
            city_id: dto.city_id,
        }
    }
}
