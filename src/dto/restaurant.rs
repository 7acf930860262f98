use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::{city::CitySummaryDto, dish::DishDto};

/// Minimal restaurant representation nested inside city responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantSummaryDto {
    pub id: i32,
    pub name: String,
}

/// Full restaurant representation with its resolved parent city and dishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub city: CitySummaryDto,
    pub dishes: Vec<DishDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantDto {
    pub name: String,
    pub city_id: i32,
}

/// Update payload; `city_id` may differ from the current city to move the
/// restaurant, or match it for a name-only update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateRestaurantDto {
    pub name: String,
    pub city_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantListItemDto {
    pub id: i32,
    pub name: String,
    pub city: CitySummaryDto,
    pub dish_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedRestaurantsDto {
    pub restaurants: Vec<RestaurantListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
