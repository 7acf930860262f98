use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::restaurant::RestaurantSummaryDto;

/// Minimal city representation nested inside restaurant responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CitySummaryDto {
    pub id: i32,
    pub name: String,
}

/// Full city representation with its derived restaurant list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub restaurants: Vec<RestaurantSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCityDto {
    pub name: String,
}

/// City list entry with the derived restaurant count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CityListItemDto {
    pub id: i32,
    pub name: String,
    pub restaurant_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCitiesDto {
    pub cities: Vec<CityListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
