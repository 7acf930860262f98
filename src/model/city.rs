//! City domain models and parameters.
//!
//! A city's restaurant list is never stored; it is derived from the
//! `restaurant.city_id` foreign key at query time. The repository result
//! carriers in this module bundle the city row with its derived views.

use crate::{
    dto::city::{CityDto, CityListItemDto, CitySummaryDto, CreateCityDto, PaginatedCitiesDto},
    model::restaurant::RestaurantSummary,
};

/// City row together with its restaurants, derived by foreign key query.
#[derive(Debug, Clone)]
pub struct CityWithRestaurants {
    pub city: entity::city::Model,
    pub restaurants: Vec<entity::restaurant::Model>,
}

/// City row together with its derived restaurant count.
#[derive(Debug, Clone)]
pub struct CityWithCount {
    pub city: entity::city::Model,
    pub restaurant_count: u64,
}

/// Minimal city representation for nesting inside restaurant models.
#[derive(Debug, Clone, PartialEq)]
pub struct CitySummary {
    pub id: i32,
    pub name: String,
}

impl CitySummary {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CitySummaryDto {
        CitySummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Full city domain model with its derived restaurant list.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub restaurants: Vec<RestaurantSummary>,
}

impl City {
    /// Converts a repository result to a domain model.
    pub fn from_with_restaurants(result: CityWithRestaurants) -> Self {
        Self {
            id: result.city.id,
            name: result.city.name,
            restaurants: result
                .restaurants
                .into_iter()
                .map(RestaurantSummary::from_entity)
                .collect(),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
            restaurants: self
                .restaurants
                .into_iter()
                .map(RestaurantSummary::into_dto)
                .collect(),
        }
    }
}

/// City list entry with the derived restaurant count.
#[derive(Debug, Clone, PartialEq)]
pub struct CityListItem {
    pub id: i32,
    pub name: String,
    pub restaurant_count: u64,
}

impl CityListItem {
    /// Converts a repository result to a domain model.
    pub fn from_with_count(result: CityWithCount) -> Self {
        Self {
            id: result.city.id,
            name: result.city.name,
            restaurant_count: result.restaurant_count,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CityListItemDto {
        CityListItemDto {
            id: self.id,
            name: self.name,
            restaurant_count: self.restaurant_count,
        }
    }
}

/// One page of cities with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCities {
    pub cities: Vec<CityListItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCities {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PaginatedCitiesDto {
        PaginatedCitiesDto {
            cities: self.cities.into_iter().map(CityListItem::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating a city.
#[derive(Debug, Clone)]
pub struct CreateCityParams {
    pub name: String,
}

impl CreateCityParams {
    /// Converts the request DTO to operation parameters.
    pub fn from_dto(dto: CreateCityDto) -> Self {
        Self { name: dto.name }
    }
}
