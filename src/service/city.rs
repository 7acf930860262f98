use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::city::CityRepository,
    error::AppError,
    model::city::{City, CityListItem, CreateCityParams, PaginatedCities},
    service::require_non_empty,
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new city with an empty restaurant list
    pub async fn create(&self, params: CreateCityParams) -> Result<City, AppError> {
        require_non_empty("name", &params.name)?;

        let repo = CityRepository::new(self.db);

        let city = repo.create(params).await?;

        // Fetch full city with derived restaurants
        let full_result = repo
            .get_by_id(city.id)
            .await?
            .ok_or_else(|| AppError::NotFound("City not found after creation".to_string()))?;

        Ok(City::from_with_restaurants(full_result))
    }

    /// Gets a specific city by ID with its derived restaurant list
    pub async fn get_by_id(&self, id: i32) -> Result<Option<City>, AppError> {
        let repo = CityRepository::new(self.db);

        let result = repo.get_by_id(id).await?;

        Ok(result.map(City::from_with_restaurants))
    }

    /// Gets paginated cities with derived restaurant counts
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedCities, AppError> {
        let repo = CityRepository::new(self.db);

        let (cities, total) = repo.get_paginated(page, per_page).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedCities {
            cities: cities.into_iter().map(CityListItem::from_with_count).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Deletes a city and returns its last-known state.
    ///
    /// Restaurants and dishes cascade with the row inside the same
    /// transaction, so no restaurant can survive referencing a deleted city.
    /// Returns None if the city doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<Option<City>, AppError> {
        let txn = self.db.begin().await?;

        let repo = CityRepository::new(&txn);

        let result = repo.get_by_id(id).await?;

        match result {
            Some(result) => {
                repo.delete(id).await?;

                txn.commit().await?;

                Ok(Some(City::from_with_restaurants(result)))
            }
            None => Ok(None),
        }
    }
}
