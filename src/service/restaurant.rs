use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{city::CityRepository, restaurant::RestaurantRepository},
    error::AppError,
    model::restaurant::{
        CreateRestaurantParams, PaginatedRestaurants, Restaurant, RestaurantListItem,
        UpdateRestaurantParams,
    },
    service::require_non_empty,
};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a restaurant under an existing city.
    ///
    /// The city lookup and the insert share one transaction, so the new
    /// restaurant can never reference a city that disappeared mid-operation.
    /// Fails with NotFound if the city doesn't exist, leaving no row behind.
    pub async fn create(&self, params: CreateRestaurantParams) -> Result<Restaurant, AppError> {
        require_non_empty("name", &params.name)?;

        let txn = self.db.begin().await?;

        let city_repo = CityRepository::new(&txn);
        if !city_repo.exists(params.city_id).await? {
            return Err(AppError::NotFound(format!(
                "City with id {} not found",
                params.city_id
            )));
        }

        let repo = RestaurantRepository::new(&txn);

        let restaurant = repo.create(params).await?;

        // Fetch full restaurant with resolved relations
        let full_result = repo
            .get_by_id(restaurant.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found after creation".to_string()))?;

        txn.commit().await?;

        Ok(Restaurant::from_with_relations(full_result))
    }

    /// Gets a specific restaurant by ID with resolved city and dishes
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Restaurant>, AppError> {
        let repo = RestaurantRepository::new(self.db);

        let result = repo.get_by_id(id).await?;

        Ok(result.map(Restaurant::from_with_relations))
    }

    /// Gets paginated restaurants with resolved cities and dish counts
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedRestaurants, AppError> {
        let repo = RestaurantRepository::new(self.db);

        let (restaurants, total) = repo.get_paginated(page, per_page).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedRestaurants {
            restaurants: restaurants
                .into_iter()
                .map(RestaurantListItem::from_with_city)
                .collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates a restaurant's name and parent city.
    ///
    /// The relationship is stored only as the restaurant's city reference,
    /// and both fields land in a single row update inside one transaction:
    /// moving a restaurant between cities shrinks the old city's derived
    /// list and grows the new one in the same unit of work, so a reader can
    /// never count the restaurant in both cities, nor in neither. When the
    /// target city equals the current one, only the name changes.
    ///
    /// Returns None if the restaurant doesn't exist; fails with NotFound if
    /// the target city doesn't exist, leaving the restaurant untouched.
    pub async fn update(
        &self,
        params: UpdateRestaurantParams,
    ) -> Result<Option<Restaurant>, AppError> {
        require_non_empty("name", &params.name)?;

        let txn = self.db.begin().await?;

        let repo = RestaurantRepository::new(&txn);
        if !repo.exists(params.id).await? {
            return Ok(None);
        }

        let city_repo = CityRepository::new(&txn);
        if !city_repo.exists(params.city_id).await? {
            return Err(AppError::NotFound(format!(
                "City with id {} not found",
                params.city_id
            )));
        }

        let id = params.id;
        repo.update(params).await?;

        // Fetch full restaurant with resolved relations
        let full_result = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found after update".to_string()))?;

        txn.commit().await?;

        Ok(Some(Restaurant::from_with_relations(full_result)))
    }

    /// Deletes a restaurant and returns its last-known state.
    ///
    /// The parent city's derived restaurant list shrinks with the row in the
    /// same transaction. Returns None if the restaurant doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<Option<Restaurant>, AppError> {
        let txn = self.db.begin().await?;

        let repo = RestaurantRepository::new(&txn);

        let result = repo.get_by_id(id).await?;

        match result {
            Some(result) => {
                repo.delete(id).await?;

                txn.commit().await?;

                Ok(Some(Restaurant::from_with_relations(result)))
            }
            None => Ok(None),
        }
    }
}
