use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{dish::DishRepository, restaurant::RestaurantRepository},
    error::AppError,
    model::dish::{CreateDishParams, Dish, UpdateDishParams},
    service::require_non_empty,
};

pub struct DishService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a dish under an existing restaurant.
    ///
    /// Fails with NotFound if the restaurant doesn't exist, leaving no row
    /// behind.
    pub async fn create(&self, params: CreateDishParams) -> Result<Dish, AppError> {
        require_non_empty("name", &params.name)?;

        let txn = self.db.begin().await?;

        let restaurant_repo = RestaurantRepository::new(&txn);
        if !restaurant_repo.exists(params.restaurant_id).await? {
            return Err(AppError::NotFound(format!(
                "Restaurant with id {} not found",
                params.restaurant_id
            )));
        }

        let repo = DishRepository::new(&txn);

        let dish = repo.create(params).await?;

        txn.commit().await?;

        Ok(Dish::from_entity(dish))
    }

    /// Gets all dishes of a restaurant.
    ///
    /// Fails with NotFound if the restaurant doesn't exist.
    pub async fn get_by_restaurant(&self, restaurant_id: i32) -> Result<Vec<Dish>, AppError> {
        let restaurant_repo = RestaurantRepository::new(self.db);
        if !restaurant_repo.exists(restaurant_id).await? {
            return Err(AppError::NotFound(format!(
                "Restaurant with id {} not found",
                restaurant_id
            )));
        }

        let repo = DishRepository::new(self.db);

        let dishes = repo.get_by_restaurant(restaurant_id).await?;

        Ok(dishes.into_iter().map(Dish::from_entity).collect())
    }

    /// Gets a dish scoped to the addressed restaurant.
    ///
    /// Returns None when the dish doesn't exist or belongs to a different
    /// restaurant.
    pub async fn get_by_id(
        &self,
        restaurant_id: i32,
        dish_id: i32,
    ) -> Result<Option<Dish>, AppError> {
        let repo = DishRepository::new(self.db);

        let dish = repo.get_by_id(restaurant_id, dish_id).await?;

        Ok(dish.map(Dish::from_entity))
    }

    /// Updates a dish's name and price, scoped to the addressed restaurant.
    ///
    /// Returns None when the dish doesn't exist or belongs to a different
    /// restaurant.
    pub async fn update(&self, params: UpdateDishParams) -> Result<Option<Dish>, AppError> {
        require_non_empty("name", &params.name)?;

        let txn = self.db.begin().await?;

        let repo = DishRepository::new(&txn);
        if repo.get_by_id(params.restaurant_id, params.id).await?.is_none() {
            return Ok(None);
        }

        let dish = repo.update(params).await?;

        txn.commit().await?;

        Ok(Some(Dish::from_entity(dish)))
    }

    /// Deletes a dish scoped to the addressed restaurant and returns its
    /// last-known state.
    ///
    /// Returns None when the dish doesn't exist or belongs to a different
    /// restaurant.
    pub async fn delete(&self, restaurant_id: i32, dish_id: i32) -> Result<Option<Dish>, AppError> {
        let txn = self.db.begin().await?;

        let repo = DishRepository::new(&txn);

        let dish = repo.get_by_id(restaurant_id, dish_id).await?;

        match dish {
            Some(dish) => {
                repo.delete(dish.id).await?;

                txn.commit().await?;

                Ok(Some(Dish::from_entity(dish)))
            }
            None => Ok(None),
        }
    }
}
