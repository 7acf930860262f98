use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::restaurant::{
    CreateRestaurantParams, RestaurantWithCity, RestaurantWithRelations, UpdateRestaurantParams,
};

pub struct RestaurantRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new restaurant under the given city
    pub async fn create(
        &self,
        params: CreateRestaurantParams,
    ) -> Result<entity::restaurant::Model, DbErr> {
        entity::restaurant::ActiveModel {
            city_id: ActiveValue::Set(params.city_id),
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Gets a restaurant by ID with its resolved parent city and dish list
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RestaurantWithRelations>, DbErr> {
        let result = entity::prelude::Restaurant::find_by_id(id)
            .find_also_related(entity::prelude::City)
            .one(self.conn)
            .await?;

        if let Some((restaurant, city)) = result {
            // city_id is NOT NULL with a foreign key, so the join must resolve
            let city = city.ok_or(DbErr::RecordNotFound(format!(
                "City with id {} referenced by restaurant {} not found",
                restaurant.city_id, restaurant.id
            )))?;

            let dishes = entity::prelude::Dish::find()
                .filter(entity::dish::Column::RestaurantId.eq(restaurant.id))
                .order_by_asc(entity::dish::Column::Name)
                .all(self.conn)
                .await?;

            Ok(Some(RestaurantWithRelations {
                restaurant,
                city,
                dishes,
            }))
        } else {
            Ok(None)
        }
    }

    /// Gets paginated restaurants with resolved cities and dish counts
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<RestaurantWithCity>, u64), DbErr> {
        let paginator = entity::prelude::Restaurant::find()
            .find_also_related(entity::prelude::City)
            .order_by_asc(entity::restaurant::Column::Name)
            .paginate(self.conn, per_page);

        let total = paginator.num_items().await?;
        let restaurants = paginator.fetch_page(page).await?;

        let mut results = Vec::new();
        for (restaurant, city) in restaurants {
            let city = city.ok_or(DbErr::RecordNotFound(format!(
                "City with id {} referenced by restaurant {} not found",
                restaurant.city_id, restaurant.id
            )))?;

            let dish_count = entity::prelude::Dish::find()
                .filter(entity::dish::Column::RestaurantId.eq(restaurant.id))
                .count(self.conn)
                .await?;

            results.push(RestaurantWithCity {
                restaurant,
                city,
                dish_count,
            });
        }

        Ok((results, total))
    }

    /// Updates a restaurant's name and parent city reference.
    ///
    /// Both fields land in one row update: the parent reference is the only
    /// stored side of the relationship, so a re-parent leaves the old city's
    /// derived list and the new city's derived list consistent in the same
    /// statement.
    pub async fn update(
        &self,
        params: UpdateRestaurantParams,
    ) -> Result<entity::restaurant::Model, DbErr> {
        let restaurant = entity::prelude::Restaurant::find_by_id(params.id)
            .one(self.conn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Restaurant with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::restaurant::ActiveModel = restaurant.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.city_id = ActiveValue::Set(params.city_id);

        active_model.update(self.conn).await
    }

    /// Deletes a restaurant; dishes cascade with the row
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Restaurant::delete_by_id(id)
            .exec(self.conn)
            .await?;

        Ok(())
    }

    /// Checks if a restaurant exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::Id.eq(id))
            .count(self.conn)
            .await?;

        Ok(count > 0)
    }
}
