use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::dish::{CreateDishParams, UpdateDishParams};

pub struct DishRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> DishRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new dish under the given restaurant
    pub async fn create(&self, params: CreateDishParams) -> Result<entity::dish::Model, DbErr> {
        entity::dish::ActiveModel {
            restaurant_id: ActiveValue::Set(params.restaurant_id),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Gets a dish by ID, scoped to the addressed restaurant.
    ///
    /// A dish that exists but belongs to a different restaurant is treated
    /// as absent.
    pub async fn get_by_id(
        &self,
        restaurant_id: i32,
        dish_id: i32,
    ) -> Result<Option<entity::dish::Model>, DbErr> {
        entity::prelude::Dish::find()
            .filter(entity::dish::Column::Id.eq(dish_id))
            .filter(entity::dish::Column::RestaurantId.eq(restaurant_id))
            .one(self.conn)
            .await
    }

    /// Gets all dishes of a restaurant ordered by name
    pub async fn get_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<entity::dish::Model>, DbErr> {
        entity::prelude::Dish::find()
            .filter(entity::dish::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(entity::dish::Column::Name)
            .all(self.conn)
            .await
    }

    /// Updates a dish's name and price, scoped to the addressed restaurant
    pub async fn update(&self, params: UpdateDishParams) -> Result<entity::dish::Model, DbErr> {
        let dish = self
            .get_by_id(params.restaurant_id, params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Dish with id {} not found in restaurant {}",
                params.id, params.restaurant_id
            )))?;

        let mut active_model: entity::dish::ActiveModel = dish.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.price = ActiveValue::Set(params.price);

        active_model.update(self.conn).await
    }

    /// Deletes a dish
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Dish::delete_by_id(id)
            .exec(self.conn)
            .await?;

        Ok(())
    }
}
