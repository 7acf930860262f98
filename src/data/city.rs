use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::city::{CityWithCount, CityWithRestaurants, CreateCityParams};

pub struct CityRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new city with an empty (derived) restaurant list
    pub async fn create(&self, params: CreateCityParams) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Gets a city by ID with its restaurants derived from the foreign key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CityWithRestaurants>, DbErr> {
        let city_result = entity::prelude::City::find_by_id(id).one(self.conn).await?;

        if let Some(city) = city_result {
            let restaurants = entity::prelude::Restaurant::find()
                .filter(entity::restaurant::Column::CityId.eq(city.id))
                .order_by_asc(entity::restaurant::Column::Name)
                .all(self.conn)
                .await?;

            Ok(Some(CityWithRestaurants { city, restaurants }))
        } else {
            Ok(None)
        }
    }

    /// Gets paginated cities with their derived restaurant counts
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<CityWithCount>, u64), DbErr> {
        let paginator = entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Name)
            .paginate(self.conn, per_page);

        let total = paginator.num_items().await?;
        let cities = paginator.fetch_page(page).await?;

        let mut results = Vec::new();
        for city in cities {
            let restaurant_count = self.restaurant_count(city.id).await?;

            results.push(CityWithCount {
                city,
                restaurant_count,
            });
        }

        Ok((results, total))
    }

    /// Number of restaurants whose parent reference points at the city
    pub async fn restaurant_count(&self, city_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::CityId.eq(city_id))
            .count(self.conn)
            .await
    }

    /// Checks if a city exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::City::find()
            .filter(entity::city::Column::Id.eq(id))
            .count(self.conn)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a city; restaurants and dishes cascade with the row
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::City::delete_by_id(id)
            .exec(self.conn)
            .await?;

        Ok(())
    }
}
