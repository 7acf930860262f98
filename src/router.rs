use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        city::{self, CITY_TAG},
        dish::{self, DISH_TAG},
        restaurant::{self, RESTAURANT_TAG},
    },
    dto,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        city::create_city,
        city::get_cities,
        city::get_city_by_id,
        city::delete_city,
        restaurant::create_restaurant,
        restaurant::get_restaurants,
        restaurant::get_restaurant_by_id,
        restaurant::update_restaurant,
        restaurant::delete_restaurant,
        dish::create_dish,
        dish::get_dishes,
        dish::get_dish_by_id,
        dish::update_dish,
        dish::delete_dish,
    ),
    components(schemas(
        dto::api::ErrorDto,
        dto::city::CityDto,
        dto::city::CitySummaryDto,
        dto::city::CreateCityDto,
        dto::city::CityListItemDto,
        dto::city::PaginatedCitiesDto,
        dto::restaurant::RestaurantDto,
        dto::restaurant::RestaurantSummaryDto,
        dto::restaurant::CreateRestaurantDto,
        dto::restaurant::UpdateRestaurantDto,
        dto::restaurant::RestaurantListItemDto,
        dto::restaurant::PaginatedRestaurantsDto,
        dto::dish::DishDto,
        dto::dish::CreateDishDto,
        dto::dish::UpdateDishDto,
    )),
    tags(
        (name = CITY_TAG, description = "City management endpoints"),
        (name = RESTAURANT_TAG, description = "Restaurant management endpoints"),
        (name = DISH_TAG, description = "Dish management endpoints")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cities", get(city::get_cities).post(city::create_city))
        .route(
            "/api/cities/{city_id}",
            get(city::get_city_by_id).delete(city::delete_city),
        )
        .route(
            "/api/restaurants",
            get(restaurant::get_restaurants).post(restaurant::create_restaurant),
        )
        .route(
            "/api/restaurants/{restaurant_id}",
            get(restaurant::get_restaurant_by_id)
                .put(restaurant::update_restaurant)
                .delete(restaurant::delete_restaurant),
        )
        .route(
            "/api/restaurants/{restaurant_id}/dishes",
            get(dish::get_dishes).post(dish::create_dish),
        )
        .route(
            "/api/restaurants/{restaurant_id}/dishes/{dish_id}",
            get(dish::get_dish_by_id)
                .put(dish::update_dish)
                .delete(dish::delete_dish),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
