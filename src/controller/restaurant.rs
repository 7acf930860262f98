use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::PaginationParams,
    dto::{
        api::ErrorDto,
        restaurant::{
            CreateRestaurantDto, PaginatedRestaurantsDto, RestaurantDto, UpdateRestaurantDto,
        },
    },
    error::AppError,
    model::restaurant::{CreateRestaurantParams, UpdateRestaurantParams},
    service::restaurant::RestaurantService,
    state::AppState,
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

/// Create a new restaurant.
///
/// Creates a new restaurant in the referenced city. The city must already
/// exist; the restaurant appears in that city's restaurant list immediately.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Restaurant creation data (name and city ID)
///
/// # Returns
/// - `201 Created` - Successfully created restaurant
/// - `400 Bad Request` - Invalid restaurant data
/// - `404 Not Found` - Referenced city not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/restaurants",
    tag = RESTAURANT_TAG,
    request_body = CreateRestaurantDto,
    responses(
        (status = 201, description = "Successfully created restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid restaurant data", body = ErrorDto),
        (status = 404, description = "Referenced city not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    // Convert DTO to domain params
    let params = CreateRestaurantParams::from_dto(payload);

    let restaurant = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(restaurant.into_dto())))
}

/// Get paginated restaurants.
///
/// Returns a paginated list of restaurants with their resolved cities and
/// dish counts.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of restaurants
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/restaurants",
    tag = RESTAURANT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved restaurants", body = PaginatedRestaurantsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurants(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    let restaurants = service.get_paginated(params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(restaurants.into_dto())))
}

/// Get a specific restaurant by ID.
///
/// Returns the restaurant with its resolved city and its list of dishes.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `restaurant_id` - Restaurant ID to fetch
///
/// # Returns
/// - `200 OK` - Restaurant details with city and dishes
/// - `404 Not Found` - Restaurant not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/restaurants/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved restaurant", body = RestaurantDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_by_id(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    let restaurant = service.get_by_id(restaurant_id).await?;

    match restaurant {
        Some(restaurant) => Ok((StatusCode::OK, Json(restaurant.into_dto()))),
        None => Err(AppError::NotFound("Restaurant not found".to_string())),
    }
}

/// Update a restaurant.
///
/// Updates the restaurant's name and city. Changing the city moves the
/// restaurant: it leaves the old city's restaurant list and appears in the
/// new one as a single atomic change.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `restaurant_id` - Restaurant ID to update
/// - `payload` - Updated restaurant data (name and city ID)
///
/// # Returns
/// - `200 OK` - Successfully updated restaurant
/// - `400 Bad Request` - Invalid restaurant data
/// - `404 Not Found` - Restaurant or referenced city not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/restaurants/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    request_body = UpdateRestaurantDto,
    responses(
        (status = 200, description = "Successfully updated restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid restaurant data", body = ErrorDto),
        (status = 404, description = "Restaurant or referenced city not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<UpdateRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    // Convert DTO to domain params
    let params = UpdateRestaurantParams::from_dto(restaurant_id, payload);

    let restaurant = service.update(params).await?;

    match restaurant {
        Some(restaurant) => Ok((StatusCode::OK, Json(restaurant.into_dto()))),
        None => Err(AppError::NotFound("Restaurant not found".to_string())),
    }
}

/// Delete a restaurant.
///
/// Deletes the restaurant along with its dishes and returns its last-known
/// state. The restaurant disappears from its city's restaurant list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `restaurant_id` - Restaurant ID to delete
///
/// # Returns
/// - `200 OK` - Last-known state of the deleted restaurant
/// - `404 Not Found` - Restaurant not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/restaurants/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted restaurant", body = RestaurantDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RestaurantService::new(&state.db);

    let restaurant = service.delete(restaurant_id).await?;

    match restaurant {
        Some(restaurant) => Ok((StatusCode::OK, Json(restaurant.into_dto()))),
        None => Err(AppError::NotFound("Restaurant not found".to_string())),
    }
}
