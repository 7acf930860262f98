use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        dish::{CreateDishDto, DishDto, UpdateDishDto},
    },
    error::AppError,
    model::dish::{CreateDishParams, UpdateDishParams},
    service::dish::DishService,
    state::AppState,
};

/// Tag for grouping dish endpoints in OpenAPI documentation
pub static DISH_TAG: &str = "dish";

/// Create a new dish.
///
/// Creates a new dish on the addressed restaurant's menu. The restaurant
/// must already exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `restaurant_id` - Restaurant ID the dish belongs to
/// - `payload` - Dish creation data (name and price)
///
/// # Returns
/// - `201 Created` - Successfully created dish
/// - `400 Bad Request` - Invalid dish data
/// - `404 Not Found` - Restaurant not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/restaurants/{restaurant_id}/dishes",
    tag = DISH_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    request_body = CreateDishDto,
    responses(
        (status = 201, description = "Successfully created dish", body = DishDto),
        (status = 400, description = "Invalid dish data", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dish(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<CreateDishDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.db);

    // Convert DTO to domain params
    let params = CreateDishParams::from_dto(restaurant_id, payload);

    let dish = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(dish.into_dto())))
}

/// Get all dishes of a restaurant.
///
/// Returns the full menu of the addressed restaurant ordered by dish name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `restaurant_id` - Restaurant ID to fetch dishes for
///
/// # Returns
/// - `200 OK` - List of dishes
/// - `404 Not Found` - Restaurant not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/restaurants/{restaurant_id}/dishes",
    tag = DISH_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved dishes", body = Vec<DishDto>),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dishes(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.db);

    let dishes = service.get_by_restaurant(restaurant_id).await?;

    Ok((
        StatusCode::OK,
        Json(dishes.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific dish by ID.
///
/// Returns the dish if it exists and belongs to the addressed restaurant. A
/// dish reached through the wrong restaurant is reported as not found.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `restaurant_id` - Restaurant ID the dish should belong to
/// - `dish_id` - Dish ID to fetch
///
/// # Returns
/// - `200 OK` - Dish details
/// - `404 Not Found` - Dish not found or belongs to a different restaurant
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/restaurants/{restaurant_id}/dishes/{dish_id}",
    tag = DISH_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID"),
        ("dish_id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved dish", body = DishDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dish_by_id(
    State(state): State<AppState>,
    Path((restaurant_id, dish_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.db);

    let dish = service.get_by_id(restaurant_id, dish_id).await?;

    match dish {
        Some(dish) => Ok((StatusCode::OK, Json(dish.into_dto()))),
        None => Err(AppError::NotFound("Dish not found".to_string())),
    }
}

/// Update a dish.
///
/// Updates the dish's name and price, scoped to the addressed restaurant.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `restaurant_id` - Restaurant ID the dish should belong to
/// - `dish_id` - Dish ID to update
/// - `payload` - Updated dish data (name and price)
///
/// # Returns
/// - `200 OK` - Successfully updated dish
/// - `400 Bad Request` - Invalid dish data
/// - `404 Not Found` - Dish not found or belongs to a different restaurant
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/restaurants/{restaurant_id}/dishes/{dish_id}",
    tag = DISH_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID"),
        ("dish_id" = i32, Path, description = "Dish ID")
    ),
    request_body = UpdateDishDto,
    responses(
        (status = 200, description = "Successfully updated dish", body = DishDto),
        (status = 400, description = "Invalid dish data", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dish(
    State(state): State<AppState>,
    Path((restaurant_id, dish_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateDishDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.db);

    // Convert DTO to domain params
    let params = UpdateDishParams::from_dto(restaurant_id, dish_id, payload);

    let dish = service.update(params).await?;

    match dish {
        Some(dish) => Ok((StatusCode::OK, Json(dish.into_dto()))),
        None => Err(AppError::NotFound("Dish not found".to_string())),
    }
}

/// Delete a dish.
///
/// Deletes the dish scoped to the addressed restaurant and returns its
/// last-known state.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `restaurant_id` - Restaurant ID the dish should belong to
/// - `dish_id` - Dish ID to delete
///
/// # Returns
/// - `200 OK` - Last-known state of the deleted dish
/// - `404 Not Found` - Dish not found or belongs to a different restaurant
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/restaurants/{restaurant_id}/dishes/{dish_id}",
    tag = DISH_TAG,
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID"),
        ("dish_id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted dish", body = DishDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dish(
    State(state): State<AppState>,
    Path((restaurant_id, dish_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = DishService::new(&state.db);

    let dish = service.delete(restaurant_id, dish_id).await?;

    match dish {
        Some(dish) => Ok((StatusCode::OK, Json(dish.into_dto()))),
        None => Err(AppError::NotFound("Dish not found".to_string())),
    }
}
