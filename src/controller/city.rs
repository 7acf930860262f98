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
        city::{CityDto, CreateCityDto, PaginatedCitiesDto},
    },
    error::AppError,
    model::city::CreateCityParams,
    service::city::CityService,
    state::AppState,
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

/// Create a new city.
///
/// Creates a new city with the provided name. The city starts with an empty
/// restaurant list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - City creation data (name)
///
/// # Returns
/// - `201 Created` - Successfully created city
/// - `400 Bad Request` - Invalid city data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = CITY_TAG,
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "Successfully created city", body = CityDto),
        (status = 400, description = "Invalid city data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    Json(payload): Json<CreateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    // Convert DTO to domain params
    let params = CreateCityParams::from_dto(payload);

    let city = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(city.into_dto())))
}

/// Get paginated cities.
///
/// Returns a paginated list of cities with their derived restaurant counts.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of cities
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cities", body = PaginatedCitiesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let cities = service.get_paginated(params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(cities.into_dto())))
}

/// Get a specific city by ID.
///
/// Returns the city together with the list of restaurants currently located
/// in it. The restaurant list is derived from each restaurant's city
/// reference, so it always reflects the latest moves.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `city_id` - City ID to fetch
///
/// # Returns
/// - `200 OK` - City details with restaurants
/// - `404 Not Found` - City not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}",
    tag = CITY_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved city", body = CityDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city_by_id(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let city = service.get_by_id(city_id).await?;

    match city {
        Some(city) => Ok((StatusCode::OK, Json(city.into_dto()))),
        None => Err(AppError::NotFound("City not found".to_string())),
    }
}

/// Delete a city.
///
/// Deletes the city along with all restaurants located in it and their
/// dishes, and returns the city's last-known state.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `city_id` - City ID to delete
///
/// # Returns
/// - `200 OK` - Last-known state of the deleted city
/// - `404 Not Found` - City not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cities/{city_id}",
    tag = CITY_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted city", body = CityDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let city = service.delete(city_id).await?;

    match city {
        Some(city) => Ok((StatusCode::OK, Json(city.into_dto()))),
        None => Err(AppError::NotFound("City not found".to_string())),
    }
}
