//! REST CRUD backend for managing cities, restaurants, and dishes.
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, validation, and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **DTO Layer** (`dto/`) - Wire types serialized to and from request bodies
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** validates input, opens the transaction, orchestrates data operations
//! 4. **Data** queries the database, returns entity models
//! 5. **Service** returns domain model to controller
//! 6. **Controller** converts domain model to DTO, returns HTTP response
//!
//! # Relationship handling
//!
//! A restaurant's parent city is stored exactly once, as the `city_id`
//! foreign key on the restaurant row. City-side views (restaurant lists and
//! counts) are derived by query, so the two directions of the relationship
//! can never disagree: re-parenting a restaurant is a single row update
//! inside one transaction.

mod config;
mod controller;
mod data;
mod dto;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Using database backend: {:?}", db.get_database_backend());

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
