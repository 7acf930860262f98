//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! result carriers to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same methods run
//! against the pooled connection or inside an open transaction; the service
//! layer owns the transaction boundary.

pub mod city;
pub mod dish;
pub mod restaurant;

#[cfg(test)]
mod test;
