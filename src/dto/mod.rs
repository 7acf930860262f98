//! Wire types serialized to and from HTTP request and response bodies.
//!
//! DTOs are plain serde structs annotated with `ToSchema` for OpenAPI
//! documentation. They carry no behavior; conversion to and from domain
//! models happens at the controller boundary.

pub mod api;
pub mod city;
pub mod dish;
pub mod restaurant;
