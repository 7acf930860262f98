//! HTTP request handlers.
//!
//! Controllers convert incoming DTOs into operation params, call the matching
//! service, and convert the resulting domain model back into a response DTO.
//! No business logic lives here.

pub mod city;
pub mod dish;
pub mod restaurant;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
