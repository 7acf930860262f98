//! SeaORM entity definitions for the restaurant API.
//!
//! The city and restaurant relationship is stored exactly once, as the
//! `restaurant.city_id` foreign key. A city's restaurant list is always
//! derived by querying this column, never kept as a separate collection.

pub mod city;
pub mod dish;
pub mod restaurant;

pub mod prelude;
