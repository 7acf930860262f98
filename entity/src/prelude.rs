pub use super::city::Entity as City;
pub use super::dish::Entity as Dish;
pub use super::restaurant::Entity as Restaurant;
