pub mod allergy;
pub mod assistant;
pub mod authentication;
pub mod common;
pub mod crypto;
pub mod ingredient;
pub mod recipe;
pub mod user;
