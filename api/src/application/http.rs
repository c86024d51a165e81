pub mod allergy;
pub mod assistant;
pub mod health;
pub mod ingredient;
pub mod query_extractor;
pub mod query_params;
pub mod recipe;
pub mod server;
pub mod user;
