pub mod airtable;
pub mod allergy;
pub mod crypto;
pub mod ingredient;
pub mod jwt;
pub mod llm;
pub mod recipe;
pub mod user;
