pub mod analyze_nutrition;
pub mod chat;
pub mod generate_recipe;
