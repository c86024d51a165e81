pub mod create_recipe;
pub mod delete_recipe;
pub mod get_recipe;
pub mod get_recipe_allergies;
pub mod get_recipes;
pub mod toggle_like;
pub mod update_recipe;
