pub mod client;
pub mod formula;
pub mod record;

pub const RECIPES_TABLE: &str = "Recipes";
pub const USERS_TABLE: &str = "Users";
pub const INGREDIENTS_TABLE: &str = "Ingredients";
pub const ALLERGIES_TABLE: &str = "Allergies";
