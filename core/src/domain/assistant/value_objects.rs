use crate::domain::{assistant::entities::ChatMessage, recipe::entities::RecipeIngredient};

/// Number of previous messages forwarded to the model with a chat turn.
pub const MAX_HISTORY_MESSAGES: usize = 10;

pub struct ChatInput {
    pub message: String,
    pub history: Vec<ChatMessage>,
}

pub struct GenerateRecipeInput {
    pub ingredients: Vec<String>,
    pub preferences: Option<String>,
    pub servings: Option<u32>,
    pub save: bool,
}

/// Either a stored recipe or a free ingredient list must be given.
pub struct AnalyzeNutritionInput {
    pub recipe_id: Option<String>,
    pub ingredients: Option<Vec<RecipeIngredient>>,
}
