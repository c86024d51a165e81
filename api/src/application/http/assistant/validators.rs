use aircook_core::domain::{
    assistant::{
        entities::ChatMessage,
        value_objects::{AnalyzeNutritionInput, ChatInput, GenerateRecipeInput},
    },
    recipe::entities::RecipeIngredient,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatValidator {
    #[validate(length(min = 1, max = 4000, message = "le message doit contenir entre 1 et 4000 caractères"))]
    pub message: String,

    /// Previous turns of the conversation, oldest first.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

impl From<ChatValidator> for ChatInput {
    fn from(payload: ChatValidator) -> Self {
        ChatInput {
            message: payload.message,
            history: payload.history,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    #[validate(length(min = 1, message = "au moins un ingrédient est requis"))]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub preferences: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 50, message = "le nombre de portions doit être entre 1 et 50"))]
    pub servings: Option<u32>,

    /// Persist the generated recipe when it could be parsed.
    #[serde(default)]
    pub save: bool,
}

impl From<GenerateRecipeValidator> for GenerateRecipeInput {
    fn from(payload: GenerateRecipeValidator) -> Self {
        GenerateRecipeInput {
            ingredients: payload.ingredients,
            preferences: payload.preferences,
            servings: payload.servings,
            save: payload.save,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeNutritionValidator {
    /// Analyze a stored recipe and write the result back to it.
    #[serde(default)]
    pub recipe_id: Option<String>,

    /// Free ingredient list, used when no `recipeId` is given.
    #[serde(default)]
    pub ingredients: Option<Vec<RecipeIngredient>>,
}

impl From<AnalyzeNutritionValidator> for AnalyzeNutritionInput {
    fn from(payload: AnalyzeNutritionValidator) -> Self {
        AnalyzeNutritionInput {
            recipe_id: payload.recipe_id,
            ingredients: payload.ingredients,
        }
    }
}
