use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    common::{SortOrder, entities::app_errors::CoreError},
    recipe::entities::{
        DEFAULT_AUTHOR_ID, Difficulty, NutritionalAnalysis, RecipeDraft, RecipeIngredient,
    },
};

/// Columns a recipe listing may be sorted on.
pub const RECIPE_SORT_FIELDS: &[&str] = &[
    "name",
    "createdAt",
    "updatedAt",
    "likes",
    "prepTime",
    "cookTime",
    "servings",
    "difficulty",
    "category",
];

#[derive(Debug, Clone, Default)]
pub struct GetRecipesFilter {
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
    pub is_public: Option<bool>,
    pub sort: Vec<SortOrder>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// The author sent by a client is accepted and then ignored.
pub struct CreateRecipeInput {
    pub draft: RecipeDraft,
    pub author_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<RecipeIngredient>>,
    pub instructions: Option<Vec<String>>,
    pub servings: Option<u32>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_public: Option<bool>,
}

/// A recipe record about to be created. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub draft: RecipeDraft,
    pub author_id: String,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

impl NewRecipe {
    pub fn from_draft(draft: RecipeDraft) -> Self {
        Self {
            draft,
            author_id: DEFAULT_AUTHOR_ID.to_string(),
            likes: 0,
            created_at: Utc::now(),
        }
    }
}

/// Partial update of a recipe record; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<RecipeIngredient>>,
    pub instructions: Option<Vec<String>>,
    pub servings: Option<u32>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_public: Option<bool>,
    pub likes: Option<u32>,
    pub nutritional_analysis: Option<NutritionalAnalysis>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<UpdateRecipeInput> for RecipeChanges {
    fn from(input: UpdateRecipeInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            ingredients: input.ingredients,
            instructions: input.instructions,
            servings: input.servings,
            prep_time: input.prep_time,
            cook_time: input.cook_time,
            difficulty: input.difficulty,
            category: input.category,
            image_url: input.image_url,
            is_public: input.is_public,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeOutcome {
    pub recipe_id: String,
    pub likes: u32,
    pub liked: bool,
}

pub fn validate_draft(draft: &RecipeDraft) -> Result<(), CoreError> {
    if draft.name.trim().is_empty() {
        return Err(CoreError::Invalid("name is required".to_string()));
    }
    validate_ingredients(&draft.ingredients)?;
    validate_instructions(&draft.instructions)?;
    if draft.servings == 0 {
        return Err(CoreError::Invalid(
            "servings must be at least 1".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_changes(changes: &RecipeChanges) -> Result<(), CoreError> {
    if let Some(name) = &changes.name
        && name.trim().is_empty()
    {
        return Err(CoreError::Invalid("name is required".to_string()));
    }
    if let Some(ingredients) = &changes.ingredients {
        validate_ingredients(ingredients)?;
    }
    if let Some(instructions) = &changes.instructions {
        validate_instructions(instructions)?;
    }
    if changes.servings == Some(0) {
        return Err(CoreError::Invalid(
            "servings must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_ingredients(ingredients: &[RecipeIngredient]) -> Result<(), CoreError> {
    if ingredients.is_empty() {
        return Err(CoreError::Invalid(
            "at least one ingredient is required".to_string(),
        ));
    }
    if ingredients.iter().any(|i| i.name.trim().is_empty()) {
        return Err(CoreError::Invalid(
            "ingredient name is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_instructions(instructions: &[String]) -> Result<(), CoreError> {
    if instructions.iter().all(|step| step.trim().is_empty()) {
        return Err(CoreError::Invalid(
            "at least one instruction is required".to_string(),
        ));
    }
    Ok(())
}
