use aircook_core::domain::recipe::{
    entities::{Difficulty, RecipeDraft, RecipeIngredient},
    value_objects::UpdateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_public() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "le nom est requis"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "au moins un ingrédient est requis"))]
    pub ingredients: Vec<RecipeIngredient>,

    #[validate(length(min = 1, message = "au moins une instruction est requise"))]
    pub instructions: Vec<String>,

    #[validate(range(min = 1, message = "le nombre de portions doit être au moins 1"))]
    pub servings: u32,

    #[serde(default)]
    pub prep_time: u32,

    #[serde(default)]
    pub cook_time: u32,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default = "default_public")]
    pub is_public: bool,

    /// Ignored, recipes are always authored by `chef`.
    #[serde(default, rename = "authorID")]
    pub author_id: Option<String>,
}

impl CreateRecipeValidator {
    pub fn into_draft(self) -> (RecipeDraft, Option<String>) {
        let draft = RecipeDraft {
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            servings: self.servings,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            difficulty: self.difficulty,
            category: self.category,
            image_url: self.image_url,
            is_public: self.is_public,
        };

        (draft, self.author_id)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "le nom ne peut pas être vide"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "au moins un ingrédient est requis"))]
    pub ingredients: Option<Vec<RecipeIngredient>>,

    #[serde(default)]
    #[validate(length(min = 1, message = "au moins une instruction est requise"))]
    pub instructions: Option<Vec<String>>,

    #[serde(default)]
    #[validate(range(min = 1, message = "le nombre de portions doit être au moins 1"))]
    pub servings: Option<u32>,

    #[serde(default)]
    pub prep_time: Option<u32>,

    #[serde(default)]
    pub cook_time: Option<u32>,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_public: Option<bool>,
}

impl From<UpdateRecipeValidator> for UpdateRecipeInput {
    fn from(payload: UpdateRecipeValidator) -> Self {
        UpdateRecipeInput {
            name: payload.name,
            description: payload.description,
            ingredients: payload.ingredients,
            instructions: payload.instructions,
            servings: payload.servings,
            prep_time: payload.prep_time,
            cook_time: payload.cook_time,
            difficulty: payload.difficulty,
            category: payload.category,
            image_url: payload.image_url,
            is_public: payload.is_public,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_payload_defaults() {
        let payload: CreateRecipeValidator = serde_json::from_value(json!({
            "name": "Ratatouille",
            "ingredients": [{ "name": "courgette", "quantity": 2 }],
            "instructions": ["Couper", "Mijoter"],
            "servings": 4,
            "authorID": "someone-else"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        let (draft, author) = payload.into_draft();
        assert_eq!(author.as_deref(), Some("someone-else"));
        assert_eq!(draft.difficulty, Difficulty::Moyen);
        assert!(draft.is_public);
        assert_eq!(draft.ingredients[0].quantity, "2");
    }

    #[test]
    fn test_create_payload_requires_ingredients_and_servings() {
        let payload: CreateRecipeValidator = serde_json::from_value(json!({
            "name": "Vide",
            "ingredients": [],
            "instructions": ["Rien"],
            "servings": 0
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("ingredients"));
        assert!(fields.contains_key("servings"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn test_update_payload_validates_present_fields_only() {
        let empty = UpdateRecipeValidator::default();
        assert!(empty.validate().is_ok());

        let blank_name = UpdateRecipeValidator {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(blank_name.validate().is_err());
    }
}
