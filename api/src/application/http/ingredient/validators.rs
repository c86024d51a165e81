use aircook_core::domain::ingredient::value_objects::{IngredientChanges, NewIngredient};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientValidator {
    #[validate(length(min = 1, message = "le nom est requis"))]
    pub name: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "les calories ne peuvent pas être négatives"))]
    pub calories: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub proteins: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub carbs: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub fats: f64,

    #[serde(default)]
    pub vitamins: Vec<String>,

    #[serde(default)]
    pub minerals: Vec<String>,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub unit: String,
}

impl From<CreateIngredientValidator> for NewIngredient {
    fn from(payload: CreateIngredientValidator) -> Self {
        NewIngredient {
            name: payload.name,
            calories: payload.calories,
            proteins: payload.proteins,
            carbs: payload.carbs,
            fats: payload.fats,
            vitamins: payload.vitamins,
            minerals: payload.minerals,
            allergens: payload.allergens,
            unit: payload.unit,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateIngredientValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "le nom ne peut pas être vide"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub calories: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub proteins: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub carbs: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub fats: Option<f64>,

    #[serde(default)]
    pub vitamins: Option<Vec<String>>,

    #[serde(default)]
    pub minerals: Option<Vec<String>>,

    #[serde(default)]
    pub allergens: Option<Vec<String>>,

    #[serde(default)]
    pub unit: Option<String>,
}

impl From<UpdateIngredientValidator> for IngredientChanges {
    fn from(payload: UpdateIngredientValidator) -> Self {
        IngredientChanges {
            name: payload.name,
            calories: payload.calories,
            proteins: payload.proteins,
            carbs: payload.carbs,
            fats: payload.fats,
            vitamins: payload.vitamins,
            minerals: payload.minerals,
            allergens: payload.allergens,
            unit: payload.unit,
        }
    }
}
