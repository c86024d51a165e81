use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrition facts of one catalog ingredient, expressed per `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
    pub vitamins: Vec<String>,
    pub minerals: Vec<String>,
    pub allergens: Vec<String>,
    pub unit: String,
}
