use crate::domain::common::SortOrder;

pub const INGREDIENT_SORT_FIELDS: &[&str] = &["name", "calories", "proteins", "carbs", "fats"];

#[derive(Debug, Clone, Default)]
pub struct GetIngredientsFilter {
    pub search: Option<String>,
    pub allergen: Option<String>,
    pub sort: Vec<SortOrder>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewIngredient {
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientChanges {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub proteins: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
    pub vitamins: Option<Vec<String>>,
    pub minerals: Option<Vec<String>>,
    pub allergens: Option<Vec<String>>,
    pub unit: Option<String>,
}
