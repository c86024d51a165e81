use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Every recipe is persisted under this author, whoever created it.
pub const DEFAULT_AUTHOR_ID: &str = "chef";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Facile,
    #[default]
    Moyen,
    Difficile,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Facile => "Facile",
            Difficulty::Moyen => "Moyen",
            Difficulty::Difficile => "Difficile",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "facile" => Some(Difficulty::Facile),
            "moyen" => Some(Difficulty::Moyen),
            "difficile" => Some(Difficulty::Difficile),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub name: String,
    /// Kept as text: clients send numbers, the assistant sends values like `1/2`.
    #[serde(default, deserialize_with = "quantity_as_text")]
    #[schema(value_type = String)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

impl RecipeIngredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Quantity {
    Text(String),
    Number(serde_json::Number),
}

fn quantity_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Quantity>::deserialize(deserializer)? {
        Some(Quantity::Text(text)) => text,
        Some(Quantity::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionalAnalysis {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
    pub vitamins: Vec<String>,
    pub minerals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub servings: u32,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub category: String,
    pub image_url: Option<String>,
    pub is_public: bool,
    #[serde(rename = "authorID")]
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes: u32,
    pub nutritional_analysis: Option<NutritionalAnalysis>,
}

impl Recipe {
    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| i.name.clone()).collect()
    }
}

/// Caller-editable part of a recipe, also produced by the assistant parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub servings: u32,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub category: String,
    pub image_url: Option<String>,
    pub is_public: bool,
}
