use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{DEFAULT_AUTHOR_ID, Difficulty, Recipe},
            value_objects::{NewRecipe, RecipeChanges},
        },
    },
    infrastructure::airtable::record::{
        AirtableRecord, decode_count, decode_datetime, decode_json_field, encode_json_field,
        format_timestamp,
    },
};

/// Columns of the `Recipes` table as Airtable returns them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Value>,
    pub instructions: Option<Value>,
    pub servings: Option<f64>,
    pub prep_time: Option<f64>,
    pub cook_time: Option<f64>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_public: Option<bool>,
    #[serde(rename = "authorID")]
    pub author_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub likes: Option<f64>,
    pub nutritional_analysis: Option<Value>,
}

/// Columns written on create or update; `None` columns are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeWriteFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(rename = "authorID", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_analysis: Option<String>,
}

impl From<AirtableRecord<RecipeFields>> for Recipe {
    fn from(record: AirtableRecord<RecipeFields>) -> Self {
        let fields = record.fields;
        let created_at = decode_datetime(fields.created_at.as_deref(), record.created_time);

        Recipe {
            ingredients: decode_json_field(&record.id, "ingredients", fields.ingredients),
            instructions: decode_json_field(&record.id, "instructions", fields.instructions),
            nutritional_analysis: decode_json_field(
                &record.id,
                "nutritionalAnalysis",
                fields.nutritional_analysis,
            ),
            id: record.id,
            name: fields.name.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            servings: decode_count(fields.servings),
            prep_time: decode_count(fields.prep_time),
            cook_time: decode_count(fields.cook_time),
            difficulty: fields
                .difficulty
                .as_deref()
                .and_then(Difficulty::from_label)
                .unwrap_or_default(),
            category: fields.category.unwrap_or_default(),
            image_url: fields.image_url.filter(|url| !url.trim().is_empty()),
            is_public: fields.is_public.unwrap_or(false),
            author_id: fields
                .author_id
                .unwrap_or_else(|| DEFAULT_AUTHOR_ID.to_string()),
            created_at,
            updated_at: decode_datetime(fields.updated_at.as_deref(), Some(created_at)),
            likes: decode_count(fields.likes),
        }
    }
}

impl TryFrom<NewRecipe> for RecipeWriteFields {
    type Error = CoreError;

    fn try_from(recipe: NewRecipe) -> Result<Self, Self::Error> {
        let draft = recipe.draft;
        let timestamp = format_timestamp(recipe.created_at);

        Ok(Self {
            name: Some(draft.name),
            description: Some(draft.description),
            ingredients: Some(encode_json_field("ingredients", &draft.ingredients)?),
            instructions: Some(encode_json_field("instructions", &draft.instructions)?),
            servings: Some(draft.servings),
            prep_time: Some(draft.prep_time),
            cook_time: Some(draft.cook_time),
            difficulty: Some(draft.difficulty.as_str().to_string()),
            category: Some(draft.category),
            image_url: draft.image_url,
            is_public: Some(draft.is_public),
            author_id: Some(recipe.author_id),
            created_at: Some(timestamp.clone()),
            updated_at: Some(timestamp),
            likes: Some(recipe.likes),
            nutritional_analysis: None,
        })
    }
}

impl TryFrom<RecipeChanges> for RecipeWriteFields {
    type Error = CoreError;

    fn try_from(changes: RecipeChanges) -> Result<Self, Self::Error> {
        Ok(Self {
            name: changes.name,
            description: changes.description,
            ingredients: changes
                .ingredients
                .map(|i| encode_json_field("ingredients", &i))
                .transpose()?,
            instructions: changes
                .instructions
                .map(|i| encode_json_field("instructions", &i))
                .transpose()?,
            servings: changes.servings,
            prep_time: changes.prep_time,
            cook_time: changes.cook_time,
            difficulty: changes.difficulty.map(|d| d.as_str().to_string()),
            category: changes.category,
            image_url: changes.image_url,
            is_public: changes.is_public,
            author_id: None,
            created_at: None,
            updated_at: changes.updated_at.map(format_timestamp),
            likes: changes.likes,
            nutritional_analysis: changes
                .nutritional_analysis
                .map(|a| encode_json_field("nutritionalAnalysis", &a))
                .transpose()?,
        })
    }
}
