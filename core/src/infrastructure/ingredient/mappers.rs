use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{
            entities::Ingredient,
            value_objects::{IngredientChanges, NewIngredient},
        },
    },
    infrastructure::airtable::record::{AirtableRecord, decode_json_field, encode_json_field},
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IngredientFields {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub proteins: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
    pub vitamins: Option<Value>,
    pub minerals: Option<Value>,
    pub allergens: Option<Value>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngredientWriteFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proteins: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamins: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minerals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

fn encode_list(column: &str, values: Option<Vec<String>>) -> Result<Option<String>, CoreError> {
    values.map(|v| encode_json_field(column, &v)).transpose()
}

impl From<AirtableRecord<IngredientFields>> for Ingredient {
    fn from(record: AirtableRecord<IngredientFields>) -> Self {
        let fields = record.fields;

        Ingredient {
            vitamins: decode_json_field(&record.id, "vitamins", fields.vitamins),
            minerals: decode_json_field(&record.id, "minerals", fields.minerals),
            allergens: decode_json_field(&record.id, "allergens", fields.allergens),
            id: record.id,
            name: fields.name.unwrap_or_default(),
            calories: fields.calories.unwrap_or_default(),
            proteins: fields.proteins.unwrap_or_default(),
            carbs: fields.carbs.unwrap_or_default(),
            fats: fields.fats.unwrap_or_default(),
            unit: fields.unit.unwrap_or_default(),
        }
    }
}

impl TryFrom<NewIngredient> for IngredientWriteFields {
    type Error = CoreError;

    fn try_from(ingredient: NewIngredient) -> Result<Self, Self::Error> {
        Ok(Self {
            name: Some(ingredient.name),
            calories: Some(ingredient.calories),
            proteins: Some(ingredient.proteins),
            carbs: Some(ingredient.carbs),
            fats: Some(ingredient.fats),
            vitamins: encode_list("vitamins", Some(ingredient.vitamins))?,
            minerals: encode_list("minerals", Some(ingredient.minerals))?,
            allergens: encode_list("allergens", Some(ingredient.allergens))?,
            unit: Some(ingredient.unit),
        })
    }
}

impl TryFrom<IngredientChanges> for IngredientWriteFields {
    type Error = CoreError;

    fn try_from(changes: IngredientChanges) -> Result<Self, Self::Error> {
        Ok(Self {
            name: changes.name,
            calories: changes.calories,
            proteins: changes.proteins,
            carbs: changes.carbs,
            fats: changes.fats,
            vitamins: encode_list("vitamins", changes.vitamins)?,
            minerals: encode_list("minerals", changes.minerals)?,
            allergens: encode_list("allergens", changes.allergens)?,
            unit: changes.unit,
        })
    }
}
