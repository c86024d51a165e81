use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{
        allergy::{
            entities::Allergy,
            value_objects::{AllergyChanges, NewAllergy},
        },
        common::entities::app_errors::CoreError,
    },
    infrastructure::airtable::record::{AirtableRecord, decode_json_field, encode_json_field},
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AllergyFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllergyWriteFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl From<AirtableRecord<AllergyFields>> for Allergy {
    fn from(record: AirtableRecord<AllergyFields>) -> Self {
        let fields = record.fields;

        Allergy {
            keywords: decode_json_field(&record.id, "keywords", fields.keywords),
            id: record.id,
            name: fields.name.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
        }
    }
}

impl TryFrom<NewAllergy> for AllergyWriteFields {
    type Error = CoreError;

    fn try_from(allergy: NewAllergy) -> Result<Self, Self::Error> {
        Ok(Self {
            name: Some(allergy.name),
            description: Some(allergy.description),
            keywords: Some(encode_json_field("keywords", &allergy.keywords)?),
        })
    }
}

impl TryFrom<AllergyChanges> for AllergyWriteFields {
    type Error = CoreError;

    fn try_from(changes: AllergyChanges) -> Result<Self, Self::Error> {
        Ok(Self {
            name: changes.name,
            description: changes.description,
            keywords: changes
                .keywords
                .map(|k| encode_json_field("keywords", &k))
                .transpose()?,
        })
    }
}
